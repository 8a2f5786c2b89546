use crate::error::{GeometryError, Result};
use crate::math::transform::is_mirroring;
use crate::math::{Matrix3, Point};

/// Travel direction of an arc span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcDir {
    Ccw,
    Cw,
}

impl ArcDir {
    /// `1.0` for counter-clockwise, `-1.0` for clockwise.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Ccw => 1.0,
            Self::Cw => -1.0,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Ccw => Self::Cw,
            Self::Cw => Self::Ccw,
        }
    }
}

/// How a span reaches its end vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpanKind {
    /// Straight line.
    Line,
    /// Circular arc about `center`.
    Arc { dir: ArcDir, center: Point },
}

impl SpanKind {
    #[must_use]
    pub fn is_arc(self) -> bool {
        matches!(self, Self::Arc { .. })
    }

    /// Arc center, `None` for lines.
    #[must_use]
    pub fn center(self) -> Option<Point> {
        match self {
            Self::Line => None,
            Self::Arc { center, .. } => Some(center),
        }
    }

    /// Same shape travelled backwards.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Line => Self::Line,
            Self::Arc { dir, center } => Self::Arc {
                dir: dir.reversed(),
                center,
            },
        }
    }
}

/// One curve vertex: the end point `p` plus the kind of span arriving at it.
///
/// For the first vertex of a curve the kind is ignored.
/// `user_data` is an opaque tag carried through edits and offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub kind: SpanKind,
    pub p: Point,
    pub user_data: Option<u64>,
}

impl Vertex {
    /// A vertex reached by a straight line.
    #[must_use]
    pub fn line(p: Point) -> Self {
        Self {
            kind: SpanKind::Line,
            p,
            user_data: None,
        }
    }

    /// A vertex reached by an arc about `center`.
    #[must_use]
    pub fn arc(dir: ArcDir, p: Point, center: Point) -> Self {
        Self {
            kind: SpanKind::Arc { dir, center },
            p,
            user_data: None,
        }
    }

    /// A vertex reached by a counter-clockwise arc.
    #[must_use]
    pub fn ccw(p: Point, center: Point) -> Self {
        Self::arc(ArcDir::Ccw, p, center)
    }

    /// A vertex reached by a clockwise arc.
    #[must_use]
    pub fn cw(p: Point, center: Point) -> Self {
        Self::arc(ArcDir::Cw, p, center)
    }

    /// Builds a vertex from an integer type tag: `0` line, `1` CCW arc,
    /// `-1` CW arc.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidSpanType` for any other tag, and
    /// `GeometryError::MissingArcCenter` for an arc tag without `center`.
    pub fn from_type(code: i32, p: Point, center: Option<Point>) -> Result<Self> {
        let dir = match code {
            0 => return Ok(Self::line(p)),
            1 => ArcDir::Ccw,
            -1 => ArcDir::Cw,
            other => return Err(GeometryError::InvalidSpanType(other).into()),
        };
        let center = center.ok_or(GeometryError::MissingArcCenter)?;
        Ok(Self::arc(dir, p, center))
    }

    /// Attaches an opaque tag.
    #[must_use]
    pub fn with_user_data(mut self, user_data: u64) -> Self {
        self.user_data = Some(user_data);
        self
    }

    /// The integer tag: `0` line, `1` CCW arc, `-1` CW arc.
    #[must_use]
    pub fn type_code(&self) -> i32 {
        match self.kind {
            SpanKind::Line => 0,
            SpanKind::Arc { dir: ArcDir::Ccw, .. } => 1,
            SpanKind::Arc { dir: ArcDir::Cw, .. } => -1,
        }
    }

    #[must_use]
    pub fn center(&self) -> Option<Point> {
        self.kind.center()
    }

    /// Same kind and tag, different end point.
    #[must_use]
    pub fn with_point(mut self, p: Point) -> Self {
        self.p = p;
        self
    }

    /// Transforms the end point and arc center. A mirroring matrix flips the
    /// arc direction so the arc keeps its shape.
    pub fn transform(&mut self, m: &Matrix3) {
        self.p.transform(m);
        if let SpanKind::Arc { dir, center } = self.kind {
            let dir = if is_mirroring(m) { dir.reversed() } else { dir };
            self.kind = SpanKind::Arc {
                dir,
                center: center.transformed(m),
            };
        }
    }
}

impl From<Point> for Vertex {
    fn from(p: Point) -> Self {
        Self::line(p)
    }
}
