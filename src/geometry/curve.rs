use super::{BoundingBox, Span, Vertex};
use crate::error::{CurveError, Result};
use crate::math::arc_2d::arc_subdivision_count;
use crate::math::{Matrix3, Point, Tolerances};
use crate::operations::offset::{CurveOffset, PolygonOffset};

/// An ordered run of line and arc spans.
///
/// Vertex 0 is the bare start point; every later vertex describes the span
/// arriving at it. The curve is closed when its first and last points are
/// bitwise equal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Curve {
    vertices: Vec<Vertex>,
    tol: Tolerances,
}

impl Curve {
    /// An empty curve with default tolerances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty curve using `tol` for all its queries.
    #[must_use]
    pub fn with_tolerances(tol: Tolerances) -> Self {
        Self {
            vertices: Vec::new(),
            tol,
        }
    }

    /// Builds a curve, checking every arc span.
    ///
    /// # Errors
    ///
    /// Returns a `GeometryError` for an arc whose ends are not on a common
    /// radius or that starts on its own center.
    pub fn from_vertices(vertices: Vec<Vertex>) -> Result<Self> {
        let mut curve = Self::new();
        for v in vertices {
            curve.push(v)?;
        }
        Ok(curve)
    }

    /// A polyline through `points`.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            vertices: points.into_iter().map(Vertex::line).collect(),
            tol: Tolerances::default(),
        }
    }

    pub(crate) fn from_vertices_unchecked(vertices: Vec<Vertex>, tol: Tolerances) -> Self {
        Self { vertices, tol }
    }

    #[must_use]
    pub fn tolerances(&self) -> Tolerances {
        self.tol
    }

    /// Appends a vertex.
    ///
    /// # Errors
    ///
    /// Same as [`Curve::from_vertices`]; the curve is unchanged on error.
    pub fn push(&mut self, v: Vertex) -> Result<()> {
        if let Some(prev) = self.vertices.last() {
            Span::with_tolerances(prev.p, v, self.tol)?;
        }
        self.vertices.push(v);
        Ok(())
    }

    /// Appends a straight span to `p`.
    pub fn push_point(&mut self, p: Point) {
        self.vertices.push(Vertex::line(p));
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn first_vertex(&self) -> Option<&Vertex> {
        self.vertices.first()
    }

    #[must_use]
    pub fn last_vertex(&self) -> Option<&Vertex> {
        self.vertices.last()
    }

    #[must_use]
    pub fn num_spans(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Span `i`, running from vertex `i` to vertex `i + 1`.
    #[must_use]
    pub fn span(&self, i: usize) -> Option<Span> {
        let start = self.vertices.get(i)?;
        let end = self.vertices.get(i + 1)?;
        Some(Span::from_parts(start.p, *end, i == 0, self.tol))
    }

    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        self.vertices
            .windows(2)
            .enumerate()
            .map(|(i, w)| Span::from_parts(w[0].p, w[1], i == 0, self.tol))
    }

    #[must_use]
    pub fn first_span(&self) -> Option<Span> {
        self.span(0)
    }

    #[must_use]
    pub fn last_span(&self) -> Option<Span> {
        self.span(self.num_spans().checked_sub(1)?)
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) if self.vertices.len() > 1 => first.p.exact_eq(last.p),
            _ => false,
        }
    }

    /// Signed area, positive for clockwise curves. Only meaningful for
    /// closed curves.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.spans().map(|s| s.area()).sum()
    }

    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.area() > 0.0
    }

    #[must_use]
    pub fn perim(&self) -> f64 {
        self.spans().map(|s| s.length()).sum()
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bb = BoundingBox::new();
        if let [only] = self.vertices.as_slice() {
            bb.insert_point(only.p);
        }
        for s in self.spans() {
            bb.insert_box(&s.bounding_box());
        }
        bb
    }

    /// Nearest point on the curve to `p`, `None` when there are no spans.
    #[must_use]
    pub fn nearest_point_to_point(&self, p: Point) -> Option<Point> {
        let mut best: Option<(Point, f64)> = None;
        for s in self.spans() {
            let np = s.nearest_point_to_point(p);
            let d = np.dist(p);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((np, d));
            }
        }
        best.map(|(np, _)| np)
    }

    /// Approximate nearest point on the curve to `span`, with its distance.
    /// See [`Span::nearest_point_to_span`].
    #[must_use]
    pub fn nearest_point_to_span(&self, span: &Span) -> Option<(Point, f64)> {
        let mut best: Option<(Point, f64)> = None;
        for s in self.spans() {
            let (np, d) = s.nearest_point_to_span(span);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((np, d));
            }
        }
        best
    }

    /// Approximate nearest point on this curve to `other`, with its distance.
    #[must_use]
    pub fn nearest_point_to_curve(&self, other: &Self) -> Option<(Point, f64)> {
        let mut best: Option<(Point, f64)> = None;
        for s in other.spans() {
            if let Some((np, d)) = self.nearest_point_to_span(&s) {
                if best.is_none_or(|(_, bd)| d < bd) {
                    best = Some((np, d));
                }
            }
        }
        best
    }

    /// Point at arc length `d` from the start. Clamps to the curve ends.
    #[must_use]
    pub fn perim_to_point(&self, d: f64) -> Point {
        let Some(first) = self.vertices.first() else {
            return Point::ZERO;
        };
        if d <= 0.0 {
            return first.p;
        }
        let mut walked = 0.0;
        for s in self.spans() {
            let len = s.length();
            if d < walked + len {
                return s.mid_perim(d - walked);
            }
            walked += len;
        }
        self.vertices.last().map_or(first.p, |v| v.p)
    }

    /// Arc length from the start to the point on the curve nearest `p`.
    ///
    /// The first span wins near-ties, so a closed curve's start maps to `0`.
    #[must_use]
    pub fn point_to_perim(&self, p: Point) -> Option<f64> {
        let start_bias = 2.0 * self.tol.area_accuracy;
        let mut best: Option<(f64, f64)> = None;
        let mut walked = 0.0;
        for (i, s) in self.spans().enumerate() {
            let np = s.nearest_point_to_point(p);
            let mut d = np.dist(p);
            if i == 0 {
                d -= start_bias;
            }
            if best.is_none_or(|(bd, _)| d < bd) {
                let partial = if np.exact_eq(s.start()) {
                    0.0
                } else {
                    Span::from_parts(s.start(), s.end_vertex().with_point(np), false, self.tol)
                        .length()
                };
                best = Some((d, walked + partial));
            }
            walked += s.length();
        }
        best.map(|(_, perim)| perim)
    }

    /// Reverses the direction of travel, keeping the shape and the tags.
    pub fn reverse(&mut self) {
        let n = self.vertices.len();
        if n < 2 {
            return;
        }
        let old = &self.vertices;
        let mut out = Vec::with_capacity(n);
        out.push(Vertex {
            user_data: old[0].user_data,
            ..Vertex::line(old[n - 1].p)
        });
        for k in 1..n {
            let arriving = &old[n - k];
            out.push(Vertex {
                kind: arriving.kind.reversed(),
                p: old[n - 1 - k].p,
                user_data: arriving.user_data,
            });
        }
        self.vertices = out;
    }

    /// Index of the first span that `p` lies on.
    fn span_containing(&self, p: Point) -> Result<usize> {
        self.spans()
            .position(|s| s.on(p))
            .ok_or_else(|| CurveError::PointNotOnCurve { x: p.x, y: p.y }.into())
    }

    /// Makes `p` the start of the curve. A closed curve stays closed and keeps
    /// its shape; an open curve loses everything before `p`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::PointNotOnCurve` when `p` is not on any span.
    pub fn change_start(&mut self, p: Point) -> Result<()> {
        let s = self.span_containing(p)?;
        let v = &self.vertices;
        let n = v.len();

        let mut out = Vec::with_capacity(n + 2);
        out.push(Vertex::line(p));
        if !p.exact_eq(v[s + 1].p) {
            out.push(v[s + 1]);
        }
        out.extend_from_slice(&v[s + 2..]);
        if self.is_closed() {
            out.extend_from_slice(&v[1..=s]);
            if !p.exact_eq(v[s].p) {
                out.push(v[s + 1].with_point(p));
            }
        }
        self.vertices = out;
        Ok(())
    }

    /// Makes `p` the end of the curve, dropping everything after it. Never
    /// re-closes the curve.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::PointNotOnCurve` when `p` is not on any span.
    pub fn change_end(&mut self, p: Point) -> Result<()> {
        let s = self.span_containing(p)?;
        self.vertices.truncate(s + 2);
        if self.vertices[s].p.exact_eq(p) {
            self.vertices.truncate(s + 1);
        } else if let Some(last) = self.vertices.last_mut() {
            last.p = p;
        }
        Ok(())
    }

    /// Splits the span under `p` in two. A point already on a vertex is left
    /// alone.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::PointNotOnCurve` when `p` is not on any span.
    pub fn break_at(&mut self, p: Point) -> Result<()> {
        if self.vertices.iter().any(|v| v.p.nearly_eq(p, self.tol.linear)) {
            return Ok(());
        }
        let s = self.span_containing(p)?;
        let split = self.vertices[s + 1].with_point(p);
        self.vertices.insert(s + 1, split);
        Ok(())
    }

    /// The curve as points, with arcs split into chords that stray from the
    /// arc by at most `deviation`.
    #[must_use]
    pub fn to_points(&self, deviation: f64) -> Vec<Point> {
        let mut pts = Vec::with_capacity(self.vertices.len());
        if let Some(first) = self.vertices.first() {
            pts.push(first.p);
        }
        for s in self.spans() {
            if let Some(center) = s.center() {
                let sweep = s.included_angle();
                let mut radial = s.start() - center;
                let n = arc_subdivision_count(radial.length(), sweep.abs(), deviation);
                let (sin, cos) = (sweep / f64::from(n)).sin_cos();
                for _ in 1..n {
                    radial.rotate_cs(cos, sin);
                    pts.push(center + radial);
                }
            }
            pts.push(s.end());
        }
        pts
    }

    /// Applies `m` to every vertex. Matrices that distort arcs (non-uniform
    /// scaling, shear) are rejected.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ArcRadiusMismatch` when a transformed arc no
    /// longer ends on its start radius. The curve is unchanged on error.
    pub fn transform(&mut self, m: &Matrix3) -> Result<()> {
        let mut vertices = self.vertices.clone();
        for v in &mut vertices {
            v.transform(m);
        }
        for pair in vertices.windows(2) {
            Span::with_tolerances(pair[0].p, pair[1], self.tol)?;
        }
        self.vertices = vertices;
        Ok(())
    }

    /// Offsets the curve `distance` to the left of travel (negative is right),
    /// falling back to [`MiterPolygonOffset`](crate::MiterPolygonOffset) for
    /// closed curves.
    ///
    /// # Errors
    ///
    /// Returns an `OffsetError` when no offset could be built. The curve is
    /// unchanged on error.
    pub fn offset(&mut self, distance: f64) -> Result<()> {
        *self = CurveOffset::new(self.clone(), distance).execute()?;
        Ok(())
    }

    /// Like [`Curve::offset`] with a caller-supplied polygon fallback.
    ///
    /// # Errors
    ///
    /// Same as [`Curve::offset`].
    pub fn offset_with(&mut self, distance: f64, fallback: &dyn PolygonOffset) -> Result<()> {
        *self = CurveOffset::new(self.clone(), distance)
            .with_fallback(fallback)
            .execute()?;
        Ok(())
    }
}
