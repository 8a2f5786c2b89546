mod fallback;
mod loops;
mod raw_offset;

use tracing::debug;

pub use fallback::{MiterPolygonOffset, PolygonOffset};

use crate::error::{CurveError, OffsetError, Result};
use crate::geometry::{Curve, Vertex};
use crate::math::Point;

/// Offsets a curve sideways by a signed distance.
///
/// Positive distances go to the left of the direction of travel, so a
/// counter-clockwise closed curve shrinks and a clockwise one grows. Spans are
/// offset individually, joined at their corners, and any loops left behind
/// are cut out. If that fails on a closed curve, the curve is flattened and
/// handed to a [`PolygonOffset`] instead.
#[derive(Debug)]
pub struct CurveOffset<'a> {
    curve: Curve,
    distance: f64,
    fallback: &'a dyn PolygonOffset,
}

impl CurveOffset<'static> {
    /// Creates a new `CurveOffset` operation using [`MiterPolygonOffset`] as
    /// the fallback.
    #[must_use]
    pub fn new(curve: Curve, distance: f64) -> Self {
        Self {
            curve,
            distance,
            fallback: &MiterPolygonOffset,
        }
    }
}

impl CurveOffset<'_> {
    /// Replaces the polygon offsetter used for closed curves.
    #[must_use]
    pub fn with_fallback<'b>(self, fallback: &'b dyn PolygonOffset) -> CurveOffset<'b> {
        CurveOffset {
            curve: self.curve,
            distance: self.distance,
            fallback,
        }
    }

    /// Executes the offset and returns the new curve.
    ///
    /// # Errors
    ///
    /// For open curves, returns the error of the direct offset. For closed
    /// curves, returns `OffsetError::FallbackFailed` when the fallback does
    /// not produce exactly one polygon.
    pub fn execute(&self) -> Result<Curve> {
        let tol = self.curve.tolerances();
        if self.distance.abs() < tol.linear || self.curve.num_vertices() < 2 {
            return Ok(self.curve.clone());
        }

        match self.direct() {
            Ok(offset) => Ok(offset),
            Err(err) if self.curve.is_closed() => {
                debug!(%err, distance = self.distance, "direct offset failed, using polygon fallback");
                self.polygon_fallback()
            }
            Err(err) => Err(err),
        }
    }

    fn direct(&self) -> Result<Curve> {
        let raw = raw_offset::build(&self.curve, self.distance)?;
        let vertices = loops::eliminate(&raw, &self.curve, self.distance)?;
        let offset = Curve::from_vertices_unchecked(vertices, self.curve.tolerances());
        if self.curve.is_closed() {
            check_closed(&self.curve, &offset, self.distance)?;
        }
        Ok(offset)
    }

    fn polygon_fallback(&self) -> Result<Curve> {
        let tol = self.curve.tolerances();
        let clockwise = self.curve.is_clockwise();
        let inward = if clockwise { -self.distance } else { self.distance };

        let mut points = self.curve.to_points(tol.linear);
        if points.len() > 1 && points[0].exact_eq(points[points.len() - 1]) {
            points.pop();
        }
        if points.len() < 3 {
            return Err(CurveError::TooFewVertices {
                required: 3,
                actual: points.len(),
            }
            .into());
        }

        let polygons = self.fallback.offset_polygon(&points, inward);
        debug!(polygons = polygons.len(), "polygon fallback finished");
        let [ring] = polygons.as_slice() else {
            return Err(OffsetError::FallbackFailed {
                polygons: polygons.len(),
            }
            .into());
        };
        let Some(&first) = ring.first() else {
            return Err(OffsetError::FallbackFailed { polygons: 0 }.into());
        };

        let mut vertices: Vec<Vertex> = ring.iter().copied().map(Vertex::line).collect();
        if ring.len() == 1 || !first.exact_eq(ring[ring.len() - 1]) {
            vertices.push(Vertex::line(first));
        }
        let mut offset = Curve::from_vertices_unchecked(vertices, tol);
        if offset.is_clockwise() != clockwise {
            offset.reverse();
        }

        // Start the result next to where the source curve starts.
        if let Some(span) = self.curve.first_span() {
            let anchor = span.start() + span.direction_at(0.0).left() * self.distance;
            if let Some(start) = offset.nearest_point_to_point(anchor) {
                offset.change_start(start)?;
            }
        }
        Ok(offset)
    }
}

/// Whether `pt` keeps (almost) `distance` away from every span of `original`.
pub(crate) fn clears_original(pt: Point, original: &Curve, distance: f64) -> bool {
    let min = distance.abs() - original.tolerances().linear;
    original
        .spans()
        .all(|s| s.nearest_point_to_point(pt).dist(pt) >= min)
}

/// Rejects a closed offset that opened up, flipped, or changed size the
/// wrong way.
fn check_closed(original: &Curve, offset: &Curve, distance: f64) -> Result<()> {
    if !offset.is_closed() {
        return Err(OffsetError::NotClosed.into());
    }
    let a = original.area();
    let ao = offset.area();
    if (a < 0.0) != (ao < 0.0) {
        return Err(OffsetError::OrientationFlipped.into());
    }
    let grows = (a > 0.0 && distance > 0.0) || (a < 0.0 && distance < 0.0);
    if (grows && ao.abs() < a.abs()) || (!grows && ao.abs() > a.abs()) {
        return Err(OffsetError::AreaMismatch {
            original: a,
            offset: ao,
        }
        .into());
    }
    Ok(())
}
