use super::{Point, UNIT_VECTOR_TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. Note that
/// [`Curve::area`](crate::geometry::Curve::area) uses the opposite sign.
#[must_use]
pub fn signed_area_2d(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i] ^ points[j];
    }
    sum * 0.5
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the segment has zero length.
pub fn segment_direction(a: Point, b: Point) -> Result<Point> {
    let mut d = b - a;
    let len = d.normalize();
    if len < UNIT_VECTOR_TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "zero-length segment between ({}, {}) and ({}, {})",
            a.x, a.y, b.x, b.y
        ))
        .into());
    }
    Ok(d)
}

/// Drops a trailing point equal to the first one, turning a closed point
/// sequence into a ring.
#[must_use]
pub fn open_ring(points: &[Point]) -> &[Point] {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 && first.exact_eq(*last) => {
            &points[..points.len() - 1]
        }
        _ => points,
    }
}
