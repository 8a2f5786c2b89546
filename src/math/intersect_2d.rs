use arrayvec::ArrayVec;

use super::Point;

/// Threshold below which quadratic coefficients are treated as zero.
const QUADRATIC_EPSILON: f64 = 1.0e-6;

/// Real roots of `a·t² + b·t + c = 0`.
///
/// Degrades to the linear root when `a` is negligible. A near-zero
/// discriminant yields a single (double) root. Two roots are returned
/// larger first.
#[must_use]
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> ArrayVec<f64, 2> {
    let mut roots = ArrayVec::new();
    if a.abs() < QUADRATIC_EPSILON {
        if b.abs() >= QUADRATIC_EPSILON {
            roots.push(-c / b);
        }
        return roots;
    }
    let b = b / a;
    let c = c / a;
    let disc = b * b - 4.0 * c;
    if disc >= -QUADRATIC_EPSILON {
        let mid = -0.5 * b;
        if disc > QUADRATIC_EPSILON * QUADRATIC_EPSILON {
            let half = 0.5 * disc.sqrt();
            roots.push(mid + half);
            roots.push(mid - half);
        } else {
            roots.push(mid);
        }
    }
    roots
}

/// Parametric line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: Point,
    d1: Point,
    p2: Point,
    d2: Point,
    parallel_tolerance: f64,
) -> Option<(f64, f64)> {
    let cross = d1 ^ d2;
    if cross.abs() < parallel_tolerance {
        return None;
    }
    let d = p2 - p1;
    let t = (d ^ d2) / cross;
    let u = (d ^ d1) / cross;
    Some((t, u))
}

/// Bounded segment-segment intersection.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: Point,
    a1: Point,
    b0: Point,
    b1: Point,
    eps: f64,
) -> Option<(Point, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;
    let (t, u) = line_line_intersect_2d(a0, da, b0, db, eps)?;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t = t.clamp(0.0, 1.0);
        Some((a0 + da * t, t, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}
