use tracing::trace;

use crate::error::{OffsetError, Result};
use crate::geometry::{Curve, Span, Vertex};
use crate::math::Point;

use super::clears_original;

/// Removes self-intersection loops from a raw offset.
///
/// Each span is checked against the spans after it (never its direct
/// neighbour). The first crossing that keeps clear of `original` cuts the
/// span short and the scan resumes from the crossing, dropping the spans in
/// between. The start vertex is always kept.
///
/// # Errors
///
/// Returns `OffsetError::UnresolvedLoop` when a span only meets later spans
/// at crossings that sit too close to `original` and the lookahead runs out.
pub fn eliminate(vertices: &[Vertex], original: &Curve, distance: f64) -> Result<Vec<Vertex>> {
    let n = vertices.len();
    if n < 3 {
        return Ok(vertices.to_vec());
    }
    let tol = original.tolerances();
    let lookahead = tol.max_lookahead.min(n + 1);

    let mut out = Vec::with_capacity(n);
    out.push(vertices[0]);
    let mut start = vertices[0].p;
    let mut k = 1;

    while k < n {
        let mut current = Span::from_parts(start, vertices[k], false, tol);
        let mut next_k = k + 1;
        let mut next_start = vertices[k].p;
        let mut clipped = false;

        let mut j = k + 2;
        let mut scanned = 0;
        while j < n && scanned < lookahead {
            let later = Span::from_parts(vertices[j - 1].p, vertices[j], false, tol);
            if let Some(hit) = first_crossing(&current, &later) {
                if clears_original(hit, original, distance) {
                    trace!(span = k, resume = j, x = hit.x, y = hit.y, "clipped offset loop");
                    current.set_end_point(hit);
                    next_k = j;
                    next_start = hit;
                    clipped = false;
                    break;
                }
                clipped = true;
            }
            j += 1;
            scanned += 1;
        }

        if clipped {
            return Err(OffsetError::UnresolvedLoop { vertex: k }.into());
        }
        out.push(current.end_vertex());
        start = next_start;
        k = next_k;
    }

    Ok(out)
}

/// Crossing of `current` and `later` nearest the start of `current`,
/// ignoring one at the start itself.
fn first_crossing(current: &Span, later: &Span) -> Option<Point> {
    let linear = current.tolerances().linear;
    current
        .intersect(later)
        .into_iter()
        .filter(|p| !p.nearly_eq(current.start(), linear))
        .min_by(|a, b| current.parameter(*a).total_cmp(&current.parameter(*b)))
}
