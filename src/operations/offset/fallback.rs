use std::fmt;

use crate::math::distance_2d::point_to_polygon_dist;
use crate::math::intersect_2d::{line_line_intersect_2d, segment_segment_intersect_2d};
use crate::math::polygon_2d::{open_ring, segment_direction, signed_area_2d};
use crate::math::Point;

/// Numerical floor for the polygon routines below. Much tighter than the
/// curve kernel's linear tolerance: flattened arcs produce very short edges.
const EPSILON: f64 = 1.0e-10;

/// When `cos(angle between consecutive edges) < this`, use a flat cap
/// instead of a miter join. Only for near-180° reversals (> ~169°).
const FLAT_CAP_COS: f64 = -0.98;

/// Maximum miter distance as a multiple of `|distance|`. Longer miters are
/// replaced by a bevel (two points).
const MITER_LIMIT: f64 = 4.0;

/// Polygon offsetter used when the direct curve offset fails.
///
/// Takes one closed polygon (first point not repeated at the end) and a
/// distance, positive to shrink the polygon, negative to grow it. Returns
/// every resulting polygon; an empty result means the polygon vanished.
pub trait PolygonOffset: fmt::Debug {
    fn offset_polygon(&self, polygon: &[Point], inward: f64) -> Vec<Vec<Point>>;
}

/// Miter-join polygon offset. Shifts every edge, joins neighbours with
/// miters (bevels past the miter limit) and splits the ring where it crosses
/// itself.
///
/// Yields one polygon per island. Loops that wind against the source, grow
/// on an inward offset, or come closer to the source than the offset
/// distance are discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiterPolygonOffset;

impl PolygonOffset for MiterPolygonOffset {
    fn offset_polygon(&self, polygon: &[Point], inward: f64) -> Vec<Vec<Point>> {
        let ring = clean_polygon(open_ring(polygon));
        if ring.len() < 3 {
            return Vec::new();
        }
        let area = signed_area_2d(&ring);
        if area.abs() < EPSILON {
            return Vec::new();
        }
        if inward.abs() < EPSILON {
            return vec![ring];
        }

        // Left of travel is inside for a CCW ring.
        let winding = area.signum();
        let Some(raw) = build_offset_ring(&ring, inward * winding) else {
            return Vec::new();
        };
        let clearance = inward.abs() * (1.0 - 1.0e-6) - EPSILON;
        split_closed_loops(&raw, winding)
            .into_iter()
            .filter(|island| !(inward > 0.0 && signed_area_2d(island).abs() > area.abs()))
            .filter(|island| {
                island
                    .iter()
                    .all(|&p| point_to_polygon_dist(p, &ring) >= clearance)
            })
            .collect()
    }
}

/// Offsets every edge of the ring `distance` to its left and joins
/// consecutive edges at their corners. `None` for a zero-length edge.
fn build_offset_ring(points: &[Point], distance: f64) -> Option<Vec<Point>> {
    let n = points.len();

    let mut edges: Vec<(Point, Point)> = Vec::with_capacity(n);
    let mut directions: Vec<Point> = Vec::with_capacity(n);
    for i in 0..n {
        let j = (i + 1) % n;
        let dir = segment_direction(points[i], points[j]).ok()?;
        let shift = dir.left() * distance;
        edges.push((points[i] + shift, points[j] + shift));
        directions.push(dir);
    }

    let mut raw = Vec::with_capacity(n * 2);
    for i in 0..n {
        let prev = if i == 0 { n - 1 } else { i - 1 };
        push_corner(
            &mut raw,
            edges[prev],
            edges[i],
            directions[prev],
            directions[i],
            points[i],
            distance,
        );
    }
    Some(raw)
}

/// Pushes the corner point(s) joining two offset edges.
///
/// - Near-antiparallel edges: flat cap (two points).
/// - Miter exceeding `MITER_LIMIT`: bevel (two points).
/// - Otherwise: the single miter point.
fn push_corner(
    raw: &mut Vec<Point>,
    prev: (Point, Point),
    next: (Point, Point),
    dir_prev: Point,
    dir_next: Point,
    corner: Point,
    distance: f64,
) {
    if dir_prev * dir_next < FLAT_CAP_COS {
        raw.push(prev.1);
        raw.push(next.0);
        return;
    }

    let miter = line_line_intersect_2d(prev.1, prev.1 - prev.0, next.0, next.1 - next.0, EPSILON)
        .map_or_else(
            || corner + dir_prev.left() * distance,
            |(t, _)| prev.1 + (prev.1 - prev.0) * t,
        );
    let limit = MITER_LIMIT * distance.abs();
    if miter.dist(corner) > limit {
        raw.push(prev.1);
        raw.push(next.0);
    } else {
        raw.push(miter);
    }
}

/// Drops consecutive duplicates and collinear points from a ring.
fn clean_polygon(points: &[Point]) -> Vec<Point> {
    let merge = EPSILON * 10.0;
    let mut deduped: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if deduped.last().is_some_and(|last| last.dist(p) < merge) {
            continue;
        }
        deduped.push(p);
    }
    if deduped.len() > 1 && deduped[0].dist(deduped[deduped.len() - 1]) < merge {
        deduped.pop();
    }
    if deduped.len() < 3 {
        return deduped;
    }

    let n = deduped.len();
    let cleaned: Vec<Point> = (0..n)
        .filter(|&i| {
            let prev = deduped[if i == 0 { n - 1 } else { i - 1 }];
            let next = deduped[(i + 1) % n];
            ((deduped[i] - prev) ^ (next - deduped[i])).abs() >= EPSILON
        })
        .map(|i| deduped[i])
        .collect();

    if cleaned.len() < 3 {
        return deduped;
    }
    cleaned
}

fn are_adjacent(i: usize, j: usize, n: usize) -> bool {
    let diff = i.abs_diff(j);
    diff == 1 || diff == n - 1
}

/// First crossing between non-adjacent edges, as `(i, j, point)` with `i < j`.
///
/// Endpoint-to-endpoint touches are skipped; at least one edge must be
/// crossed in its interior.
fn find_first_self_intersection(points: &[Point]) -> Option<(usize, usize, Point)> {
    let n = points.len();
    if n < 4 {
        return None;
    }
    let eps = EPSILON * 100.0;
    for i in 0..n {
        let i_next = (i + 1) % n;
        for j in (i + 2)..n {
            if are_adjacent(i, j, n) {
                continue;
            }
            let j_next = (j + 1) % n;
            if let Some((pt, t, u)) = segment_segment_intersect_2d(
                points[i],
                points[i_next],
                points[j],
                points[j_next],
                EPSILON,
            ) {
                let t_at_end = t < eps || t > 1.0 - eps;
                let u_at_end = u < eps || u > 1.0 - eps;
                if t_at_end && u_at_end {
                    continue;
                }
                return Some((i, j, pt));
            }
        }
    }
    None
}

/// Splits a ring where edges `i < j` cross into the two loops
/// `[x, P(i+1)..=P(j)]` and `[x, P(j+1)..=P(i)]` (wrapping).
fn split_at_intersection(
    points: &[Point],
    i: usize,
    j: usize,
    crossing: Point,
) -> (Vec<Point>, Vec<Point>) {
    let n = points.len();

    let mut a = Vec::with_capacity(j - i + 1);
    a.push(crossing);
    a.extend_from_slice(&points[(i + 1)..=j]);

    let mut b = Vec::with_capacity(n - (j - i) + 1);
    b.push(crossing);
    let mut idx = (j + 1) % n;
    loop {
        b.push(points[idx]);
        if idx == i {
            break;
        }
        idx = (idx + 1) % n;
    }

    (a, b)
}

/// Recursively splits a ring at its self-intersections and returns every
/// loop that winds like the source (`winding` is `+1.0` for CCW).
///
/// Terminates because every split strictly reduces the vertex count.
fn split_closed_loops(points: &[Point], winding: f64) -> Vec<Vec<Point>> {
    let pts = clean_polygon(points);
    if pts.len() < 3 {
        return Vec::new();
    }
    if let Some((i, j, crossing)) = find_first_self_intersection(&pts) {
        let (a, b) = split_at_intersection(&pts, i, j, crossing);
        let mut loops = split_closed_loops(&a, winding);
        loops.extend(split_closed_loops(&b, winding));
        return loops;
    }
    if signed_area_2d(&pts) * winding > EPSILON {
        vec![pts]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn assert_point_near(a: Point, b: Point, tol: f64, msg: &str) {
        assert!(a.nearly_eq(b, tol), "{msg}: ({}, {}) != ({}, {})", a.x, a.y, b.x, b.y);
    }

    fn assert_polygon_eq(result: &[Point], expected: &[Point], tol: f64, label: &str) {
        assert_eq!(
            result.len(),
            expected.len(),
            "{label}: vertex count mismatch, got {}, expected {}",
            result.len(),
            expected.len()
        );
        for (i, (r, e)) in result.iter().zip(expected.iter()).enumerate() {
            assert_point_near(*r, *e, tol, &format!("{label} vertex {i}"));
        }
    }

    fn square(size: f64) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(size, 0.0),
            Point::new(size, size),
            Point::new(0.0, size),
        ]
    }

    fn t_shape() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 1.0),
            Point::new(7.0, 1.0),
            Point::new(7.0, 6.0),
            Point::new(3.0, 6.0),
            Point::new(3.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    fn regular_polygon(radius: f64, sides: u32) -> Vec<Point> {
        (0..sides)
            .map(|i| Point::new(radius, 0.0).rotated(TAU * f64::from(i) / f64::from(sides)))
            .collect()
    }

    #[test]
    fn square_shrinks() {
        let out = MiterPolygonOffset.offset_polygon(&square(10.0), 1.0);
        assert_eq!(out.len(), 1);
        assert_polygon_eq(&out[0], &[
            Point::new(1.0, 1.0),
            Point::new(9.0, 1.0),
            Point::new(9.0, 9.0),
            Point::new(1.0, 9.0),
        ], 1e-9, "square inward");
    }

    #[test]
    fn clockwise_square_shrinks_too() {
        let mut pts = square(10.0);
        pts.reverse();
        let out = MiterPolygonOffset.offset_polygon(&pts, 1.0);
        assert_eq!(out.len(), 1);
        assert!(signed_area_2d(&out[0]) < 0.0);
        assert!((signed_area_2d(&out[0]).abs() - 64.0).abs() < 1e-9);
    }

    #[test]
    fn square_grows_with_negative_distance() {
        let out = MiterPolygonOffset.offset_polygon(&square(10.0), -1.0);
        assert_eq!(out.len(), 1);
        assert!((signed_area_2d(&out[0]) - 144.0).abs() < 1e-9);
    }

    #[test]
    fn closing_point_is_ignored() {
        let mut pts = square(10.0);
        pts.push(pts[0]);
        let out = MiterPolygonOffset.offset_polygon(&pts, 1.0);
        assert_eq!(out[0].len(), 4);
    }

    #[test]
    fn t_shape_inward_d03_full_shape() {
        let out = MiterPolygonOffset.offset_polygon(&t_shape(), 0.3);
        assert_eq!(out.len(), 1);
        assert_polygon_eq(&out[0], &[
            Point::new(0.3, 0.3),
            Point::new(9.7, 0.3),
            Point::new(9.7, 0.7),
            Point::new(6.7, 0.7),
            Point::new(6.7, 5.7),
            Point::new(3.3, 5.7),
            Point::new(3.3, 0.7),
            Point::new(0.3, 0.7),
        ], 1e-6, "T inward d=0.3");
    }

    #[test]
    fn t_shape_inward_d06_bar_collapsed() {
        let out = MiterPolygonOffset.offset_polygon(&t_shape(), 0.6);
        assert_eq!(out.len(), 1);
        assert_polygon_eq(&out[0], &[
            Point::new(3.6, 0.6),
            Point::new(6.4, 0.6),
            Point::new(6.4, 5.4),
            Point::new(3.6, 5.4),
        ], 1e-6, "T inward d=0.6");
    }

    /// Two squares joined by a neck narrower than twice the offset.
    fn dumbbell() -> Vec<Point> {
        [
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 4.5),
            (20.0, 4.5),
            (20.0, 0.0),
            (30.0, 0.0),
            (30.0, 10.0),
            (19.0, 10.0),
            (19.0, 5.5),
            (11.0, 5.5),
            (11.0, 10.0),
            (0.0, 10.0),
        ]
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect()
    }

    #[test]
    fn pinched_neck_gives_two_islands() {
        let out = MiterPolygonOffset.offset_polygon(&dumbbell(), 2.0);
        assert_eq!(out.len(), 2);
        for island in &out {
            assert!((signed_area_2d(island) - 37.5).abs() < 1e-9);
        }
        assert!(out.iter().any(|island| island.iter().all(|p| p.x < 10.0)));
        assert!(out.iter().any(|island| island.iter().all(|p| p.x > 20.0)));
    }

    #[test]
    fn collapsed_polygon_is_dropped() {
        assert!(MiterPolygonOffset.offset_polygon(&square(2.0), 1.5).is_empty());
        assert!(MiterPolygonOffset
            .offset_polygon(&regular_polygon(1.0, 64), 1.0)
            .is_empty());
    }

    #[test]
    fn degenerate_input_gives_nothing() {
        assert!(MiterPolygonOffset
            .offset_polygon(&[Point::ZERO, Point::new(1.0, 0.0)], 0.1)
            .is_empty());
        let flat = [Point::ZERO, Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
        assert!(MiterPolygonOffset.offset_polygon(&flat, 0.1).is_empty());
    }

    #[test]
    fn clean_polygon_removes_duplicates_and_collinear() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert_eq!(clean_polygon(&pts).len(), 4);
    }

    #[test]
    fn hairpin_gets_flat_cap() {
        let mut raw = Vec::new();
        push_corner(
            &mut raw,
            (Point::new(0.0, 1.0), Point::new(5.0, 1.0)),
            (Point::new(5.0, -1.0), Point::new(0.0, -1.0)),
            Point::new(1.0, 0.0),
            Point::new(-1.0, 0.0),
            Point::new(5.0, 0.0),
            1.0,
        );
        assert_eq!(raw, vec![Point::new(5.0, 1.0), Point::new(5.0, -1.0)]);
    }
}
