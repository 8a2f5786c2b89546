use super::Point;

/// Returns the minimum distance from `p` to the segment `a`–`b`.
#[must_use]
pub fn point_to_segment_dist(p: Point, a: Point, b: Point) -> f64 {
    let d = b - a;
    let len_sq = d * d;

    if len_sq < 1e-20 {
        return p.dist(a);
    }

    // Project onto the infinite line, clamp to [0, 1].
    let t = ((p - a) * d / len_sq).clamp(0.0, 1.0);
    p.dist(a + d * t)
}

/// Returns the minimum distance from `p` to the closed polygon boundary.
#[must_use]
pub fn point_to_polygon_dist(p: Point, polygon: &[Point]) -> f64 {
    let n = polygon.len();
    (0..n)
        .map(|i| point_to_segment_dist(p, polygon[i], polygon[(i + 1) % n]))
        .fold(f64::INFINITY, f64::min)
}
