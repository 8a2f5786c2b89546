use std::f64::consts::TAU;

use arrayvec::ArrayVec;

use super::{BoundingBox, Circle, SpanKind, Vertex};
use crate::error::{GeometryError, OffsetError, Result};
use crate::math::arc_2d::included_angle;
use crate::math::intersect_2d::{line_line_intersect_2d, quadratic_roots};
use crate::math::{Point, Tolerances};

/// Parameters this close to 0 or 1 map to the exact span endpoints.
const PARAM_SNAP: f64 = 1.0e-14;

/// One line or arc segment: a start point plus the vertex it runs to.
///
/// Spans are cheap `Copy` values derived from a [`Curve`](super::Curve) on
/// demand; editing a span never touches the curve it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    start: Point,
    end: Vertex,
    start_span: bool,
    tol: Tolerances,
}

impl Span {
    /// Creates a span from `start` to `end`.
    ///
    /// # Errors
    ///
    /// For arcs, returns `GeometryError::Degenerate` when the start sits on
    /// the center and `GeometryError::ArcRadiusMismatch` when the end is not
    /// on the start radius within the linear tolerance.
    pub fn new(start: Point, end: Vertex) -> Result<Self> {
        Self::with_tolerances(start, end, Tolerances::default())
    }

    /// Like [`Span::new`] with explicit tolerances.
    ///
    /// # Errors
    ///
    /// Same as [`Span::new`].
    pub fn with_tolerances(start: Point, end: Vertex, tol: Tolerances) -> Result<Self> {
        if let SpanKind::Arc { center, .. } = end.kind {
            let r0 = start.dist(center);
            let r1 = end.p.dist(center);
            if r0 <= f64::EPSILON {
                return Err(GeometryError::Degenerate(format!(
                    "arc starting on its center ({}, {})",
                    center.x, center.y
                ))
                .into());
            }
            if (r0 - r1).abs() > tol.linear {
                return Err(GeometryError::ArcRadiusMismatch { start: r0, end: r1 }.into());
            }
        }
        Ok(Self::from_parts(start, end, false, tol))
    }

    /// A straight span.
    #[must_use]
    pub fn line(start: Point, end: Point) -> Self {
        Self::from_parts(start, Vertex::line(end), false, Tolerances::default())
    }

    pub(crate) fn from_parts(start: Point, end: Vertex, start_span: bool, tol: Tolerances) -> Self {
        Self {
            start,
            end,
            start_span,
            tol,
        }
    }

    /// Marks this span as the first span of its curve.
    #[must_use]
    pub fn as_start_span(mut self) -> Self {
        self.start_span = true;
        self
    }

    #[must_use]
    pub fn is_start_span(&self) -> bool {
        self.start_span
    }

    #[must_use]
    pub fn tolerances(&self) -> Tolerances {
        self.tol
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point {
        self.end.p
    }

    #[must_use]
    pub fn end_vertex(&self) -> Vertex {
        self.end
    }

    #[must_use]
    pub fn kind(&self) -> SpanKind {
        self.end.kind
    }

    #[must_use]
    pub fn is_arc(&self) -> bool {
        self.end.kind.is_arc()
    }

    #[must_use]
    pub fn center(&self) -> Option<Point> {
        self.end.kind.center()
    }

    /// Arc radius measured at the start point, `None` for lines.
    #[must_use]
    pub fn radius(&self) -> Option<f64> {
        self.center().map(|c| self.start.dist(c))
    }

    pub(crate) fn set_end_point(&mut self, p: Point) {
        self.end.p = p;
    }

    pub(crate) fn set_start_point(&mut self, p: Point) {
        self.start = p;
    }

    /// A line whose ends coincide exactly.
    #[must_use]
    pub fn is_null(&self) -> bool {
        !self.is_arc() && self.start.exact_eq(self.end.p)
    }

    /// An arc whose ends coincide exactly.
    #[must_use]
    pub fn is_full_circle(&self) -> bool {
        self.is_arc() && self.start.exact_eq(self.end.p)
    }

    /// Signed sweep of an arc (positive CCW), `0` for lines.
    #[must_use]
    pub fn included_angle(&self) -> f64 {
        match self.end.kind {
            SpanKind::Line => 0.0,
            SpanKind::Arc { dir, center } => {
                if self.is_full_circle() {
                    return dir.sign() * TAU;
                }
                let vs = (self.start - center).normalized();
                let ve = (self.end.p - center).normalized();
                included_angle(vs, ve, dir.sign(), self.tol.unit_vector)
            }
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        match self.radius() {
            Some(r) => self.included_angle().abs() * r,
            None => self.start.dist(self.end.p),
        }
    }

    /// Signed area contribution of this span. Summed over a closed curve the
    /// total is positive for clockwise curves.
    #[must_use]
    pub fn area(&self) -> f64 {
        let (p0, p1) = (self.start, self.end.p);
        match self.end.kind {
            SpanKind::Line => 0.5 * (p1.x - p0.x) * (p0.y + p1.y),
            SpanKind::Arc { center: c, .. } => {
                let angle = self.included_angle();
                let r = p0.dist(c);
                0.5 * ((c.x - p0.x) * (c.y + p0.y) - (c.x - p1.x) * (c.y + p1.y) - angle * r * r)
            }
        }
    }

    /// Point at parameter `t` in `[0, 1]` along the span.
    #[must_use]
    pub fn mid_param(&self, t: f64) -> Point {
        if t.abs() < PARAM_SNAP {
            return self.start;
        }
        if (t - 1.0).abs() < PARAM_SNAP {
            return self.end.p;
        }
        match self.end.kind {
            SpanKind::Line => self.start + (self.end.p - self.start) * t,
            SpanKind::Arc { center, .. } => {
                center + (self.start - center).rotated(t * self.included_angle())
            }
        }
    }

    /// Point at arc length `d` from the start.
    #[must_use]
    pub fn mid_perim(&self, d: f64) -> Point {
        match self.end.kind {
            SpanKind::Line => self.start + (self.end.p - self.start).normalized() * d,
            SpanKind::Arc { dir, center } => {
                let r = self.start.dist(center);
                center + (self.start - center).rotated(dir.sign() * d / r)
            }
        }
    }

    /// Parameter of a point known to lie on the span.
    #[must_use]
    pub fn parameter(&self, p: Point) -> f64 {
        match self.end.kind {
            SpanKind::Line => {
                let vs = self.end.p - self.start;
                let len_sq = vs * vs;
                if len_sq <= f64::EPSILON * f64::EPSILON {
                    return 0.0;
                }
                (p - self.start) * vs / len_sq
            }
            SpanKind::Arc { dir, center } => {
                let angle = self.included_angle();
                if angle.abs() < f64::EPSILON {
                    return 0.0;
                }
                let vs = (self.start - center).normalized();
                let v = (p - center).normalized();
                included_angle(vs, v, dir.sign(), self.tol.unit_vector) / angle
            }
        }
    }

    /// Unit tangent at parameter `fraction`, in the direction of travel.
    #[must_use]
    pub fn direction_at(&self, fraction: f64) -> Point {
        match self.end.kind {
            SpanKind::Line => (self.end.p - self.start).normalized(),
            SpanKind::Arc { dir, center } => {
                let radial = (self.mid_param(fraction) - center).normalized();
                radial.left() * dir.sign()
            }
        }
    }

    /// Nearest point on the infinite line or full circle carrying the span.
    #[must_use]
    pub fn nearest_point_not_on_span(&self, p: Point) -> Point {
        match self.end.kind {
            SpanKind::Line => {
                let vs = (self.end.p - self.start).normalized();
                self.start + vs * ((p - self.start) * vs)
            }
            SpanKind::Arc { center, .. } => {
                let mut v = p - center;
                if v.normalize() < self.tol.linear {
                    return self.start;
                }
                center + v * self.start.dist(center)
            }
        }
    }

    /// Nearest point on the span itself. Falls back to the nearer endpoint
    /// when the unconstrained projection lies off the span.
    #[must_use]
    pub fn nearest_point_to_point(&self, p: Point) -> Point {
        let np = self.nearest_point_not_on_span(p);
        let t = self.parameter(np);
        if (0.0..=1.0).contains(&t) {
            return np;
        }
        if p.dist(self.start) <= p.dist(self.end.p) {
            self.start
        } else {
            self.end.p
        }
    }

    /// True when `p` lies on the span within the linear tolerance.
    #[must_use]
    pub fn on(&self, p: Point) -> bool {
        self.nearest_point_to_point(p).nearly_eq(p, self.tol.linear)
    }

    /// Approximate closest point on `self` to `other`, with its distance.
    ///
    /// Samples the start, midpoint and end of each span against the other
    /// one, in both directions. Midpoints win ties by `area_accuracy` and a
    /// curve's start span wins them by twice that. This is a heuristic: for
    /// spans whose closest approach lies away from those samples the answer
    /// is only an upper bound.
    #[must_use]
    pub fn nearest_point_to_span(&self, other: &Self) -> (Point, f64) {
        let (p0, d0, biased0) = self.sample_toward(other);
        let (p1, _, biased1) = other.sample_toward(self);
        if biased1 < biased0 {
            let np = self.nearest_point_to_point(p1);
            (np, np.dist(p1))
        } else {
            (p0, d0)
        }
    }

    /// Best of this span's start, mid and end samples against `other`.
    /// Returns the sample, its true distance and its biased distance.
    fn sample_toward(&self, other: &Self) -> (Point, f64, f64) {
        let bias = self.tol.area_accuracy;
        let start_bias = if self.start_span { 2.0 * bias } else { 0.0 };
        let mid = self.mid_param(0.5);
        let candidates = [
            (self.start, start_bias),
            (mid, bias),
            (self.end.p, 0.0),
        ];

        let mut best = (self.start, f64::INFINITY, f64::INFINITY);
        for (p, b) in candidates {
            let d = other.nearest_point_to_point(p).dist(p);
            if d - b < best.2 {
                best = (p, d, d - b);
            }
        }
        best
    }

    /// Bounding box, including the axis extremes an arc sweeps through.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bb = BoundingBox::from_corners(self.start, self.end.p);
        if let SpanKind::Arc { center, .. } = self.end.kind {
            let r = self.start.dist(center);
            let full = self.is_full_circle();
            for axis in [
                Point::new(r, 0.0),
                Point::new(0.0, r),
                Point::new(-r, 0.0),
                Point::new(0.0, -r),
            ] {
                let q = center + axis;
                if full || (0.0..=1.0).contains(&self.parameter(q)) {
                    bb.insert_point(q);
                }
            }
        }
        bb
    }

    /// Intersection points with another span (at most two).
    ///
    /// Parallel lines report nothing, even when they overlap.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> ArrayVec<Point, 2> {
        let slack = self.tol.linear;
        if !self
            .bounding_box()
            .inflated(slack)
            .intersects(&other.bounding_box().inflated(slack))
        {
            return ArrayVec::new();
        }
        match (self.is_arc(), other.is_arc()) {
            (false, false) => self.line_line_intersect(other),
            (false, true) => self.line_arc_intersect(other),
            (true, false) => other.line_arc_intersect(self),
            (true, true) => self.arc_arc_intersect(other),
        }
    }

    fn line_line_intersect(&self, other: &Self) -> ArrayVec<Point, 2> {
        let mut out = ArrayVec::new();
        let v0 = self.end.p - self.start;
        let v1 = other.end.p - other.start;
        let (len0, len1) = (v0.length(), v1.length());
        if len0 <= f64::EPSILON || len1 <= f64::EPSILON {
            return out;
        }
        let Some((t, u)) =
            line_line_intersect_2d(self.start, v0, other.start, v1, self.tol.unit_vector)
        else {
            return out;
        };
        let (tol_t, tol_u) = (self.tol.linear / len0, self.tol.linear / len1);
        if t >= -tol_t && t <= 1.0 + tol_t && u >= -tol_u && u <= 1.0 + tol_u {
            out.push(self.start + v0 * t);
        }
        out
    }

    /// `self` is the line, `arc` the arc.
    fn line_arc_intersect(&self, arc: &Self) -> ArrayVec<Point, 2> {
        let mut out = ArrayVec::new();
        let (Some(center), Some(r)) = (arc.center(), arc.radius()) else {
            return out;
        };
        let v0 = self.start - center;
        let v1 = self.end.p - self.start;
        let s = v1 * v1;
        if s <= f64::EPSILON * f64::EPSILON {
            return out;
        }
        let toler = self.tol.linear / s.sqrt();
        for root in quadratic_roots(s, 2.0 * (v0 * v1), v0 * v0 - r * r) {
            if root > -toler && root < 1.0 + toler {
                let p = self.start + v1 * root;
                if arc.on(p) {
                    out.push(p);
                }
            }
        }
        out
    }

    fn arc_arc_intersect(&self, other: &Self) -> ArrayVec<Point, 2> {
        let (Some(c0), Some(r0), Some(c1), Some(r1)) =
            (self.center(), self.radius(), other.center(), other.radius())
        else {
            return ArrayVec::new();
        };
        Circle::new(c0, r0)
            .intersect(&Circle::new(c1, r1), self.tol.linear)
            .into_iter()
            .filter(|&p| self.on(p) && other.on(p))
            .collect()
    }

    /// Reverses the direction of travel in place.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end.p);
        self.end.kind = self.end.kind.reversed();
    }

    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.reverse();
        self
    }

    /// Span displaced `distance` to the left of travel (negative is right).
    ///
    /// Arcs keep their center and change radius.
    ///
    /// # Errors
    ///
    /// Returns `OffsetError::ArcCollapsed` when an arc's new radius is not
    /// above the linear tolerance.
    pub fn offset(&self, distance: f64) -> Result<Self> {
        let mut out = *self;
        match self.end.kind {
            SpanKind::Line => {
                let shift = self.direction_at(0.0).left() * distance;
                out.start = self.start + shift;
                out.end.p = self.end.p + shift;
            }
            SpanKind::Arc { dir, center } => {
                let radius = self.start.dist(center) - dir.sign() * distance;
                if radius <= self.tol.linear {
                    return Err(OffsetError::ArcCollapsed { radius }.into());
                }
                let full = self.is_full_circle();
                out.start = center + (self.start - center).normalized() * radius;
                out.end.p = if full {
                    out.start
                } else {
                    center + (self.end.p - center).normalized() * radius
                };
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::KernelError;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

    fn quarter_ccw() -> Span {
        Span::new(
            Point::new(1.0, 0.0),
            Vertex::ccw(Point::new(0.0, 1.0), Point::ZERO),
        )
        .unwrap()
    }

    #[test]
    fn rejects_arc_end_off_radius() {
        let err = Span::new(
            Point::new(1.0, 0.0),
            Vertex::ccw(Point::new(0.0, 2.0), Point::ZERO),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            KernelError::Geometry(GeometryError::ArcRadiusMismatch { .. })
        ));
    }

    #[test]
    fn rejects_zero_radius_arc() {
        assert!(Span::new(Point::ZERO, Vertex::ccw(Point::ZERO, Point::ZERO)).is_err());
    }

    #[test]
    fn quarter_arc_measures() {
        let s = quarter_ccw();
        assert_abs_diff_eq!(s.included_angle(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(s.length(), FRAC_PI_2, epsilon = 1e-12);
        let m = s.mid_param(0.5);
        assert_abs_diff_eq!(m.x, SQRT_2 / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.y, SQRT_2 / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn clockwise_arc_has_negative_sweep() {
        let s = Span::new(
            Point::new(1.0, 0.0),
            Vertex::cw(Point::new(0.0, 1.0), Point::ZERO),
        )
        .unwrap();
        assert_abs_diff_eq!(s.included_angle(), -1.5 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(s.length(), 1.5 * PI, epsilon = 1e-12);
    }

    #[test]
    fn full_circle_span() {
        let s = Span::new(
            Point::new(2.0, 0.0),
            Vertex::ccw(Point::new(2.0, 0.0), Point::ZERO),
        )
        .unwrap();
        assert!(s.is_full_circle());
        assert_abs_diff_eq!(s.included_angle(), TAU);
        assert_abs_diff_eq!(s.area(), -4.0 * PI, epsilon = 1e-12);
        let bb = s.bounding_box();
        assert_abs_diff_eq!(bb.width(), 4.0);
        assert_abs_diff_eq!(bb.height(), 4.0);
    }

    #[test]
    fn parameter_inverts_mid_param() {
        let line = Span::line(Point::new(1.0, 1.0), Point::new(5.0, 4.0));
        let arc = quarter_ccw();
        let cw = arc.reversed();
        let long_cw = Span::new(
            Point::new(1.0, 0.0),
            Vertex::cw(Point::new(0.0, 1.0), Point::ZERO),
        )
        .unwrap();
        assert_abs_diff_eq!(long_cw.included_angle(), -1.5 * PI, epsilon = 1e-12);
        for t in [0.0, 0.25, 0.5, 0.9, 1.0] {
            assert_abs_diff_eq!(line.parameter(line.mid_param(t)), t, epsilon = 1e-9);
            assert_abs_diff_eq!(arc.parameter(arc.mid_param(t)), t, epsilon = 1e-9);
            assert_abs_diff_eq!(cw.parameter(cw.mid_param(t)), t, epsilon = 1e-9);
            assert_abs_diff_eq!(long_cw.parameter(long_cw.mid_param(t)), t, epsilon = 1e-9);
        }
    }

    #[test]
    fn full_circle_parameter_covers_the_turn() {
        let circle = Span::new(
            Point::new(2.0, 0.0),
            Vertex::ccw(Point::new(2.0, 0.0), Point::ZERO),
        )
        .unwrap();
        // The end coincides with the start, so t = 1 maps back to 0.
        for t in [0.0, 0.25, 0.5, 0.9] {
            assert_abs_diff_eq!(circle.parameter(circle.mid_param(t)), t, epsilon = 1e-9);
        }
        let cw = circle.reversed();
        assert_abs_diff_eq!(cw.included_angle(), -TAU);
        for t in [0.25, 0.5, 0.9] {
            assert_abs_diff_eq!(cw.parameter(cw.mid_param(t)), t, epsilon = 1e-9);
        }
    }

    #[test]
    fn mid_perim_walks_arc_length() {
        let arc = quarter_ccw();
        let p = arc.mid_perim(FRAC_PI_2 / 2.0);
        assert_abs_diff_eq!(p.x, SQRT_2 / 2.0, epsilon = 1e-12);
        let line = Span::line(Point::ZERO, Point::new(0.0, 10.0));
        assert_abs_diff_eq!(line.mid_perim(3.0).y, 3.0);
    }

    #[test]
    fn directions() {
        let ccw = quarter_ccw();
        let d = ccw.direction_at(0.0);
        assert_abs_diff_eq!(d.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d.y, 1.0, epsilon = 1e-12);
        let cw = ccw.reversed();
        let d = cw.direction_at(1.0);
        assert_abs_diff_eq!(d.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn nearest_point_clamps_to_endpoint() {
        let s = Span::line(Point::ZERO, Point::new(4.0, 0.0));
        assert_eq!(s.nearest_point_to_point(Point::new(2.0, 3.0)), Point::new(2.0, 0.0));
        assert_eq!(s.nearest_point_to_point(Point::new(9.0, 1.0)), Point::new(4.0, 0.0));
        assert_eq!(s.nearest_point_to_point(Point::new(-3.0, 1.0)), Point::ZERO);

        let arc = quarter_ccw();
        let p = arc.nearest_point_to_point(Point::new(2.0, 2.0));
        assert_abs_diff_eq!(p.x, SQRT_2 / 2.0, epsilon = 1e-12);
        assert_eq!(arc.nearest_point_to_point(Point::new(1.0, -3.0)), Point::new(1.0, 0.0));
    }

    #[test]
    fn on_uses_linear_tolerance() {
        let s = Span::line(Point::ZERO, Point::new(4.0, 0.0));
        assert!(s.on(Point::new(1.0, 0.005)));
        assert!(!s.on(Point::new(1.0, 0.05)));
    }

    #[test]
    fn nearest_point_to_parallel_span() {
        // Heuristic: exact here because the mid samples line up.
        let a = Span::line(Point::ZERO, Point::new(4.0, 0.0));
        let b = Span::line(Point::new(0.0, 1.0), Point::new(4.0, 1.0));
        let (p, d) = a.nearest_point_to_span(&b);
        assert_abs_diff_eq!(d, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.x, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn start_span_prefers_its_start() {
        let a = Span::line(Point::ZERO, Point::new(4.0, 0.0)).as_start_span();
        let b = Span::line(Point::new(0.0, 1.0), Point::new(4.0, 1.0));
        let (p, _) = a.nearest_point_to_span(&b);
        assert_eq!(p, Point::ZERO);
    }

    #[test]
    fn distant_spans_do_not_intersect() {
        let a = Span::line(Point::ZERO, Point::new(1.0, 1.0));
        let b = Span::line(Point::new(100.0, 0.0), Point::new(90.0, 50.0));
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn crossing_lines() {
        let a = Span::line(Point::ZERO, Point::new(2.0, 2.0));
        let b = Span::line(Point::new(0.0, 2.0), Point::new(2.0, 0.0));
        let pts = a.intersect(&b);
        assert_eq!(pts.len(), 1);
        assert_abs_diff_eq!(pts[0].x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[0].y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn lines_crossing_only_when_extended() {
        let a = Span::line(Point::ZERO, Point::new(4.0, 0.0));
        let b = Span::line(Point::new(2.0, 1.0), Point::new(2.0, 3.0));
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let a = Span::line(Point::ZERO, Point::new(4.0, 0.0));
        let b = Span::line(Point::new(1.0, 0.0), Point::new(3.0, 0.0));
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn tangent_line_touches_arc_once() {
        let arc = Span::new(
            Point::new(1.0, 0.0),
            Vertex::ccw(Point::new(-1.0, 0.0), Point::ZERO),
        )
        .unwrap();
        let line = Span::line(Point::new(-2.0, 1.0), Point::new(2.0, 1.0));
        let pts = line.intersect(&arc);
        assert_eq!(pts.len(), 1);
        assert!(pts[0].nearly_eq(Point::new(0.0, 1.0), 0.01));
        assert_eq!(arc.intersect(&line).len(), 1);
    }

    #[test]
    fn line_through_arc_keeps_only_swept_points() {
        let arc = quarter_ccw();
        let line = Span::line(Point::new(-2.0, 0.5), Point::new(2.0, 0.5));
        let pts = line.intersect(&arc);
        assert_eq!(pts.len(), 1);
        assert_abs_diff_eq!(pts[0].x, 0.75_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn arc_arc_crossing() {
        let a = Span::new(
            Point::new(5.0, 0.0),
            Vertex::ccw(Point::new(-5.0, 0.0), Point::ZERO),
        )
        .unwrap();
        let b = Span::new(
            Point::new(3.0, 0.0),
            Vertex::ccw(Point::new(13.0, 0.0), Point::new(8.0, 0.0)),
        )
        .unwrap();
        // b runs below its center, a above its own: they cannot meet.
        assert!(a.intersect(&b).is_empty());
        let upper = Span::new(
            Point::new(13.0, 0.0),
            Vertex::ccw(Point::new(3.0, 0.0), Point::new(8.0, 0.0)),
        )
        .unwrap();
        let pts = a.intersect(&upper);
        assert_eq!(pts.len(), 1);
        assert_abs_diff_eq!(pts[0].x, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pts[0].y, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn reverse_twice_is_identity() {
        let s = quarter_ccw();
        let r = s.reversed();
        assert_eq!(r.start(), Point::new(0.0, 1.0));
        assert_eq!(r.kind().center(), Some(Point::ZERO));
        assert_eq!(r.reversed(), s);
    }

    #[test]
    fn line_offset_moves_left() {
        let s = Span::line(Point::ZERO, Point::new(4.0, 0.0));
        let o = s.offset(1.5).unwrap();
        assert_eq!(o.start(), Point::new(0.0, 1.5));
        assert_eq!(o.end(), Point::new(4.0, 1.5));
    }

    #[test]
    fn arc_offset_changes_radius() {
        let s = quarter_ccw();
        let o = s.offset(-1.0).unwrap();
        assert_abs_diff_eq!(o.radius().unwrap(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(o.included_angle(), FRAC_PI_2, epsilon = 1e-12);
        let o = s.reversed().offset(0.5).unwrap();
        assert_abs_diff_eq!(o.radius().unwrap(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn arc_offset_collapse_fails() {
        let err = quarter_ccw().offset(1.0).unwrap_err();
        assert!(matches!(
            err,
            KernelError::Offset(OffsetError::ArcCollapsed { .. })
        ));
    }

    #[test]
    fn quarter_arc_box() {
        let bb = quarter_ccw().bounding_box();
        assert_abs_diff_eq!(bb.min().x, 0.0);
        assert_abs_diff_eq!(bb.max().y, 1.0);
        let semi = Span::new(
            Point::new(1.0, 0.0),
            Vertex::ccw(Point::new(-1.0, 0.0), Point::ZERO),
        )
        .unwrap();
        let bb = semi.bounding_box();
        assert_abs_diff_eq!(bb.max().y, 1.0);
        assert_abs_diff_eq!(bb.min().y, 0.0);
    }
}
