use arrayvec::ArrayVec;

use crate::math::Point;

/// A full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Intersection points with another circle.
    ///
    /// Concentric circles give nothing. Tangent circles, or circles whose
    /// crossing half-chord is below `tolerance`, give a single point.
    #[must_use]
    pub fn intersect(&self, other: &Self, tolerance: f64) -> ArrayVec<Point, 2> {
        let mut out = ArrayVec::new();
        let mut v = other.center - self.center;
        let d = v.normalize();
        if d < tolerance {
            return out;
        }
        let (r0, r1) = (self.radius, other.radius);
        if d > r0 + r1 + tolerance || d < (r0 - r1).abs() - tolerance {
            return out;
        }

        // distance from self.center to the chord along v
        let mut d0 = 0.5 * (d + (r0 + r1) * (r0 - r1) / d);
        let mut h_sq = (r0 - d0) * (r0 + d0);
        if h_sq < 0.0 {
            d0 = r0.copysign(d0);
            h_sq = 0.0;
        }
        let base = self.center + v * d0;
        if h_sq < tolerance * tolerance {
            out.push(base);
        } else {
            let h = h_sq.sqrt();
            out.push(base - v.left() * h);
            out.push(base + v.left() * h);
        }
        out
    }

    /// Point on the circle nearest to `p`. A point at the center maps to the
    /// rightmost point.
    #[must_use]
    pub fn nearest_point(&self, p: Point) -> Point {
        let mut v = p - self.center;
        if v.normalize() <= f64::EPSILON {
            return self.center + Point::new(self.radius, 0.0);
        }
        self.center + v * self.radius
    }
}
