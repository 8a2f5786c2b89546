use crate::math::Point;

/// Axis-aligned 2D bounding box.
///
/// An empty box (`valid == false`) grows to fit the first point inserted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min: Point,
    max: Point,
    valid: bool,
}

impl BoundingBox {
    /// An empty box.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min: Point::ZERO,
            max: Point::ZERO,
            valid: false,
        }
    }

    /// The smallest box containing both corners.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let mut bb = Self::new();
        bb.insert_point(a);
        bb.insert_point(b);
        bb
    }

    pub fn insert_point(&mut self, p: Point) {
        if self.valid {
            self.min.x = self.min.x.min(p.x);
            self.min.y = self.min.y.min(p.y);
            self.max.x = self.max.x.max(p.x);
            self.max.y = self.max.y.max(p.y);
        } else {
            self.min = p;
            self.max = p;
            self.valid = true;
        }
    }

    pub fn insert_box(&mut self, other: &Self) {
        if other.valid {
            self.insert_point(other.min);
            self.insert_point(other.max);
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn min(&self) -> Point {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Point {
        self.max
    }

    #[must_use]
    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        if self.valid {
            self.max.x - self.min.x
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        if self.valid {
            self.max.y - self.min.y
        } else {
            0.0
        }
    }

    /// Half the diagonal.
    #[must_use]
    pub fn radius(&self) -> f64 {
        0.5 * self.width().hypot(self.height())
    }

    #[must_use]
    pub fn contains_point(&self, p: Point) -> bool {
        self.valid
            && p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
    }

    /// True when `other` lies entirely inside this box.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other.valid && self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// True when the closed boxes share at least one point.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.valid
            && other.valid
            && self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Copy grown by `margin` on every side.
    #[must_use]
    pub fn inflated(&self, margin: f64) -> Self {
        if !self.valid {
            return *self;
        }
        Self {
            min: self.min - Point::new(margin, margin),
            max: self.max + Point::new(margin, margin),
            valid: true,
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_box_has_no_extent() {
        let bb = BoundingBox::default();
        assert!(!bb.is_valid());
        assert_abs_diff_eq!(bb.width(), 0.0);
        assert!(!bb.contains_point(Point::ZERO));
    }

    #[test]
    fn first_point_initializes() {
        let mut bb = BoundingBox::new();
        bb.insert_point(Point::new(-3.0, 5.0));
        assert_eq!(bb.min(), Point::new(-3.0, 5.0));
        assert_eq!(bb.max(), Point::new(-3.0, 5.0));
    }

    #[test]
    fn extent_and_center() {
        let bb = BoundingBox::from_corners(Point::new(4.0, 0.0), Point::new(0.0, 3.0));
        assert_abs_diff_eq!(bb.width(), 4.0);
        assert_abs_diff_eq!(bb.height(), 3.0);
        assert_abs_diff_eq!(bb.radius(), 2.5);
        assert_eq!(bb.center(), Point::new(2.0, 1.5));
    }

    #[test]
    fn touching_boxes_intersect() {
        let a = BoundingBox::from_corners(Point::ZERO, Point::new(1.0, 1.0));
        let b = BoundingBox::from_corners(Point::new(1.0, 0.5), Point::new(2.0, 2.0));
        let c = BoundingBox::from_corners(Point::new(1.5, 0.0), Point::new(2.0, 1.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn containment() {
        let mut outer = BoundingBox::from_corners(Point::ZERO, Point::new(10.0, 10.0));
        let inner = BoundingBox::from_corners(Point::new(2.0, 2.0), Point::new(3.0, 3.0));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        outer.insert_box(&BoundingBox::new());
        assert_eq!(outer.max(), Point::new(10.0, 10.0));
    }
}
