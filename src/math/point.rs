use std::ops::{Add, BitXor, Div, Mul, Neg, Not, Sub};

use super::NORMALIZE_EPSILON;

/// A 2D point or vector.
///
/// Value type: every operator returns a new `Point`. The only in-place
/// mutators are [`Point::normalize`], [`Point::rotate`] and
/// [`Point::rotate_cs`].
///
/// Operators:
/// - `a + b`, `a - b`, `-a`, `a * s`, `a / s`: usual vector algebra
/// - `a * b`: dot product
/// - `a ^ b`: 2D cross product (`a.x * b.y - a.y * b.x`)
/// - `!a`: `a` rotated 90 degrees to the left
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin / zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the vector from `from` to `to`.
    #[must_use]
    pub fn between(from: Self, to: Self) -> Self {
        Self::new(to.x - from.x, to.y - from.y)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product. Positive when `other` is counter-clockwise from `self`.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Returns this vector rotated 90 degrees to the left.
    #[must_use]
    pub fn left(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Distance to another point.
    #[must_use]
    pub fn dist(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Makes this vector unit length and returns its length before the call.
    ///
    /// A vector shorter than `1e-15` is left as it is.
    pub fn normalize(&mut self) -> f64 {
        let len = self.length();
        if len > NORMALIZE_EPSILON {
            self.x /= len;
            self.y /= len;
        }
        len
    }

    /// Returns a unit-length copy of this vector (zero stays zero).
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Rotates about the origin by `angle` radians, counter-clockwise.
    pub fn rotate(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        self.rotate_cs(cos, sin);
    }

    /// Rotates about the origin by a precomputed cosine and sine.
    pub fn rotate_cs(&mut self, cos: f64, sin: f64) {
        let x = self.x * cos - self.y * sin;
        self.y = self.x * sin + self.y * cos;
        self.x = x;
    }

    /// Returns a copy rotated about the origin by `angle` radians.
    #[must_use]
    pub fn rotated(self, angle: f64) -> Self {
        let mut v = self;
        v.rotate(angle);
        v
    }

    /// Bitwise coordinate equality. Used for closedness checks.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn exact_eq(self, other: Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Equality within a distance tolerance.
    #[must_use]
    pub fn nearly_eq(self, other: Self, tolerance: f64) -> bool {
        self.dist(other) <= tolerance
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Point {
    type Output = f64;

    fn mul(self, rhs: Self) -> f64 {
        self.dot(rhs)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Not for Point {
    type Output = Self;

    fn not(self) -> Self {
        self.left()
    }
}

impl BitXor for Point {
    type Output = f64;

    fn bitxor(self, rhs: Self) -> f64 {
        self.cross(rhs)
    }
}

impl From<nalgebra::Point2<f64>> for Point {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for nalgebra::Point2<f64> {
    fn from(p: Point) -> Self {
        nalgebra::Point2::new(p.x, p.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Point {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for nalgebra::Vector2<f64> {
    fn from(p: Point) -> Self {
        nalgebra::Vector2::new(p.x, p.y)
    }
}
