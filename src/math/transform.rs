use nalgebra::Vector2;

use super::Point;

/// 2D homogeneous transformation matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Translation by `(dx, dy)`.
#[must_use]
pub fn translation(dx: f64, dy: f64) -> Matrix3 {
    Matrix3::new_translation(&Vector2::new(dx, dy))
}

/// Counter-clockwise rotation about the origin by `angle` radians.
#[must_use]
pub fn rotation(angle: f64) -> Matrix3 {
    Matrix3::new_rotation(angle)
}

/// Uniform scaling about the origin.
#[must_use]
pub fn scaling(factor: f64) -> Matrix3 {
    Matrix3::new_nonuniform_scaling(&Vector2::new(factor, factor))
}

/// Mirror across the Y axis (negates X).
#[must_use]
pub fn mirror_x() -> Matrix3 {
    Matrix3::new_nonuniform_scaling(&Vector2::new(-1.0, 1.0))
}

/// Returns true when `m` reverses orientation (negative linear determinant).
#[must_use]
pub fn is_mirroring(m: &Matrix3) -> bool {
    m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)] < 0.0
}

impl Point {
    /// Transforms this point in place.
    pub fn transform(&mut self, m: &Matrix3) {
        *self = self.transformed(m);
    }

    /// Returns the transformed point.
    #[must_use]
    pub fn transformed(self, m: &Matrix3) -> Self {
        m.transform_point(&self.into()).into()
    }
}
