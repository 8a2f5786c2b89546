pub mod arc_2d;
pub mod distance_2d;
pub mod intersect_2d;
pub mod point;
pub mod polygon_2d;
pub mod tolerance;
pub mod transform;

pub use point::Point;
pub use tolerance::Tolerances;
pub use transform::Matrix3;

/// Default linear tolerance for point coincidence and on-span tests.
pub const TOLERANCE: f64 = 0.01;

/// Default bias used to favour curve-start and midpoint candidates in
/// nearest-span searches.
pub const AREA_ACCURACY: f64 = 0.01;

/// Default epsilon for parallelism and unit-vector comparisons.
pub const UNIT_VECTOR_TOLERANCE: f64 = 1.0e-10;

/// Default forward lookahead (in spans) for offset loop elimination.
pub const MAX_LOOKAHEAD: usize = 25;

/// Vectors shorter than this are left untouched by [`Point::normalize`].
pub const NORMALIZE_EPSILON: f64 = 1.0e-15;
