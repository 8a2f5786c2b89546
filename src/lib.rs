pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{KernelError, Result};
pub use geometry::{ArcDir, BoundingBox, Circle, Curve, Span, SpanKind, Vertex};
pub use math::{Point, Tolerances};
pub use operations::offset::{CurveOffset, MiterPolygonOffset, PolygonOffset};
