pub mod bbox;
pub mod circle;
pub mod curve;
pub mod span;
pub mod vertex;

pub use bbox::BoundingBox;
pub use circle::Circle;
pub use curve::Curve;
pub use span::Span;
pub use vertex::{ArcDir, SpanKind, Vertex};
