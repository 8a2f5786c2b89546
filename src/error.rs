use thiserror::Error;

/// Top-level error type for the spanline curve kernel.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Offset(#[from] OffsetError),
}

/// Errors raised while constructing vertices and spans.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("unknown span type tag {0}, expected 0, 1 or -1")]
    InvalidSpanType(i32),

    #[error("arc vertex requires a center point")]
    MissingArcCenter,

    #[error("arc end radius {end} does not match start radius {start}")]
    ArcRadiusMismatch { start: f64, end: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to curve editing.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("point ({x}, {y}) does not lie on the curve")]
    PointNotOnCurve { x: f64, y: f64 },

    #[error("curve needs at least {required} vertices, has {actual}")]
    TooFewVertices { required: usize, actual: usize },
}

/// Errors related to curve offsetting.
#[derive(Debug, Error)]
pub enum OffsetError {
    #[error("arc collapsed during offset (radius {radius})")]
    ArcCollapsed { radius: f64 },

    #[error("offset spans do not meet at junction {index}")]
    NoJunction { index: usize },

    #[error("junction {index} lies closer to the source curve than the offset distance")]
    JunctionInterferes { index: usize },

    #[error("unresolved loop starting at offset vertex {vertex}")]
    UnresolvedLoop { vertex: usize },

    #[error("offset of a closed curve is not closed")]
    NotClosed,

    #[error("offset curve orientation differs from the source curve")]
    OrientationFlipped,

    #[error("offset area {offset} is inconsistent with source area {original}")]
    AreaMismatch { original: f64, offset: f64 },

    #[error("polygon fallback produced {polygons} polygons, expected exactly one")]
    FallbackFailed { polygons: usize },
}

/// Convenience type alias for results using [`KernelError`].
pub type Result<T> = std::result::Result<T, KernelError>;
