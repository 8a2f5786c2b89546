use super::{AREA_ACCURACY, MAX_LOOKAHEAD, TOLERANCE, UNIT_VECTOR_TOLERANCE};

/// Precision settings threaded through every kernel query.
///
/// A [`Curve`](crate::geometry::Curve) owns one of these and hands it to the
/// spans it creates, so curves from documents with different units can use
/// different regimes side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Linear epsilon for coincidence and on-span tests.
    pub linear: f64,
    /// Distance bias favouring curve-start and midpoint candidates.
    pub area_accuracy: f64,
    /// Parallelism epsilon for unit vectors and cross products.
    pub unit_vector: f64,
    /// Forward lookahead cap (in spans) for offset loop elimination.
    pub max_lookahead: usize,
}

impl Tolerances {
    /// The default regime.
    pub const DEFAULT: Self = Self {
        linear: TOLERANCE,
        area_accuracy: AREA_ACCURACY,
        unit_vector: UNIT_VECTOR_TOLERANCE,
        max_lookahead: MAX_LOOKAHEAD,
    };

    #[must_use]
    pub fn with_linear(mut self, linear: f64) -> Self {
        self.linear = linear;
        self
    }

    #[must_use]
    pub fn with_area_accuracy(mut self, area_accuracy: f64) -> Self {
        self.area_accuracy = area_accuracy;
        self
    }

    #[must_use]
    pub fn with_unit_vector(mut self, unit_vector: f64) -> Self {
        self.unit_vector = unit_vector;
        self
    }

    #[must_use]
    pub fn with_max_lookahead(mut self, max_lookahead: usize) -> Self {
        self.max_lookahead = max_lookahead;
        self
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::DEFAULT
    }
}
