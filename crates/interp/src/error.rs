//! Error types for the aeolus-interp crate.

/// Error type for all fallible operations in the aeolus-interp crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InterpError {
    /// Returned when a spline is fitted over fewer than two knots.
    #[error("cubic spline needs at least 2 knots, got {n}")]
    TooFewKnots {
        /// Number of knots provided.
        n: usize,
    },

    /// Returned when knot positions are not strictly increasing.
    #[error("knot positions must be strictly increasing at index {index}")]
    KnotsNotIncreasing {
        /// Index of the first offending knot.
        index: usize,
    },

    /// Returned when a knot position is NaN or infinite.
    #[error("knot position at index {index} is not finite")]
    NonFiniteKnot {
        /// Index of the offending knot.
        index: usize,
    },

    /// Returned when knot and value slices differ in length.
    #[error("length mismatch: {x_len} knots but {y_len} values")]
    LengthMismatch {
        /// Length of the knot slice.
        x_len: usize,
        /// Length of the value slice.
        y_len: usize,
    },
}
