//! Error types for the aeolus-timebase crate.

use chrono::{DateTime, Utc};

/// Error type for all fallible operations in the aeolus-timebase crate.
///
/// Covers validation failures for time units, offset sequences, and
/// conversions that require an origin instant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimebaseError {
    /// Returned when absolute instants are requested from a series with no origin.
    #[error("series has no origin instant; absolute times are unavailable")]
    NoOrigin,

    /// Returned when a unit quantum is zero, negative, or out of range.
    #[error("time unit quantum must be a positive duration, got {nanos} ns")]
    InvalidQuantum {
        /// The offending quantum in nanoseconds.
        nanos: i64,
    },

    /// Returned when an offset sequence decreases.
    #[error("offsets decrease at index {index}: {value} < {previous}")]
    NonMonotonic {
        /// Index of the offending offset.
        index: usize,
        /// The offending offset value.
        value: f64,
        /// The offset immediately before it.
        previous: f64,
    },

    /// Returned when an offset is NaN or infinite.
    #[error("offset at index {index} is not finite")]
    NonFiniteOffset {
        /// Index of the offending offset.
        index: usize,
    },

    /// Returned when an operation needs at least one sample.
    #[error("time series has no samples")]
    EmptySeries,

    /// Returned when a resample factor is zero, negative, or non-finite.
    #[error("resample factor must be positive and finite, got {factor}")]
    InvalidFactor {
        /// The offending factor.
        factor: f64,
    },

    /// Returned when a slice range does not fit the series.
    #[error("slice {start}..{end} out of bounds for series of length {len}")]
    SliceOutOfBounds {
        /// Requested start index (inclusive).
        start: usize,
        /// Requested end index (exclusive).
        end: usize,
        /// Length of the series.
        len: usize,
    },

    /// Returned when a generation range ends before it starts.
    #[error("range end {end} precedes start {start}")]
    InvertedRange {
        /// Start of the requested range.
        start: DateTime<Utc>,
        /// End of the requested range.
        end: DateTime<Utc>,
    },

    /// Returned when a grid spacing is zero or negative.
    #[error("sample spacing must be a positive duration, got {nanos} ns")]
    InvalidSpacing {
        /// The offending spacing in nanoseconds.
        nanos: i64,
    },
}
