//! Error types for the aeolus-signal crate.

use crate::channel::ChannelKey;

/// Error type for all fallible operations in the aeolus-signal crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SignalError {
    /// Returned when a binary operation receives operands whose time axes
    /// differ.
    #[error("signals do not share the same time axis")]
    TimeAxisMismatch,

    /// Returned when a requested channel does not exist.
    #[error("channel {key} is not present in the signal")]
    MissingChannel {
        /// The requested channel key.
        key: ChannelKey,
    },

    /// Returned when a channel's length differs from the time axis length.
    #[error("channel {key} has {channel_len} samples but the time axis has {axis_len}")]
    ChannelLengthMismatch {
        /// The offending channel key.
        key: ChannelKey,
        /// Length of the channel vector.
        channel_len: usize,
        /// Length of the time axis.
        axis_len: usize,
    },

    /// Returned when a sample vector's length differs from the time axis
    /// length in a single-channel signal.
    #[error("sample vector has {samples} samples but the time axis has {axis_len}")]
    SampleLengthMismatch {
        /// Length of the sample vector.
        samples: usize,
        /// Length of the time axis.
        axis_len: usize,
    },

    /// Returned when a running average window spans no samples.
    #[error("running average window spans {samples} samples (must be at least 1)")]
    InvalidAverageWindow {
        /// The computed window size.
        samples: usize,
    },

    /// Time axis error.
    #[error(transparent)]
    Timebase(#[from] aeolus_timebase::TimebaseError),

    /// Interpolation error.
    #[error(transparent)]
    Interp(#[from] aeolus_interp::InterpError),
}
