//! Error type for the audio writeout boundary.

use thiserror::Error;

/// Errors produced while mixing or writing audio.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AudioError {
    /// Stereo channels must carry one sample per frame on both sides.
    #[error("stereo channels differ in length: left {left}, right {right}")]
    ChannelLengthMismatch {
        /// Left channel length.
        left: usize,
        /// Right channel length.
        right: usize,
    },

    /// A component handed to the stereo mix has the wrong length.
    #[error("component {component} has {len} samples, expected {expected}")]
    ComponentLengthMismatch {
        /// Zero-based index of the offending component.
        component: usize,
        /// Its length.
        len: usize,
        /// Length of the first component.
        expected: usize,
    },

    /// Wraps an error originating from the WAV encoder.
    #[error("wav error: {reason}")]
    Wav {
        /// Description of the underlying encoder or I/O failure.
        reason: String,
    },
}

impl From<hound::Error> for AudioError {
    fn from(e: hound::Error) -> Self {
        AudioError::Wav {
            reason: e.to_string(),
        }
    }
}
