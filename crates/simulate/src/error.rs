//! Error type for waveform generation.

use thiserror::Error;

/// Errors produced while generating synthetic waveforms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulateError {
    /// A generator was given an empty time axis.
    #[error("cannot generate a waveform on an empty time axis")]
    EmptyAxis,

    /// A frequency argument was NaN or infinite.
    #[error("waveform frequency must be finite, got {frequency}")]
    NonFiniteFrequency {
        /// The offending frequency.
        frequency: f64,
    },

    /// A sweep was requested on an axis whose last offset is not positive,
    /// leaving no span over which the frequency can move.
    #[error("sweep needs a positive final time offset, got {end}")]
    InvalidSweepSpan {
        /// Last offset of the axis.
        end: f64,
    },

    /// A logarithmic sweep was given endpoint frequencies that are zero or
    /// straddle zero, where the exponential trajectory is undefined.
    #[error("logarithmic sweep endpoints must be nonzero and share a sign, got {start} and {end}")]
    LogSweepCrossesZero {
        /// Requested start frequency.
        start: f64,
        /// Requested end frequency.
        end: f64,
    },

    /// Axis manipulation failed.
    #[error(transparent)]
    Timebase(#[from] aeolus_timebase::TimebaseError),

    /// Signal construction failed.
    #[error(transparent)]
    Signal(#[from] aeolus_signal::SignalError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeolus_timebase::TimebaseError;

    #[test]
    fn messages_carry_the_offending_values() {
        assert_eq!(
            SimulateError::EmptyAxis.to_string(),
            "cannot generate a waveform on an empty time axis"
        );
        assert_eq!(
            SimulateError::NonFiniteFrequency {
                frequency: f64::NAN
            }
            .to_string(),
            "waveform frequency must be finite, got NaN"
        );
        assert_eq!(
            SimulateError::InvalidSweepSpan { end: -1.5 }.to_string(),
            "sweep needs a positive final time offset, got -1.5"
        );
        assert_eq!(
            SimulateError::LogSweepCrossesZero {
                start: -1.0,
                end: 2.0
            }
            .to_string(),
            "logarithmic sweep endpoints must be nonzero and share a sign, got -1 and 2"
        );
    }

    #[test]
    fn wrapped_errors_render_transparently() {
        let err = SimulateError::from(TimebaseError::EmptySeries);
        assert_eq!(err.to_string(), TimebaseError::EmptySeries.to_string());
        assert!(matches!(err, SimulateError::Timebase(_)));
    }

    #[test]
    fn signal_errors_convert() {
        let err = SimulateError::from(aeolus_signal::SignalError::SampleLengthMismatch {
            samples: 3,
            axis_len: 4,
        });
        assert!(matches!(err, SimulateError::Signal(_)));
    }

    #[test]
    fn implements_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SimulateError>();
    }

    #[test]
    fn error_is_send_sync_clone() {
        fn assert_impl<T: Send + Sync + Clone>() {}
        assert_impl::<SimulateError>();
    }
}
