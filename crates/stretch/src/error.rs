//! Error types for the aeolus-stretch crate.

/// Error type for all fallible operations in the aeolus-stretch crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StretchError {
    /// Returned when a configuration value is out of range.
    #[error("invalid stretch configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration was rejected.
        reason: String,
    },

    /// Returned when a stretch factor is zero, negative, or not finite.
    #[error("stretch factor must be finite and positive, got {factor}")]
    InvalidFactor {
        /// The rejected factor.
        factor: f64,
    },

    /// Wavelet analysis or synthesis error.
    #[error(transparent)]
    Wavelet(#[from] aeolus_wavelet::WaveletError),

    /// Signal container error.
    #[error(transparent)]
    Signal(#[from] aeolus_signal::SignalError),

    /// Time axis error.
    #[error(transparent)]
    Timebase(#[from] aeolus_timebase::TimebaseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_config() {
        let e = StretchError::InvalidConfig {
            reason: "shift must be finite and positive, got 0".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid stretch configuration: shift must be finite and positive, got 0"
        );
    }

    #[test]
    fn display_invalid_factor() {
        let e = StretchError::InvalidFactor { factor: -2.0 };
        assert_eq!(
            e.to_string(),
            "stretch factor must be finite and positive, got -2"
        );
    }

    #[test]
    fn from_wavelet_error() {
        let we = aeolus_wavelet::WaveletError::EmptyMatrix;
        let se: StretchError = we.into();
        assert!(matches!(se, StretchError::Wavelet(_)));
        assert_eq!(se.to_string(), "coefficient matrix is empty");
    }

    #[test]
    fn from_signal_error() {
        let se: StretchError = aeolus_signal::SignalError::TimeAxisMismatch.into();
        assert!(matches!(se, StretchError::Signal(_)));
    }

    #[test]
    fn from_timebase_error() {
        let te = aeolus_timebase::TimebaseError::EmptySeries;
        let se: StretchError = te.into();
        assert!(matches!(se, StretchError::Timebase(_)));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<StretchError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<StretchError>();
    }
}
