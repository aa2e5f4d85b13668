//! Error types for the aeolus-wavelet crate.

use aeolus_interp::InterpError;

/// Error type for all fallible operations in the aeolus-wavelet crate.
///
/// Covers parameter validation, scale-ladder generation failures, and shape
/// mismatches between the matrices flowing through the transform.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WaveletError {
    /// Returned when a transform parameter fails validation.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Returned when the input signal is shorter than the minimum required length.
    #[error("signal too short: got {len} samples, need at least {min}")]
    SignalTooShort {
        /// Number of samples provided.
        len: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// Returned when the input signal contains non-finite values (NaN or infinity).
    #[error("signal contains non-finite samples")]
    NonFiniteSamples,

    /// Returned when the smallest-scale root search fails to converge.
    #[error(
        "scale root search did not converge after {iterations} iterations (residual {residual})"
    )]
    ScaleRootDiverged {
        /// Number of secant iterations performed.
        iterations: usize,
        /// Last value of the period gap being driven to zero.
        residual: f64,
    },

    /// Returned when the root search converges to a scale that cannot seed a ladder.
    #[error("smallest scale {value} from the root search is not usable")]
    UnusableScale {
        /// The converged root.
        value: f64,
    },

    /// Returned when no scale fits between the smallest scale and the sample cutoff.
    #[error(
        "no usable scales: smallest scale {smallest} does not fit under a cutoff of {max_samples} samples"
    )]
    EmptyLadder {
        /// Smallest usable scale from the root search.
        smallest: f64,
        /// Sample cutoff after clamping to the signal length.
        max_samples: usize,
    },

    /// Returned when a coefficient matrix has no rows or no columns.
    #[error("coefficient matrix is empty")]
    EmptyMatrix,

    /// Returned when the rows of a coefficient matrix differ in length.
    #[error("matrix row {row} has {len} samples, expected {expected}")]
    RaggedMatrix {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },

    /// Returned when magnitude and phase matrices disagree in shape.
    #[error(
        "magnitude matrix is {magnitude_rows}x{magnitude_cols} but phase matrix is {phase_rows}x{phase_cols}"
    )]
    PolarShapeMismatch {
        /// Rows of the magnitude matrix.
        magnitude_rows: usize,
        /// Columns of the magnitude matrix.
        magnitude_cols: usize,
        /// Rows of the phase matrix.
        phase_rows: usize,
        /// Columns of the phase matrix.
        phase_cols: usize,
    },

    /// Returned when the scale ladder does not match the coefficient matrix.
    #[error("ladder has {scales} scales but the coefficient matrix has {rows} rows")]
    ScaleCountMismatch {
        /// Number of scales supplied.
        scales: usize,
        /// Number of matrix rows.
        rows: usize,
    },

    /// Returned when spline interpolation inside the transform fails.
    #[error(transparent)]
    Interp(#[from] InterpError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_parameter() {
        let err = WaveletError::InvalidParameter("scale spacing -1 is not positive".into());
        assert_eq!(
            err.to_string(),
            "invalid parameter: scale spacing -1 is not positive"
        );
    }

    #[test]
    fn error_signal_too_short() {
        let err = WaveletError::SignalTooShort { len: 1, min: 2 };
        assert_eq!(
            err.to_string(),
            "signal too short: got 1 samples, need at least 2"
        );
    }

    #[test]
    fn error_non_finite_samples() {
        let err = WaveletError::NonFiniteSamples;
        assert_eq!(err.to_string(), "signal contains non-finite samples");
    }

    #[test]
    fn error_scale_root_diverged() {
        let err = WaveletError::ScaleRootDiverged {
            iterations: 100,
            residual: 0.5,
        };
        assert_eq!(
            err.to_string(),
            "scale root search did not converge after 100 iterations (residual 0.5)"
        );
    }

    #[test]
    fn error_unusable_scale() {
        let err = WaveletError::UnusableScale { value: -8.0 };
        assert_eq!(
            err.to_string(),
            "smallest scale -8 from the root search is not usable"
        );
    }

    #[test]
    fn error_empty_ladder() {
        let err = WaveletError::EmptyLadder {
            smallest: 2.0,
            max_samples: 1,
        };
        assert_eq!(
            err.to_string(),
            "no usable scales: smallest scale 2 does not fit under a cutoff of 1 samples"
        );
    }

    #[test]
    fn error_empty_matrix() {
        let err = WaveletError::EmptyMatrix;
        assert_eq!(err.to_string(), "coefficient matrix is empty");
    }

    #[test]
    fn error_ragged_matrix() {
        let err = WaveletError::RaggedMatrix {
            row: 3,
            len: 7,
            expected: 8,
        };
        assert_eq!(err.to_string(), "matrix row 3 has 7 samples, expected 8");
    }

    #[test]
    fn error_polar_shape_mismatch() {
        let err = WaveletError::PolarShapeMismatch {
            magnitude_rows: 4,
            magnitude_cols: 16,
            phase_rows: 4,
            phase_cols: 12,
        };
        assert_eq!(
            err.to_string(),
            "magnitude matrix is 4x16 but phase matrix is 4x12"
        );
    }

    #[test]
    fn error_scale_count_mismatch() {
        let err = WaveletError::ScaleCountMismatch { scales: 5, rows: 6 };
        assert_eq!(
            err.to_string(),
            "ladder has 5 scales but the coefficient matrix has 6 rows"
        );
    }

    #[test]
    fn error_wraps_interp() {
        let inner = InterpError::TooFewKnots { n: 1 };
        let err: WaveletError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<WaveletError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<WaveletError>();
    }
}
