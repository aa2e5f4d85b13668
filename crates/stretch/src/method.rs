//! Time-scale modification strategies.

use aeolus_signal::MonoSignal;

use crate::config::StretchConfig;
use crate::error::StretchError;
use crate::result::ShiftResult;
use crate::stretch::time_stretch;

/// A time-scale modification strategy.
///
/// Every implementation obeys the same contract: the output keeps the
/// input's span, has `factor` times the sample count (rounded down), and so
/// divides the mean sample interval by `factor`. What happens to the pitch
/// is up to the strategy.
pub trait TimeStretcher {
    /// Stretches `signal` to `factor` times its sample count.
    fn stretch(&self, signal: &MonoSignal, factor: f64) -> Result<MonoSignal, StretchError>;
}

/// The built-in time-scale modification strategies.
#[derive(Debug, Clone)]
pub enum StretchMethod {
    /// Plain spline resampling: duration scales and the pitch scales down
    /// with it.
    Resample,
    /// Wavelet stretch: duration scales and the pitch is preserved.
    Wavelet(StretchConfig),
}

impl TimeStretcher for StretchMethod {
    fn stretch(&self, signal: &MonoSignal, factor: f64) -> Result<MonoSignal, StretchError> {
        match self {
            StretchMethod::Resample => {
                if !factor.is_finite() || factor <= 0.0 {
                    return Err(StretchError::InvalidFactor { factor });
                }
                let mut work = signal.clone();
                work.resample_factor(factor)?;
                Ok(work)
            }
            StretchMethod::Wavelet(config) => {
                time_stretch(signal, factor, config).map(ShiftResult::into_signal)
            }
        }
    }
}
