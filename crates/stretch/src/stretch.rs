//! Pitch-preserving time stretch, composed from the pitch shifter.

use aeolus_signal::MonoSignal;

use crate::config::{ShiftConfig, StretchConfig};
use crate::error::StretchError;
use crate::result::ShiftResult;
use crate::shift::pitch_shift;

/// Stretches `signal` to `factor` times its sample count without changing
/// its pitch.
///
/// The coefficient history is interpolated by `factor` (slowing everything
/// down and lowering the pitch by `factor`), then the phase multiply raises
/// the pitch back by the same amount. Explicit `interpolate_before` /
/// `interpolate_after` knobs replace that default split: the signal is
/// resampled by the former ahead of the analysis and the coefficients are
/// interpolated by the latter.
///
/// # Errors
///
/// Returns [`StretchError::InvalidFactor`] for a non-positive or non-finite
/// factor; configuration and pipeline errors are passed through.
#[tracing::instrument(skip_all, fields(samples = signal.len(), factor))]
pub fn time_stretch(
    signal: &MonoSignal,
    factor: f64,
    config: &StretchConfig,
) -> Result<ShiftResult, StretchError> {
    config.validate()?;
    if !factor.is_finite() || factor <= 0.0 {
        return Err(StretchError::InvalidFactor { factor });
    }

    // With both knobs unset, the whole stretch is carried by coefficient
    // interpolation.
    let (before, after) = match (config.interpolate_before(), config.interpolate_after()) {
        (None, None) => (None, Some(factor)),
        knobs => knobs,
    };

    let mut work = signal.clone();
    if let Some(pre) = before {
        work.resample_factor(pre)?;
    }

    let mut shift_config = ShiftConfig::new()
        .with_shift(factor)
        .with_scale_spacing(config.scale_spacing())
        .with_max_kernel_samples(config.max_kernel_samples())
        .with_formula(config.formula());
    if let Some(post) = after {
        shift_config = shift_config.with_interpolate(post);
    }
    pitch_shift(&work, &shift_config)
}
