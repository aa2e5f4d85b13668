//! Wavelet pitch shifter.

use aeolus_signal::MonoSignal;
use aeolus_wavelet::{CoefficientMatrix, Morlet, cwt, icwt, interpolate_polar, scale_ladder};
use tracing::debug;

use crate::config::ShiftConfig;
use crate::error::StretchError;
use crate::result::ShiftResult;

/// Shifts the pitch of `signal` by `config.shift()` without changing its
/// duration (or changes both together when an interpolation factor is set).
///
/// Chains: gap fill -> scale ladder -> forward transform -> polar split ->
/// optional interpolation of coefficients and time axis -> phase multiply ->
/// synthesis.
///
/// The returned [`ShiftResult`] carries the raw forward coefficients and
/// the matrix the output was synthesized from alongside the signal.
///
/// # Errors
///
/// Configuration errors surface as [`StretchError::InvalidConfig`]; ladder,
/// transform and axis failures are passed through transparently.
#[tracing::instrument(skip_all, fields(samples = signal.len(), shift = config.shift()))]
pub fn pitch_shift(signal: &MonoSignal, config: &ShiftConfig) -> Result<ShiftResult, StretchError> {
    config.validate()?;

    // The interval is a property of the time axis; the gap fill below only
    // touches sample values.
    let interval = signal.axis().mean_interval()?;

    let mut work = signal.clone();
    work.fill_nan(0.0);

    // Analysis ladder and forward transform.
    let scales = scale_ladder(
        config.max_kernel_samples(),
        work.len(),
        config.scale_spacing(),
        interval,
        &Morlet,
    )?;
    let coefficients = cwt(work.samples(), &scales, interval, &Morlet)?;

    // Polar split; interpolation stretches the coefficient history and the
    // time axis by the same factor, so they stay in lockstep.
    let mut magnitude = coefficients.magnitude();
    let mut phase = coefficients.unwrapped_phase();
    let mut axis = work.axis().clone();
    if let Some(factor) = config.interpolate() {
        let (interpolated_magnitude, interpolated_phase) =
            interpolate_polar(&magnitude, &phase, factor)?;
        magnitude = interpolated_magnitude;
        phase = interpolated_phase;
        axis.resample_evenly(factor)?;
    }

    // Phase multiply; magnitudes are untouched, so the envelope survives.
    for row in phase.iter_mut() {
        for value in row.iter_mut() {
            *value *= config.shift();
        }
    }
    let shifted = CoefficientMatrix::from_polar(&magnitude, &phase)?;

    let samples = icwt(
        &shifted,
        &scales,
        config.scale_spacing(),
        interval,
        config.formula(),
        &Morlet,
    )?;
    debug!(samples = samples.len(), "synthesized shifted signal");

    let out = MonoSignal::new(axis, samples)?;
    Ok(ShiftResult::new(out, scales, coefficients, shifted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeolus_timebase::{TimeSeries, TimeUnit};
    use aeolus_wavelet::InverseFormula;
    use std::f64::consts::PI;

    fn sine_signal(n: usize, period: f64) -> MonoSignal {
        let offsets = (0..n).map(|i| i as f64).collect();
        let axis = TimeSeries::from_offsets(offsets, TimeUnit::second()).unwrap();
        let samples = (0..n).map(|i| (2.0 * PI * i as f64 / period).sin()).collect();
        MonoSignal::new(axis, samples).unwrap()
    }

    #[test]
    fn output_shapes_without_interpolation() {
        let signal = sine_signal(256, 16.0);
        let config = ShiftConfig::new().with_shift(2.0).with_max_kernel_samples(64);
        let result = pitch_shift(&signal, &config).unwrap();

        assert_eq!(result.signal().len(), 256);
        assert_eq!(result.signal().axis(), signal.axis());
        assert_eq!(result.coefficients().n_times(), 256);
        assert_eq!(result.shifted_coefficients().n_times(), 256);
        assert_eq!(result.coefficients().n_scales(), result.scales().len());
    }

    #[test]
    fn interpolation_stretches_matrix_and_axis_in_lockstep() {
        let signal = sine_signal(200, 20.0);
        let config = ShiftConfig::new()
            .with_shift(3.0)
            .with_interpolate(3.0)
            .with_max_kernel_samples(50);
        let result = pitch_shift(&signal, &config).unwrap();

        assert_eq!(result.signal().len(), 600);
        assert_eq!(result.shifted_coefficients().n_times(), 600);
        // The raw coefficients keep the analysis width.
        assert_eq!(result.coefficients().n_times(), 200);
        // Span is preserved, so the mean interval shrinks threefold.
        let original_interval = signal.axis().mean_interval().unwrap();
        let new_interval = result.signal().axis().mean_interval().unwrap();
        assert!((new_interval - original_interval / 3.0).abs() < 1e-9);
    }

    #[test]
    fn nan_gaps_are_filled_before_analysis() {
        let mut signal = sine_signal(256, 16.0);
        let mut samples = signal.samples().to_vec();
        samples[40] = f64::NAN;
        samples[41] = f64::NAN;
        let axis = signal.axis().clone();
        signal.replace(axis, samples).unwrap();

        let config = ShiftConfig::new().with_max_kernel_samples(64);
        let result = pitch_shift(&signal, &config).unwrap();
        assert!(result.signal().samples().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn time_difference_formula_is_selectable() {
        let signal = sine_signal(256, 16.0);
        let config = ShiftConfig::new()
            .with_max_kernel_samples(64)
            .with_formula(InverseFormula::TimeDifference);
        let result = pitch_shift(&signal, &config).unwrap();
        assert_eq!(result.signal().len(), 256);
    }

    #[test]
    fn invalid_config_is_rejected_before_analysis() {
        let signal = sine_signal(64, 8.0);
        let err = pitch_shift(&signal, &ShiftConfig::new().with_shift(0.0)).unwrap_err();
        assert!(matches!(err, StretchError::InvalidConfig { .. }));
    }

    #[test]
    fn empty_signal_is_rejected() {
        let axis = TimeSeries::from_offsets(Vec::new(), TimeUnit::second()).unwrap();
        let signal = MonoSignal::new(axis, Vec::new()).unwrap();
        let err = pitch_shift(&signal, &ShiftConfig::new()).unwrap_err();
        assert!(matches!(err, StretchError::Timebase(_)));
    }
}
