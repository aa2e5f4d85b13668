//! Closed-form waveform generators sampled on a caller-supplied time axis.

use std::f64::consts::TAU;

use aeolus_signal::MonoSignal;
use aeolus_timebase::TimeSeries;

use crate::error::SimulateError;

/// Frequency trajectory of a [`sweep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepMode {
    /// Instantaneous frequency moves linearly from start to end.
    Linear,
    /// Instantaneous frequency moves exponentially from start to end.
    Logarithmic,
}

/// Samples `amplitude * sin(2π * frequency * t + phase)` on `axis`.
///
/// `frequency` is in cycles per unit of the axis; an axis in seconds
/// makes it plain hertz. The axis is deep-copied into the result.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SimulateError::EmptyAxis`] | `axis` has no samples |
/// | [`SimulateError::NonFiniteFrequency`] | `frequency` is NaN or infinite |
pub fn sine(
    axis: &TimeSeries,
    frequency: f64,
    amplitude: f64,
    phase: f64,
) -> Result<MonoSignal, SimulateError> {
    if axis.is_empty() {
        return Err(SimulateError::EmptyAxis);
    }
    check_frequency(frequency)?;
    let samples = axis
        .offsets()
        .iter()
        .map(|&t| amplitude * (TAU * frequency * t + phase).sin())
        .collect();
    Ok(MonoSignal::new(axis.clone(), samples)?)
}

/// Sums integer-multiple sines of `fundamental`, one per amplitude.
///
/// Component `k` (zero-based) contributes
/// `amplitudes[k] * sin(2π * (k + 1) * fundamental * t)`. An empty
/// amplitude slice yields the zero signal.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SimulateError::EmptyAxis`] | `axis` has no samples |
/// | [`SimulateError::NonFiniteFrequency`] | `fundamental` is NaN or infinite |
pub fn harmonic(
    axis: &TimeSeries,
    fundamental: f64,
    amplitudes: &[f64],
) -> Result<MonoSignal, SimulateError> {
    if axis.is_empty() {
        return Err(SimulateError::EmptyAxis);
    }
    check_frequency(fundamental)?;
    let samples = axis
        .offsets()
        .iter()
        .map(|&t| {
            amplitudes
                .iter()
                .enumerate()
                .map(|(k, &a)| a * (TAU * (k + 1) as f64 * fundamental * t).sin())
                .sum()
        })
        .collect();
    Ok(MonoSignal::new(axis.clone(), samples)?)
}

/// Samples a unit-amplitude chirp whose instantaneous frequency moves
/// from `start_frequency` at time zero to `end_frequency` at the last
/// axis offset, following `mode`.
///
/// The waveform is the cosine of the exact phase integral, so the
/// instantaneous frequency (the phase derivative over 2π) follows the
/// requested trajectory at every sample.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SimulateError::EmptyAxis`] | `axis` has no samples |
/// | [`SimulateError::NonFiniteFrequency`] | either endpoint is NaN or infinite |
/// | [`SimulateError::InvalidSweepSpan`] | the last axis offset is not positive |
/// | [`SimulateError::LogSweepCrossesZero`] | logarithmic endpoints are zero or straddle zero |
pub fn sweep(
    axis: &TimeSeries,
    start_frequency: f64,
    end_frequency: f64,
    mode: SweepMode,
) -> Result<MonoSignal, SimulateError> {
    check_frequency(start_frequency)?;
    check_frequency(end_frequency)?;
    let end_time = match axis.offsets().last() {
        Some(&t) => t,
        None => return Err(SimulateError::EmptyAxis),
    };
    if end_time <= 0.0 {
        return Err(SimulateError::InvalidSweepSpan { end: end_time });
    }
    if mode == SweepMode::Logarithmic && start_frequency * end_frequency <= 0.0 {
        return Err(SimulateError::LogSweepCrossesZero {
            start: start_frequency,
            end: end_frequency,
        });
    }
    let samples = axis
        .offsets()
        .iter()
        .map(|&t| sweep_phase(t, start_frequency, end_frequency, end_time, mode).cos())
        .collect();
    Ok(MonoSignal::new(axis.clone(), samples)?)
}

/// The waveform an ideal time-stretch of a unit sine would produce: the
/// same span re-sampled `stretch` times as densely, carrying a sine at
/// `stretch * frequency`.
///
/// Cycles per sample match the unstretched sine, which makes this the
/// spectral reference when testing that a stretch preserved pitch.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SimulateError::EmptyAxis`] | `axis` has no samples, or `stretch` shrinks it to none |
/// | [`SimulateError::NonFiniteFrequency`] | `frequency` is NaN or infinite |
/// | [`SimulateError::Timebase`] | `stretch` is not positive and finite |
pub fn sine_expectation(
    axis: &TimeSeries,
    frequency: f64,
    stretch: f64,
) -> Result<MonoSignal, SimulateError> {
    if axis.is_empty() {
        return Err(SimulateError::EmptyAxis);
    }
    check_frequency(frequency)?;
    let mut stretched = axis.clone();
    stretched.resample_evenly(stretch)?;
    sine(&stretched, stretch * frequency, 1.0, 0.0)
}

/// Exact phase integral of the chirp at time `t`, with `f1` reached at
/// `end_time`.
fn sweep_phase(t: f64, f0: f64, f1: f64, end_time: f64, mode: SweepMode) -> f64 {
    match mode {
        SweepMode::Linear => TAU * (f0 * t + (f1 - f0) * t * t / (2.0 * end_time)),
        SweepMode::Logarithmic => {
            if f0 == f1 {
                TAU * f0 * t
            } else {
                let beta = end_time / (f1 / f0).ln();
                TAU * beta * f0 * ((f1 / f0).powf(t / end_time) - 1.0)
            }
        }
    }
}

fn check_frequency(frequency: f64) -> Result<(), SimulateError> {
    if frequency.is_finite() {
        Ok(())
    } else {
        Err(SimulateError::NonFiniteFrequency { frequency })
    }
}
