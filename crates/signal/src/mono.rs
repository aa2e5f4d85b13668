//! Single-channel signal, the shape consumed by the stretch and audio
//! stages.

use std::ops::Range;

use aeolus_timebase::TimeSeries;
use chrono::Duration;
use tracing::debug;

use crate::error::SignalError;
use crate::resample::{
    align_axis_to_reference, keep_first_mask, rebuild_axis, spline_onto, warn_on_extrapolation,
};
use crate::smooth::{running_average, window_samples};

/// One numeric channel bound to a [`TimeSeries`].
///
/// The single-channel specialization of [`Signal`](crate::Signal):
/// time-scale modification and audio writing both operate on this shape.
/// The invariant `samples.len() == axis.len()` is checked on construction
/// and on every replacement.
#[derive(Debug, Clone)]
pub struct MonoSignal {
    axis: TimeSeries,
    samples: Vec<f64>,
}

impl MonoSignal {
    /// Creates a single-channel signal.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::SampleLengthMismatch`] if the vector does
    /// not have one sample per axis time.
    pub fn new(axis: TimeSeries, samples: Vec<f64>) -> Result<Self, SignalError> {
        if samples.len() != axis.len() {
            return Err(SignalError::SampleLengthMismatch {
                samples: samples.len(),
                axis_len: axis.len(),
            });
        }
        Ok(Self { axis, samples })
    }

    /// Returns the time axis.
    pub fn axis(&self) -> &TimeSeries {
        &self.axis
    }

    /// Returns the samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the signal has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consumes the signal, returning the axis and samples.
    pub fn into_parts(self) -> (TimeSeries, Vec<f64>) {
        (self.axis, self.samples)
    }

    /// Replaces both the axis and the samples, keeping the length
    /// invariant.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::SampleLengthMismatch`] if the lengths
    /// disagree; the signal is unchanged in that case.
    pub fn replace(&mut self, axis: TimeSeries, samples: Vec<f64>) -> Result<(), SignalError> {
        if samples.len() != axis.len() {
            return Err(SignalError::SampleLengthMismatch {
                samples: samples.len(),
                axis_len: axis.len(),
            });
        }
        self.axis = axis;
        self.samples = samples;
        Ok(())
    }

    /// Adds two signals elementwise.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::TimeAxisMismatch`] if the axes differ.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &MonoSignal) -> Result<MonoSignal, SignalError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtracts `other` from `self` elementwise.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::TimeAxisMismatch`] if the axes differ.
    pub fn subtract(&self, other: &MonoSignal) -> Result<MonoSignal, SignalError> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Returns the elementwise negation.
    pub fn negate(&self) -> MonoSignal {
        MonoSignal {
            axis: self.axis.clone(),
            samples: self.samples.iter().map(|&v| -v).collect(),
        }
    }

    /// Replaces every NaN sample with `value`.
    pub fn fill_nan(&mut self, value: f64) {
        for v in self.samples.iter_mut() {
            if v.is_nan() {
                *v = value;
            }
        }
    }

    /// Clamps every sample into `[-bound, bound]`. NaN samples are left
    /// alone.
    pub fn clamp_abs(&mut self, bound: f64) {
        for v in self.samples.iter_mut() {
            if *v > bound {
                *v = bound;
            } else if *v < -bound {
                *v = -bound;
            }
        }
    }

    /// Rescales the samples so the largest magnitude equals `peak`.
    ///
    /// NaN samples are ignored when finding the current peak. A silent or
    /// empty signal is left unchanged, there being nothing to scale.
    pub fn normalize(&mut self, peak: f64) {
        let current = self
            .samples
            .iter()
            .fold(0.0_f64, |acc, &v| acc.max(v.abs()));
        if current == 0.0 || !current.is_finite() {
            debug!(peak = current, "skipping normalization of degenerate signal");
            return;
        }
        let scale = peak / current;
        for v in self.samples.iter_mut() {
            *v *= scale;
        }
    }

    /// Drops all but the first sample of each run of equal time offsets.
    ///
    /// # Errors
    ///
    /// Propagates axis reconstruction failures, which cannot occur for
    /// offsets that were already valid.
    pub fn remove_duplicate_offsets(&mut self) -> Result<(), SignalError> {
        let mask = keep_first_mask(self.axis.offsets());
        let removed = mask.iter().filter(|&&keep| !keep).count();
        if removed == 0 {
            return Ok(());
        }
        let offsets: Vec<f64> = self
            .axis
            .offsets()
            .iter()
            .zip(&mask)
            .filter_map(|(&off, &keep)| keep.then_some(off))
            .collect();
        self.axis = rebuild_axis(&self.axis, offsets)?;
        self.samples = self
            .samples
            .iter()
            .zip(&mask)
            .filter_map(|(&v, &keep)| keep.then_some(v))
            .collect();
        debug!(removed, "dropped duplicate sample times");
        Ok(())
    }

    /// Deep-copies the samples in `range` into a new signal.
    ///
    /// # Errors
    ///
    /// Returns an error if the range does not fit the axis.
    pub fn slice(&self, range: Range<usize>) -> Result<MonoSignal, SignalError> {
        let axis = self.axis.slice(range.clone())?;
        Ok(MonoSignal {
            axis,
            samples: self.samples[range].to_vec(),
        })
    }

    /// Returns a copy smoothed by a centered box filter of `window`
    /// samples, with the edge-distorted samples set to NaN.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidAverageWindow`] if `window` is zero.
    pub fn running_average(&self, window: usize) -> Result<MonoSignal, SignalError> {
        Ok(MonoSignal {
            axis: self.axis.clone(),
            samples: running_average(&self.samples, window)?,
        })
    }

    /// Returns a copy smoothed over a time window, converted to a sample
    /// count via the mean sampling interval.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidAverageWindow`] if the window rounds
    /// down to zero samples.
    pub fn running_average_over(&self, window: Duration) -> Result<MonoSignal, SignalError> {
        self.running_average(window_samples(&self.axis, window)?)
    }

    /// Re-spaces the signal evenly across its span with `factor` times
    /// the sample density, cubic-splining the samples onto the new grid.
    ///
    /// # Errors
    ///
    /// Fails if the factor is not positive and finite, the signal is
    /// empty, or the axis still contains duplicate offsets.
    pub fn resample_factor(&mut self, factor: f64) -> Result<(), SignalError> {
        let mut new_axis = self.axis.clone();
        new_axis.resample_evenly(factor)?;
        let samples = spline_onto(self.axis.offsets(), &self.samples, new_axis.offsets())?;
        self.samples = samples;
        self.axis = new_axis;
        Ok(())
    }

    /// Resamples onto the sample times of `reference`, adopting a copy of
    /// the reference as the new axis. See
    /// [`Signal::resample_to`](crate::Signal::resample_to) for the frame
    /// alignment rules.
    ///
    /// # Errors
    ///
    /// Fails if origin alignment is impossible or the axis contains
    /// duplicate offsets.
    pub fn resample_to(&mut self, reference: &TimeSeries) -> Result<(), SignalError> {
        let mut aligned = self.axis.clone();
        align_axis_to_reference(&mut aligned, reference)?;
        warn_on_extrapolation(&aligned, reference);
        let samples = spline_onto(aligned.offsets(), &self.samples, reference.offsets())?;
        self.samples = samples;
        self.axis = reference.clone();
        Ok(())
    }

    fn zip_with(
        &self,
        other: &MonoSignal,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<MonoSignal, SignalError> {
        if self.axis != other.axis {
            return Err(SignalError::TimeAxisMismatch);
        }
        Ok(MonoSignal {
            axis: self.axis.clone(),
            samples: self
                .samples
                .iter()
                .zip(&other.samples)
                .map(|(&a, &b)| op(a, b))
                .collect(),
        })
    }
}
