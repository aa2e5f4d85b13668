//! Multi-channel signal container bound to one time axis.

use std::collections::BTreeMap;
use std::ops::Range;

use aeolus_timebase::TimeSeries;
use chrono::Duration;
use tracing::debug;

use crate::channel::ChannelKey;
use crate::error::SignalError;
use crate::mono::MonoSignal;
use crate::resample::{
    align_axis_to_reference, keep_first_mask, rebuild_axis, spline_onto, warn_on_extrapolation,
};
use crate::smooth::{running_average, window_samples};

/// One or more numeric channels sampled at the times of a shared
/// [`TimeSeries`].
///
/// Every channel holds exactly one value per sample time. The axis is
/// owned by the signal, and channel vectors never alias between signals:
/// construction, [`Signal::extract`] and [`Clone`] all deep-copy.
///
/// Binary operations require both operands to carry equal time axes
/// (compared as absolute or relative point sets, see the [`TimeSeries`]
/// equality rules).
#[derive(Debug, Clone)]
pub struct Signal {
    axis: TimeSeries,
    channels: BTreeMap<ChannelKey, Vec<f64>>,
}

impl Signal {
    /// Creates a signal with no channels over the given time axis.
    pub fn new(axis: TimeSeries) -> Self {
        Self {
            axis,
            channels: BTreeMap::new(),
        }
    }

    /// Creates a signal whose vector components are the given vectors in
    /// order, keyed `Component(0)`, `Component(1)`, ...
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::ChannelLengthMismatch`] if any component's
    /// length differs from the axis length.
    pub fn from_components(
        axis: TimeSeries,
        components: Vec<Vec<f64>>,
    ) -> Result<Self, SignalError> {
        let mut signal = Self::new(axis);
        for (index, values) in components.into_iter().enumerate() {
            signal.insert_channel(index, values)?;
        }
        Ok(signal)
    }

    /// Inserts or replaces a channel.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::ChannelLengthMismatch`] if `values` does not
    /// have one sample per axis time.
    pub fn insert_channel<K: Into<ChannelKey>>(
        &mut self,
        key: K,
        values: Vec<f64>,
    ) -> Result<(), SignalError> {
        let key = key.into();
        if values.len() != self.axis.len() {
            return Err(SignalError::ChannelLengthMismatch {
                key,
                channel_len: values.len(),
                axis_len: self.axis.len(),
            });
        }
        self.channels.insert(key, values);
        Ok(())
    }

    /// Returns the shared time axis.
    pub fn axis(&self) -> &TimeSeries {
        &self.axis
    }

    /// Returns one channel's samples.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::MissingChannel`] if the key is absent.
    pub fn channel<K: Into<ChannelKey>>(&self, key: K) -> Result<&[f64], SignalError> {
        let key = key.into();
        self.channels
            .get(&key)
            .map(Vec::as_slice)
            .ok_or(SignalError::MissingChannel { key })
    }

    /// Iterates over `(key, samples)` pairs in key order.
    pub fn channels(&self) -> impl Iterator<Item = (&ChannelKey, &[f64])> {
        self.channels.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Iterates over the channel keys in order.
    pub fn channel_keys(&self) -> impl Iterator<Item = &ChannelKey> {
        self.channels.keys()
    }

    /// Returns the number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Returns the number of samples per channel.
    pub fn len(&self) -> usize {
        self.axis.len()
    }

    /// Returns `true` if the time axis has no samples.
    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }

    /// Deep-copies one channel into a single-channel signal.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::MissingChannel`] if the key is absent.
    pub fn extract<K: Into<ChannelKey>>(&self, key: K) -> Result<MonoSignal, SignalError> {
        let key = key.into();
        let values = self
            .channels
            .get(&key)
            .ok_or_else(|| SignalError::MissingChannel { key: key.clone() })?;
        MonoSignal::new(self.axis.clone(), values.clone())
    }

    /// Adds two signals elementwise over self's channel keys.
    ///
    /// Channels present only in `other` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::TimeAxisMismatch`] if the axes differ, or
    /// [`SignalError::MissingChannel`] if `other` lacks one of self's
    /// channels.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Signal) -> Result<Signal, SignalError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtracts `other` from `self` elementwise over self's channel keys.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Signal::add`].
    pub fn subtract(&self, other: &Signal) -> Result<Signal, SignalError> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Returns the elementwise negation.
    pub fn negate(&self) -> Signal {
        self.map_values(|v| -v)
    }

    /// Replaces every NaN sample with `value`, in every channel.
    pub fn fill_nan(&mut self, value: f64) {
        for samples in self.channels.values_mut() {
            for v in samples.iter_mut() {
                if v.is_nan() {
                    *v = value;
                }
            }
        }
    }

    /// Clamps every sample into `[-bound, bound]`. NaN samples are left
    /// alone.
    pub fn clamp_abs(&mut self, bound: f64) {
        for samples in self.channels.values_mut() {
            for v in samples.iter_mut() {
                if *v > bound {
                    *v = bound;
                } else if *v < -bound {
                    *v = -bound;
                }
            }
        }
    }

    /// Drops all but the first sample of each run of equal time offsets,
    /// pruning every channel in lockstep.
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
        let offsets = filter_by(self.axis.offsets(), &mask);
        self.axis = rebuild_axis(&self.axis, offsets)?;
        for samples in self.channels.values_mut() {
            *samples = filter_by(samples, &mask);
        }
        debug!(removed, "dropped duplicate sample times");
        Ok(())
    }

    /// Deep-copies the samples in `range` into a new signal.
    ///
    /// # Errors
    ///
    /// Returns an error if the range does not fit the axis.
    pub fn slice(&self, range: Range<usize>) -> Result<Signal, SignalError> {
        let axis = self.axis.slice(range.clone())?;
        let channels = self
            .channels
            .iter()
            .map(|(key, samples)| (key.clone(), samples[range.clone()].to_vec()))
            .collect();
        Ok(Signal { axis, channels })
    }

    /// Returns a copy smoothed by a centered box filter of `window`
    /// samples. The edge samples the filter could not fully cover are NaN
    /// in the result.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidAverageWindow`] if `window` is zero.
    pub fn running_average(&self, window: usize) -> Result<Signal, SignalError> {
        let mut channels = BTreeMap::new();
        for (key, samples) in &self.channels {
            channels.insert(key.clone(), running_average(samples, window)?);
        }
        Ok(Signal {
            axis: self.axis.clone(),
            channels,
        })
    }

    /// Returns a copy smoothed over a time window, converted to a sample
    /// count via the mean sampling interval.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidAverageWindow`] if the window rounds
    /// down to zero samples.
    pub fn running_average_over(&self, window: Duration) -> Result<Signal, SignalError> {
        self.running_average(window_samples(&self.axis, window)?)
    }

    /// Re-spaces the signal evenly across its span with `factor` times the
    /// sample density, cubic-splining every channel onto the new grid.
    ///
    /// # Errors
    ///
    /// Fails if the factor is not positive and finite, the signal is
    /// empty, or the axis still contains duplicate offsets.
    pub fn resample_factor(&mut self, factor: f64) -> Result<(), SignalError> {
        let mut new_axis = self.axis.clone();
        new_axis.resample_evenly(factor)?;
        let channels = regrid_channels(&self.channels, self.axis.offsets(), new_axis.offsets())?;
        self.channels = channels;
        self.axis = new_axis;
        Ok(())
    }

    /// Resamples the signal onto the sample times of `reference`,
    /// adopting a copy of the reference as the new axis.
    ///
    /// The signal's own axis is first re-expressed in the reference's
    /// unit and origin frame so the two offset scales agree. Reference
    /// times slightly outside the sampled range are extrapolated.
    ///
    /// # Errors
    ///
    /// Fails if origin alignment is impossible (reference has an origin
    /// but the signal does not) or the axis contains duplicate offsets.
    pub fn resample_to(&mut self, reference: &TimeSeries) -> Result<(), SignalError> {
        let mut aligned = self.axis.clone();
        align_axis_to_reference(&mut aligned, reference)?;
        warn_on_extrapolation(&aligned, reference);
        let channels = regrid_channels(&self.channels, aligned.offsets(), reference.offsets())?;
        self.channels = channels;
        self.axis = reference.clone();
        Ok(())
    }

    fn zip_with(
        &self,
        other: &Signal,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<Signal, SignalError> {
        if self.axis != other.axis {
            return Err(SignalError::TimeAxisMismatch);
        }
        let mut channels = BTreeMap::new();
        for (key, samples) in &self.channels {
            let other_samples = other
                .channels
                .get(key)
                .ok_or_else(|| SignalError::MissingChannel { key: key.clone() })?;
            let combined = samples
                .iter()
                .zip(other_samples)
                .map(|(&a, &b)| op(a, b))
                .collect();
            channels.insert(key.clone(), combined);
        }
        Ok(Signal {
            axis: self.axis.clone(),
            channels,
        })
    }

    fn map_values(&self, op: impl Fn(f64) -> f64) -> Signal {
        let channels = self
            .channels
            .iter()
            .map(|(key, samples)| (key.clone(), samples.iter().map(|&v| op(v)).collect()))
            .collect();
        Signal {
            axis: self.axis.clone(),
            channels,
        }
    }
}

fn filter_by(values: &[f64], mask: &[bool]) -> Vec<f64> {
    values
        .iter()
        .zip(mask)
        .filter_map(|(&v, &keep)| keep.then_some(v))
        .collect()
}

fn regrid_channels(
    channels: &BTreeMap<ChannelKey, Vec<f64>>,
    source_offsets: &[f64],
    target_offsets: &[f64],
) -> Result<BTreeMap<ChannelKey, Vec<f64>>, SignalError> {
    let mut out = BTreeMap::new();
    for (key, samples) in channels {
        out.insert(key.clone(), spline_onto(source_offsets, samples, target_offsets)?);
    }
    Ok(out)
}
