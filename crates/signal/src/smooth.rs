//! Box-filter running averages with edge trimming.

use aeolus_timebase::TimeSeries;
use chrono::Duration;

use crate::error::SignalError;

/// Converts a time window into a whole number of samples on `axis`,
/// truncating toward zero.
pub(crate) fn window_samples(axis: &TimeSeries, window: Duration) -> Result<usize, SignalError> {
    let mean = axis.mean_interval()?;
    let window_units =
        window.num_nanoseconds().unwrap_or(i64::MAX) as f64 / axis.unit().nanos() as f64;
    let samples = if mean > 0.0 {
        (window_units / mean).trunc()
    } else {
        0.0
    };
    if samples < 1.0 {
        return Err(SignalError::InvalidAverageWindow { samples: 0 });
    }
    Ok(samples as usize)
}

/// Centered box filter of width `window`, zero-padded outside the data.
///
/// The window for output `i` spans input `i - window/2 ..= i + (window-1)/2`
/// and the sum always divides by `window`, so windows that run off either
/// end are averaged against implicit zeros. Exactly those edge outputs are
/// then forced to NaN: the leading `window/2` samples and the trailing
/// `ceil(window/2) - 1` samples are edge distorted and unreliable.
pub(crate) fn running_average(values: &[f64], window: usize) -> Result<Vec<f64>, SignalError> {
    if window == 0 {
        return Err(SignalError::InvalidAverageWindow { samples: 0 });
    }
    let n = values.len();
    let left = window / 2;
    let right = window - left;

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let lo = i.saturating_sub(left);
        let hi = (i + right).min(n);
        let sum: f64 = values[lo..hi].iter().sum();
        out.push(sum / window as f64);
    }

    let leading = left.min(n);
    let trailing = (window + 1) / 2 - 1;
    for v in &mut out[..leading] {
        *v = f64::NAN;
    }
    for v in &mut out[n.saturating_sub(trailing)..] {
        *v = f64::NAN;
    }
    Ok(out)
}
