//! Peak normalization of raw sample vectors.

use tracing::debug;

/// Scales `samples` in place so the peak magnitude equals `peak`.
///
/// NaN samples are ignored while finding the current peak and scaled
/// like any other value. Silent or non-finite input is left untouched.
pub fn normalize(samples: &mut [f64], peak: f64) {
    let current = samples.iter().fold(0.0_f64, |acc, &v| acc.max(v.abs()));
    if current == 0.0 || !current.is_finite() {
        debug!(peak = current, "skipping normalization of degenerate audio");
        return;
    }
    let scale = peak / current;
    for v in samples.iter_mut() {
        *v *= scale;
    }
}
