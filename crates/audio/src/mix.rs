//! Stereo fold-down of three-component field data.

use crate::error::AudioError;

/// Folds three field components into a stereo pair.
///
/// The first component carries the left channel, the third the right,
/// and the second is split evenly between both:
/// `left = c0 + 0.5 c1`, `right = 0.5 c1 + c2`.
///
/// # Errors
///
/// Returns [`AudioError::ComponentLengthMismatch`] if the components
/// differ in length.
pub fn mix_to_stereo(
    c0: &[f64],
    c1: &[f64],
    c2: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), AudioError> {
    for (component, len) in [(1, c1.len()), (2, c2.len())] {
        if len != c0.len() {
            return Err(AudioError::ComponentLengthMismatch {
                component,
                len,
                expected: c0.len(),
            });
        }
    }
    let left = c0.iter().zip(c1).map(|(&a, &b)| a + 0.5 * b).collect();
    let right = c1.iter().zip(c2).map(|(&b, &c)| 0.5 * b + c).collect();
    Ok((left, right))
}
