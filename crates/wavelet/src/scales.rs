//! Geometric ladder of wavelet analysis scales.

use tracing::debug;

use crate::error::WaveletError;
use crate::morlet::Wavelet;

const MAX_ROOT_ITERATIONS: usize = 100;
const ROOT_TOLERANCE: f64 = 1e-12;

/// Builds the geometric ladder of analysis scales for a signal.
///
/// The smallest scale solves `characteristic_period(s) = 2 * interval`, the
/// shortest period the sampling can carry. Scales then grow by a factor of
/// `2^spacing` per step, stopping at the last scale no larger than
/// `min(max_samples, signal_len)` sampling intervals. The ladder is strictly
/// increasing and never empty.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::InvalidParameter`] | `spacing` or `interval` not positive |
/// | [`WaveletError::SignalTooShort`] | fewer than 2 samples |
/// | [`WaveletError::ScaleRootDiverged`] | the secant search fails to converge |
/// | [`WaveletError::UnusableScale`] | the search converges to a non-positive scale |
/// | [`WaveletError::EmptyLadder`] | the cutoff is below the smallest scale's period |
pub fn scale_ladder<W: Wavelet>(
    max_samples: usize,
    signal_len: usize,
    spacing: f64,
    interval: f64,
    wavelet: &W,
) -> Result<Vec<f64>, WaveletError> {
    if !(spacing > 0.0 && spacing.is_finite()) {
        return Err(WaveletError::InvalidParameter(format!(
            "scale spacing {spacing} is not positive"
        )));
    }
    if !(interval > 0.0 && interval.is_finite()) {
        return Err(WaveletError::InvalidParameter(format!(
            "sampling interval {interval} is not positive"
        )));
    }
    if signal_len < 2 {
        return Err(WaveletError::SignalTooShort {
            len: signal_len,
            min: 2,
        });
    }

    let cutoff = max_samples.min(signal_len);
    let smallest = smallest_scale(interval, wavelet)?;
    if !smallest.is_finite() || smallest <= 0.0 {
        return Err(WaveletError::UnusableScale { value: smallest });
    }

    let octaves = (cutoff as f64 * interval / smallest).log2();
    let steps = (octaves / spacing).floor();
    if steps < 0.0 {
        return Err(WaveletError::EmptyLadder {
            smallest,
            max_samples: cutoff,
        });
    }
    let steps = steps as usize;
    let largest = smallest * (spacing * steps as f64).exp2();
    debug!(scales = steps + 1, smallest, largest, "built scale ladder");

    Ok((0..=steps)
        .map(|j| smallest * (spacing * j as f64).exp2())
        .collect())
}

/// Secant search for the scale whose characteristic period equals twice the
/// sampling interval.
fn smallest_scale<W: Wavelet>(interval: f64, wavelet: &W) -> Result<f64, WaveletError> {
    let gap = |s: f64| wavelet.characteristic_period(s) - 2.0 * interval;

    let mut previous = 1.0;
    let mut gap_previous = gap(previous);
    if gap_previous == 0.0 {
        return Ok(previous);
    }
    let mut current = 1.01;
    let mut gap_current = gap(current);

    for iteration in 1..=MAX_ROOT_ITERATIONS {
        if gap_current == gap_previous {
            return Err(WaveletError::ScaleRootDiverged {
                iterations: iteration,
                residual: gap_current,
            });
        }
        let next = current - gap_current * (current - previous) / (gap_current - gap_previous);
        if !next.is_finite() {
            return Err(WaveletError::ScaleRootDiverged {
                iterations: iteration,
                residual: gap_current,
            });
        }
        previous = current;
        gap_previous = gap_current;
        current = next;
        gap_current = gap(current);
        if (current - previous).abs() <= ROOT_TOLERANCE * current.abs().max(1.0) {
            return Ok(current);
        }
    }
    Err(WaveletError::ScaleRootDiverged {
        iterations: MAX_ROOT_ITERATIONS,
        residual: gap_current,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morlet::Morlet;
    use approx::assert_relative_eq;
    use num_complex::Complex;

    /// Capability whose characteristic period is `scale + offset`.
    struct LinearPeriod {
        offset: f64,
    }

    impl Wavelet for LinearPeriod {
        fn characteristic_period(&self, scale: f64) -> f64 {
            scale + self.offset
        }
        fn evaluate(&self, _t: f64, _scale: f64) -> Complex<f64> {
            Complex::new(0.0, 0.0)
        }
        fn admissibility_constant(&self) -> f64 {
            1.0
        }
        fn value_at_zero(&self) -> f64 {
            1.0
        }
    }

    /// Capability whose characteristic period never changes.
    struct FlatPeriod;

    impl Wavelet for FlatPeriod {
        fn characteristic_period(&self, _scale: f64) -> f64 {
            5.0
        }
        fn evaluate(&self, _t: f64, _scale: f64) -> Complex<f64> {
            Complex::new(0.0, 0.0)
        }
        fn admissibility_constant(&self) -> f64 {
            1.0
        }
        fn value_at_zero(&self) -> f64 {
            1.0
        }
    }

    #[test]
    fn smallest_scale_matches_the_sampling_limit() {
        let ladder = scale_ladder(1200, 4096, 0.125, 1.0, &Morlet).unwrap();
        assert_relative_eq!(
            Morlet.characteristic_period(ladder[0]),
            2.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn ladder_is_strictly_increasing_in_octave_steps() {
        let spacing = 0.125;
        let ladder = scale_ladder(1200, 4096, spacing, 1.0, &Morlet).unwrap();
        assert!(!ladder.is_empty());
        for pair in ladder.windows(2) {
            assert!(pair[1] > pair[0]);
            assert_relative_eq!(pair[1] / pair[0], spacing.exp2(), epsilon = 1e-12);
        }
    }

    #[test]
    fn largest_scale_is_maximal_under_the_cutoff() {
        let spacing = 0.125;
        let cutoff = 1200.0;
        let ladder = scale_ladder(1200, 4096, spacing, 1.0, &Morlet).unwrap();
        let largest = ladder[ladder.len() - 1];
        assert!(largest <= cutoff);
        assert!(largest * spacing.exp2() > cutoff);
    }

    #[test]
    fn ladder_length_for_reference_parameters() {
        let ladder = scale_ladder(1200, 4096, 0.125, 1.0, &Morlet).unwrap();
        assert_eq!(ladder.len(), 75);
    }

    #[test]
    fn cutoff_clamps_to_signal_length() {
        let clamped = scale_ladder(5000, 256, 0.125, 1.0, &Morlet).unwrap();
        let direct = scale_ladder(256, 256, 0.125, 1.0, &Morlet).unwrap();
        assert_eq!(clamped, direct);
    }

    #[test]
    fn tight_cutoff_yields_single_scale() {
        let ladder = scale_ladder(2, 2, 0.125, 1.0, &Morlet).unwrap();
        assert_eq!(ladder.len(), 1);
    }

    #[test]
    fn interval_rescales_the_ladder() {
        let unit = scale_ladder(600, 2048, 0.125, 1.0, &Morlet).unwrap();
        let halved = scale_ladder(600, 2048, 0.125, 0.5, &Morlet).unwrap();
        assert_eq!(unit.len(), halved.len());
        for (&a, &b) in unit.iter().zip(halved.iter()) {
            assert_relative_eq!(b, 0.5 * a, max_relative = 1e-9);
        }
    }

    #[test]
    fn secant_is_exact_on_a_linear_period() {
        let ladder = scale_ladder(64, 64, 0.25, 1.5, &LinearPeriod { offset: 0.0 }).unwrap();
        assert_relative_eq!(ladder[0], 3.0, max_relative = 1e-12);
    }

    #[test]
    fn rejects_non_positive_spacing() {
        let err = scale_ladder(1200, 128, 0.0, 1.0, &Morlet).unwrap_err();
        assert!(matches!(err, WaveletError::InvalidParameter(_)));
    }

    #[test]
    fn rejects_non_positive_interval() {
        let err = scale_ladder(1200, 128, 0.125, -1.0, &Morlet).unwrap_err();
        assert!(matches!(err, WaveletError::InvalidParameter(_)));
    }

    #[test]
    fn rejects_single_sample_signal() {
        let err = scale_ladder(1200, 1, 0.125, 1.0, &Morlet).unwrap_err();
        assert!(matches!(
            err,
            WaveletError::SignalTooShort { len: 1, min: 2 }
        ));
    }

    #[test]
    fn cutoff_below_smallest_scale_is_an_empty_ladder() {
        let err = scale_ladder(1, 128, 0.125, 1.0, &Morlet).unwrap_err();
        assert!(matches!(
            err,
            WaveletError::EmptyLadder { max_samples: 1, .. }
        ));
    }

    #[test]
    fn flat_period_diverges() {
        let err = scale_ladder(1200, 128, 0.125, 1.0, &FlatPeriod).unwrap_err();
        assert!(matches!(err, WaveletError::ScaleRootDiverged { .. }));
    }

    #[test]
    fn negative_root_is_unusable() {
        let err = scale_ladder(1200, 128, 0.125, 1.0, &LinearPeriod { offset: 10.0 }).unwrap_err();
        assert!(matches!(err, WaveletError::UnusableScale { .. }));
    }
}
