//! Wavelet capability interface and the Morlet implementation.

use num_complex::Complex;
use std::f64::consts::PI;

/// Capability interface consumed by the transform engine.
///
/// [`scale_ladder`](crate::scale_ladder) drives the characteristic period to
/// the sampling limit, [`cwt`](crate::cwt) samples the kernel through
/// [`evaluate`](Wavelet::evaluate), and the admissibility inverse formula
/// consumes the two constants.
pub trait Wavelet {
    /// Fourier-equivalent period of the wavelet dilated to `scale`.
    fn characteristic_period(&self, scale: f64) -> f64;

    /// Complex wavelet value at time offset `t` under dilation `scale`.
    fn evaluate(&self, t: f64, scale: f64) -> Complex<f64>;

    /// Reconstruction constant for the admissibility inverse formula.
    fn admissibility_constant(&self) -> f64;

    /// Wavelet value at zero time offset.
    fn value_at_zero(&self) -> f64;
}

/// Morlet wavelet with non-dimensional frequency 6: a complex exponential
/// under a Gaussian envelope, including the zero-mean correction term.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Morlet;

impl Morlet {
    /// Non-dimensional frequency.
    const OMEGA0: f64 = 6.0;
    /// Reconstruction constant from Torrence & Compo (1998), table 2.
    const ADMISSIBILITY: f64 = 0.776;
}

impl Wavelet for Morlet {
    fn characteristic_period(&self, scale: f64) -> f64 {
        4.0 * PI * scale / (Self::OMEGA0 + (2.0 + Self::OMEGA0 * Self::OMEGA0).sqrt())
    }

    fn evaluate(&self, t: f64, scale: f64) -> Complex<f64> {
        let x = t / scale;
        let envelope = PI.powf(-0.25) * (-0.5 * x * x).exp();
        let carrier =
            Complex::new(0.0, Self::OMEGA0 * x).exp() - (-0.5 * Self::OMEGA0 * Self::OMEGA0).exp();
        carrier * envelope
    }

    fn admissibility_constant(&self) -> f64 {
        Self::ADMISSIBILITY
    }

    fn value_at_zero(&self) -> f64 {
        PI.powf(-0.25) * (1.0 - (-0.5 * Self::OMEGA0 * Self::OMEGA0).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn characteristic_period_known_value() {
        let period = Morlet.characteristic_period(1.0);
        assert_relative_eq!(period, 1.0330436, max_relative = 1e-6);
    }

    #[test]
    fn characteristic_period_linear_in_scale() {
        let base = Morlet.characteristic_period(1.0);
        assert_relative_eq!(Morlet.characteristic_period(10.0), 10.0 * base, epsilon = 1e-12);
        assert_relative_eq!(Morlet.characteristic_period(0.25), 0.25 * base, epsilon = 1e-12);
    }

    #[test]
    fn value_at_zero_known_value() {
        assert_relative_eq!(Morlet.value_at_zero(), 0.7511255, max_relative = 1e-7);
    }

    #[test]
    fn value_at_zero_matches_evaluation() {
        let at_zero = Morlet.evaluate(0.0, 2.5);
        assert_relative_eq!(at_zero.re, Morlet.value_at_zero(), epsilon = 1e-15);
        assert!(at_zero.im.abs() < 1e-15);
    }

    #[test]
    fn envelope_decays_away_from_center() {
        let scale = 3.0;
        let far = Morlet.evaluate(5.0 * scale, scale);
        assert!(far.norm() < 1e-5, "norm at five scales out: {}", far.norm());
    }

    #[test]
    fn dilation_rescales_the_argument() {
        let wide = Morlet.evaluate(4.0, 8.0);
        let narrow = Morlet.evaluate(0.5, 1.0);
        assert_relative_eq!(wide.re, narrow.re, epsilon = 1e-15);
        assert_relative_eq!(wide.im, narrow.im, epsilon = 1e-15);
    }

    #[test]
    fn modulus_is_symmetric_in_time() {
        for &t in &[0.3, 1.0, 2.7] {
            assert_relative_eq!(
                Morlet.evaluate(t, 1.0).norm(),
                Morlet.evaluate(-t, 1.0).norm(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn wavelet_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Morlet>();
    }
}
