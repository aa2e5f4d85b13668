//! End-to-end transform, polar split, and reconstruction checks.

use std::f64::consts::PI;

use aeolus_wavelet::{
    CoefficientMatrix, InverseFormula, Morlet, cwt, icwt, interpolate_polar, scale_ladder,
};

fn sine(n: usize, period: f64) -> Vec<f64> {
    (0..n).map(|i| (2.0 * PI * i as f64 / period).sin()).collect()
}

fn rms(values: &[f64]) -> f64 {
    (values.iter().map(|v| v * v).sum::<f64>() / values.len() as f64).sqrt()
}

/// Distance from the edges beyond which the widest kernel no longer reaches,
/// for a ladder capped at 64 samples.
const EDGE_MARGIN: usize = 310;

#[test]
fn polar_split_preserves_reconstruction() {
    let n = 2048;
    let samples = sine(n, 32.0);
    let scales = scale_ladder(64, n, 0.125, 1.0, &Morlet).unwrap();
    let matrix = cwt(&samples, &scales, 1.0, &Morlet).unwrap();

    let rebuilt = CoefficientMatrix::from_polar(&matrix.magnitude(), &matrix.unwrapped_phase())
        .unwrap();
    let out = icwt(
        &rebuilt,
        &scales,
        0.125,
        1.0,
        InverseFormula::Admissibility,
        &Morlet,
    )
    .unwrap();

    assert_eq!(out.len(), n);
    let residual: Vec<f64> = out[EDGE_MARGIN..n - EDGE_MARGIN]
        .iter()
        .zip(&samples[EDGE_MARGIN..n - EDGE_MARGIN])
        .map(|(a, b)| a - b)
        .collect();
    let error = rms(&residual);
    assert!(error < 0.02, "interior rms error {error} too large");
}

#[test]
fn time_difference_inverse_tracks_a_shifted_sine() {
    let n = 1024;
    let period = 16.0;
    let omega = 2.0 * PI / period;
    let samples = sine(n, period);
    let scales = scale_ladder(64, n, 0.125, 1.0, &Morlet).unwrap();
    let matrix = cwt(&samples, &scales, 1.0, &Morlet).unwrap();

    let out = icwt(
        &matrix,
        &scales,
        0.125,
        1.0,
        InverseFormula::TimeDifference,
        &Morlet,
    )
    .unwrap();
    assert_eq!(out.len(), n);

    // The forward difference lands between samples, so the output follows
    // the input advanced by half a sample, up to a positive gain.
    let interior = &out[EDGE_MARGIN..n - EDGE_MARGIN];
    let expected: Vec<f64> = (EDGE_MARGIN..n - EDGE_MARGIN)
        .map(|j| (omega * (j as f64 + 0.5)).sin())
        .collect();

    let gain = interior
        .iter()
        .zip(&expected)
        .map(|(o, e)| o * e)
        .sum::<f64>()
        / expected.iter().map(|e| e * e).sum::<f64>();
    assert!(gain > 0.0, "reconstruction gain {gain} should be positive");

    let residual: Vec<f64> = interior
        .iter()
        .zip(&expected)
        .map(|(o, e)| o - gain * e)
        .collect();
    let shape_error = rms(&residual) / (gain * rms(&expected));
    assert!(shape_error < 0.05, "shape error {shape_error} too large");
}

#[test]
fn stretched_coefficients_synthesize_a_slower_waveform() {
    let n = 1024;
    let period = 16.0;
    let omega = 2.0 * PI / period;
    let samples = sine(n, period);
    let scales = scale_ladder(64, n, 0.125, 1.0, &Morlet).unwrap();
    let matrix = cwt(&samples, &scales, 1.0, &Morlet).unwrap();

    let (magnitude, phase) =
        interpolate_polar(&matrix.magnitude(), &matrix.unwrapped_phase(), 2.0).unwrap();
    let stretched = CoefficientMatrix::from_polar(&magnitude, &phase).unwrap();
    assert_eq!(stretched.n_scales(), matrix.n_scales());
    assert_eq!(stretched.n_times(), 2 * n);

    let out = icwt(
        &stretched,
        &scales,
        0.125,
        1.0,
        InverseFormula::Admissibility,
        &Morlet,
    )
    .unwrap();

    // Column j of the stretched matrix samples the old coefficient history
    // at position j * (n - 1) / (2n - 1), so the synthesis follows the
    // original waveform on that dilated clock.
    let dilation = (n - 1) as f64 / (2 * n - 1) as f64;
    let lo = 2 * EDGE_MARGIN;
    let hi = 2 * n - 2 * EDGE_MARGIN;
    let residual: Vec<f64> = (lo..hi)
        .map(|j| out[j] - (omega * j as f64 * dilation).sin())
        .collect();
    let error = rms(&residual);
    assert!(error < 0.03, "interior rms error {error} too large");
}
