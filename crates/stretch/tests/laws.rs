//! End-to-end behavior of the shifter and stretcher on known waveforms.

use std::f64::consts::PI;

use aeolus_signal::MonoSignal;
use aeolus_stretch::{ShiftConfig, StretchConfig, pitch_shift, time_stretch};
use aeolus_timebase::{TimeSeries, TimeUnit};
use approx::assert_relative_eq;

fn sine_signal(n: usize, period_samples: f64, interval: f64) -> MonoSignal {
    let offsets = (0..n).map(|i| i as f64 * interval).collect();
    let axis = TimeSeries::from_offsets(offsets, TimeUnit::second()).unwrap();
    let samples = (0..n)
        .map(|i| (2.0 * PI * i as f64 / period_samples).sin())
        .collect();
    MonoSignal::new(axis, samples).unwrap()
}

fn rms(values: &[f64]) -> f64 {
    (values.iter().map(|v| v * v).sum::<f64>() / values.len() as f64).sqrt()
}

/// Positive-going zero crossings per sample interval.
fn crossing_rate(samples: &[f64]) -> f64 {
    let crossings = samples
        .windows(2)
        .filter(|w| w[0] < 0.0 && w[1] >= 0.0)
        .count();
    crossings as f64 / (samples.len() - 1) as f64
}

/// A kernel cap of 96 samples puts the widest kernel at 956 samples, so
/// an interior margin of half that clears the boundary-dominated zone.
const EDGE_MARGIN: usize = 478;

#[test]
fn unit_shift_reconstructs_the_input() {
    let n = 4096;
    let signal = sine_signal(n, 24.0, 1.0);
    let config = ShiftConfig::new().with_max_kernel_samples(96);
    let result = pitch_shift(&signal, &config).unwrap();

    let out = &result.signal().samples()[EDGE_MARGIN..n - EDGE_MARGIN];
    let expected = &signal.samples()[EDGE_MARGIN..n - EDGE_MARGIN];

    // The discrete-scale reconstruction carries a calibration gain near
    // one; factor it out before comparing waveforms.
    let gain = out
        .iter()
        .zip(expected)
        .map(|(o, e)| o * e)
        .sum::<f64>()
        / expected.iter().map(|e| e * e).sum::<f64>();
    assert!(
        (0.97..=1.03).contains(&gain),
        "reconstruction gain {gain} drifted from unity"
    );

    let residual: Vec<f64> = out
        .iter()
        .zip(expected)
        .map(|(o, e)| o - gain * e)
        .collect();
    let shape_error = rms(&residual) / (gain * rms(expected));
    assert!(shape_error < 0.01, "interior shape error {shape_error} too large");
}

#[test]
fn doubling_the_shift_doubles_the_frequency() {
    let n = 2048;
    let signal = sine_signal(n, 24.0, 1.0);
    let config = ShiftConfig::new().with_max_kernel_samples(96).with_shift(2.0);
    let result = pitch_shift(&signal, &config).unwrap();

    assert_eq!(result.signal().len(), n);
    let interior = &result.signal().samples()[EDGE_MARGIN..n - EDGE_MARGIN];
    let rate = crossing_rate(interior);
    // Period 24 becomes period 12.
    assert!(
        (rate - 1.0 / 12.0).abs() < 0.004,
        "crossing rate {rate} is not one per 12 samples"
    );
}

#[test]
fn stretch_multiplies_duration_and_divides_interval() {
    let signal = sine_signal(512, 16.0, 1.0);
    let config = StretchConfig::new().with_max_kernel_samples(64);
    for factor in [0.5, 2.0, 16.0] {
        let result = time_stretch(&signal, factor, &config).unwrap();
        let out = result.signal();
        assert_eq!(out.len(), (512.0 * factor) as usize);
        assert_relative_eq!(
            out.axis().span().unwrap(),
            signal.axis().span().unwrap(),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            out.axis().mean_interval().unwrap(),
            signal.axis().mean_interval().unwrap() / factor,
            epsilon = 1e-9
        );
    }
}

#[test]
fn sixteenfold_stretch_preserves_the_pitch() {
    // Half a second of a 200 Hz tone sampled at 2 kHz: ten samples per
    // cycle before and, if the pitch survives, after the stretch.
    let rate = 2000.0;
    let n = 1000;
    let signal = sine_signal(n, 10.0, 1.0 / rate);
    let result = time_stretch(&signal, 16.0, &StretchConfig::new()).unwrap();

    let out = result.signal();
    assert_eq!(out.len(), 16 * n);
    assert!(out.samples().iter().all(|v| v.is_finite()));

    let interior = &out.samples()[3000..13000];
    let rate_per_sample = crossing_rate(interior);
    let frequency = rate_per_sample * rate;
    assert!(
        (190.0..=210.0).contains(&frequency),
        "stretched tone drifted to {frequency} Hz"
    );
}
