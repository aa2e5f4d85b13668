//! Forward continuous wavelet transform.
//!
//! Convolves the signal with a bank of dilated wavelet kernels via FFT,
//! following Torrence & Compo (1998).

use num_complex::Complex;
use rustfft::FftPlanner;
use tracing::{debug, warn};

use crate::error::WaveletError;
use crate::morlet::Wavelet;

/// Complex wavelet coefficients indexed `[scale][time]`.
///
/// Produced by [`cwt`] and consumed by [`icwt`](crate::icwt) directly or
/// through the magnitude/phase split and
/// [`interpolate_polar`](crate::interpolate_polar).
#[derive(Clone, Debug)]
pub struct CoefficientMatrix {
    rows: Vec<Vec<Complex<f64>>>,
    width: usize,
}

impl CoefficientMatrix {
    /// Builds a matrix from per-scale coefficient rows.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`WaveletError::EmptyMatrix`] | no rows, or rows of length zero |
    /// | [`WaveletError::RaggedMatrix`] | rows of unequal length |
    pub fn new(rows: Vec<Vec<Complex<f64>>>) -> Result<Self, WaveletError> {
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        if width == 0 {
            return Err(WaveletError::EmptyMatrix);
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(WaveletError::RaggedMatrix {
                    row: index,
                    len: row.len(),
                    expected: width,
                });
            }
        }
        Ok(Self { rows, width })
    }

    /// Rebuilds a complex matrix from magnitude and phase matrices.
    ///
    /// # Errors
    ///
    /// Returns an error if either matrix is empty or ragged, or if the two
    /// shapes disagree.
    pub fn from_polar(magnitude: &[Vec<f64>], phase: &[Vec<f64>]) -> Result<Self, WaveletError> {
        let (magnitude_rows, magnitude_cols) = dimensions(magnitude)?;
        let (phase_rows, phase_cols) = dimensions(phase)?;
        if (magnitude_rows, magnitude_cols) != (phase_rows, phase_cols) {
            return Err(WaveletError::PolarShapeMismatch {
                magnitude_rows,
                magnitude_cols,
                phase_rows,
                phase_cols,
            });
        }
        let rows = magnitude
            .iter()
            .zip(phase)
            .map(|(mag_row, phase_row)| {
                mag_row
                    .iter()
                    .zip(phase_row)
                    .map(|(&m, &p)| Complex::from_polar(m, p))
                    .collect()
            })
            .collect();
        Ok(Self {
            rows,
            width: magnitude_cols,
        })
    }

    /// Returns the number of scales (rows).
    pub fn n_scales(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of time points (columns).
    pub fn n_times(&self) -> usize {
        self.width
    }

    /// Returns the coefficient rows, one per scale.
    pub fn rows(&self) -> &[Vec<Complex<f64>>] {
        &self.rows
    }

    /// Componentwise modulus of the coefficients.
    pub fn magnitude(&self) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.norm()).collect())
            .collect()
    }

    /// Phase angles unwrapped along the time axis.
    ///
    /// Unwrapping removes the artificial 2π jumps of the principal-value
    /// angle so each row can be scaled or interpolated safely.
    pub fn unwrapped_phase(&self) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|row| {
                let mut phases: Vec<f64> = row.iter().map(|c| c.arg()).collect();
                unwrap_in_place(&mut phases);
                phases
            })
            .collect()
    }
}

/// Computes the forward transform of `samples` against a scale ladder.
///
/// For each scale the wavelet kernel is sampled over `10 * scale / interval`
/// points centered on zero, normalized by `interval.sqrt() / scale`, and
/// convolved with the signal (centered, same length). Rows are stacked in
/// ladder order, so the result is `[scales.len()][samples.len()]`.
///
/// Kernels wider than the signal are accepted; the affected rows are
/// dominated by boundary decay and a warning is logged.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::InvalidParameter`] | non-positive interval or scale, or an empty ladder |
/// | [`WaveletError::SignalTooShort`] | fewer than 2 samples |
/// | [`WaveletError::NonFiniteSamples`] | NaN or infinite sample values |
pub fn cwt<W: Wavelet>(
    samples: &[f64],
    scales: &[f64],
    interval: f64,
    wavelet: &W,
) -> Result<CoefficientMatrix, WaveletError> {
    if !(interval > 0.0 && interval.is_finite()) {
        return Err(WaveletError::InvalidParameter(format!(
            "sampling interval {interval} is not positive"
        )));
    }
    if scales.is_empty() {
        return Err(WaveletError::InvalidParameter(
            "scale ladder is empty".to_string(),
        ));
    }
    if let Some(&bad) = scales.iter().find(|s| !(s.is_finite() && **s > 0.0)) {
        return Err(WaveletError::InvalidParameter(format!(
            "scale {bad} is not positive"
        )));
    }
    let n = samples.len();
    if n < 2 {
        return Err(WaveletError::SignalTooShort { len: n, min: 2 });
    }
    if !samples.iter().all(|v| v.is_finite()) {
        return Err(WaveletError::NonFiniteSamples);
    }

    let widest = scales
        .iter()
        .map(|&s| kernel_points(s, interval))
        .max()
        .unwrap_or(0);
    if widest > n {
        warn!(
            kernel = widest,
            samples = n,
            "widest wavelet kernel exceeds the signal length; edge samples are boundary-dominated"
        );
    }
    debug!(scales = scales.len(), samples = n, "computing forward transform");

    let mut planner = FftPlanner::new();
    let mut spectrum_cache = (0usize, Vec::new());
    let rows = scales
        .iter()
        .map(|&scale| {
            let kernel = sample_kernel(scale, interval, wavelet);
            convolve_same(&mut planner, samples, &kernel, &mut spectrum_cache)
        })
        .collect();

    Ok(CoefficientMatrix { rows, width: n })
}

/// Number of kernel sample points for a scale.
fn kernel_points(scale: f64, interval: f64) -> usize {
    (10.0 * scale / interval).ceil() as usize
}

/// Samples the dilated wavelet over its kernel span centered on zero, in
/// steps of the sampling interval.
fn sample_kernel<W: Wavelet>(scale: f64, interval: f64, wavelet: &W) -> Vec<Complex<f64>> {
    let span = 10.0 * scale / interval;
    let start = (1.0 - span) / 2.0;
    let norm = interval.sqrt() / scale;
    (0..kernel_points(scale, interval))
        .map(|k| wavelet.evaluate((start + k as f64) * interval, scale) * norm)
        .collect()
}

/// Centered same-length FFT convolution of a real signal with a complex
/// kernel.
///
/// The padded signal spectrum is cached across calls that share a padded
/// length; ladder order makes the padded length non-decreasing, so a single
/// slot suffices.
fn convolve_same(
    planner: &mut FftPlanner<f64>,
    samples: &[f64],
    kernel: &[Complex<f64>],
    spectrum_cache: &mut (usize, Vec<Complex<f64>>),
) -> Vec<Complex<f64>> {
    let n = samples.len();
    let m = kernel.len();
    let full = n + m - 1;
    let nfft = full.next_power_of_two();

    if spectrum_cache.0 != nfft {
        let mut padded: Vec<Complex<f64>> = samples
            .iter()
            .map(|&x| Complex::new(x, 0.0))
            .chain(std::iter::repeat_n(Complex::new(0.0, 0.0), nfft - n))
            .collect();
        planner.plan_fft_forward(nfft).process(&mut padded);
        *spectrum_cache = (nfft, padded);
    }
    let spectrum = &spectrum_cache.1;

    let mut kernel_spectrum: Vec<Complex<f64>> = kernel
        .iter()
        .copied()
        .chain(std::iter::repeat_n(Complex::new(0.0, 0.0), nfft - m))
        .collect();
    planner.plan_fft_forward(nfft).process(&mut kernel_spectrum);

    let mut product: Vec<Complex<f64>> = spectrum
        .iter()
        .zip(kernel_spectrum.iter())
        .map(|(&s, &k)| s * k)
        .collect();
    planner.plan_fft_inverse(nfft).process(&mut product);

    // rustfft leaves the inverse unnormalized; the centered slice takes the
    // middle `n` points of the full `n + m - 1` convolution.
    let norm = 1.0 / nfft as f64;
    let offset = (m - 1) / 2;
    product[offset..offset + n]
        .iter()
        .map(|&c| c * norm)
        .collect()
}

/// Row and column count of a rectangular matrix.
pub(crate) fn dimensions(rows: &[Vec<f64>]) -> Result<(usize, usize), WaveletError> {
    let width = rows.first().map(|row| row.len()).unwrap_or(0);
    if width == 0 {
        return Err(WaveletError::EmptyMatrix);
    }
    for (index, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(WaveletError::RaggedMatrix {
                row: index,
                len: row.len(),
                expected: width,
            });
        }
    }
    Ok((rows.len(), width))
}

/// Removes 2π discontinuities from a phase sequence: consecutive differences
/// are wrapped into (-π, π] and jumps of at least π are folded back.
fn unwrap_in_place(phases: &mut [f64]) {
    use std::f64::consts::PI;
    let tau = 2.0 * PI;
    let mut previous = match phases.first() {
        Some(&first) => first,
        None => return,
    };
    let mut offset = 0.0;
    for value in phases.iter_mut().skip(1) {
        let raw = *value;
        let delta = raw - previous;
        let mut wrapped = (delta + PI).rem_euclid(tau) - PI;
        if wrapped == -PI && delta > 0.0 {
            wrapped = PI;
        }
        if delta.abs() >= PI {
            offset += wrapped - delta;
        }
        *value = raw + offset;
        previous = raw;
    }
}
