//! Inverse continuous wavelet transform.
//!
//! Two reconstruction formulas are supported: the classic admissibility sum
//! of Torrence & Compo (1998) and the time-difference integral of Postnikov,
//! Lebedeva & Lavrova (2015), which does not need an admissibility constant.

use tracing::debug;

use aeolus_interp::trapezoid;

use crate::cwt::CoefficientMatrix;
use crate::error::WaveletError;
use crate::morlet::Wavelet;

/// Reconstruction formula used by [`icwt`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InverseFormula {
    /// Delta-function reconstruction: sum the real part over scales and
    /// rescale by the admissibility constant (Torrence & Compo 1998,
    /// eq. 11).
    Admissibility,
    /// Integrate the first time-difference of the imaginary part over
    /// scales (Postnikov, Lebedeva & Lavrova 2015). No admissibility
    /// constant is involved; the amplitude carries a formula-dependent
    /// gain.
    TimeDifference,
}

/// Reconstructs a real signal from wavelet coefficients.
///
/// `scales` must be the ladder the matrix was computed against, in the same
/// order. The output has one sample per matrix column regardless of the
/// formula; the time-difference formula replicates its trailing difference
/// column to keep the width.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::ScaleCountMismatch`] | ladder length differs from the matrix row count |
/// | [`WaveletError::InvalidParameter`] | non-positive spacing or interval |
/// | [`WaveletError::SignalTooShort`] | time-difference formula on a single-column matrix |
pub fn icwt<W: Wavelet>(
    matrix: &CoefficientMatrix,
    scales: &[f64],
    spacing: f64,
    interval: f64,
    formula: InverseFormula,
    wavelet: &W,
) -> Result<Vec<f64>, WaveletError> {
    if scales.len() != matrix.n_scales() {
        return Err(WaveletError::ScaleCountMismatch {
            scales: scales.len(),
            rows: matrix.n_scales(),
        });
    }
    if !(spacing > 0.0 && spacing.is_finite()) {
        return Err(WaveletError::InvalidParameter(format!(
            "octave spacing {spacing} is not positive"
        )));
    }
    if !(interval > 0.0 && interval.is_finite()) {
        return Err(WaveletError::InvalidParameter(format!(
            "sampling interval {interval} is not positive"
        )));
    }
    debug!(
        formula = ?formula,
        scales = scales.len(),
        samples = matrix.n_times(),
        "inverting coefficients"
    );
    match formula {
        InverseFormula::Admissibility => {
            Ok(admissibility_inverse(matrix, spacing, interval, wavelet))
        }
        InverseFormula::TimeDifference => time_difference_inverse(matrix, scales),
    }
}

fn admissibility_inverse<W: Wavelet>(
    matrix: &CoefficientMatrix,
    spacing: f64,
    interval: f64,
    wavelet: &W,
) -> Vec<f64> {
    let norm =
        spacing * interval.sqrt() / (wavelet.admissibility_constant() * wavelet.value_at_zero());
    let mut out = vec![0.0; matrix.n_times()];
    for row in matrix.rows() {
        for (acc, c) in out.iter_mut().zip(row) {
            *acc += c.re;
        }
    }
    for acc in &mut out {
        *acc *= norm;
    }
    out
}

fn time_difference_inverse(
    matrix: &CoefficientMatrix,
    scales: &[f64],
) -> Result<Vec<f64>, WaveletError> {
    use std::f64::consts::PI;
    let width = matrix.n_times();
    if width < 2 {
        return Err(WaveletError::SignalTooShort { len: width, min: 2 });
    }
    let rows = matrix.rows();
    let mut column = vec![0.0; rows.len()];
    let out = (0..width)
        .map(|t| {
            // The forward difference loses the last column; replicate it so
            // the output keeps the matrix width.
            let lo = t.min(width - 2);
            for (value, row) in column.iter_mut().zip(rows) {
                *value = row[lo + 1].im - row[lo].im;
            }
            2.0 * PI * trapezoid(scales, &column)
        })
        .collect();
    Ok(out)
}
