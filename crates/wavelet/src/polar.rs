//! Polar-form coefficient resampling.
//!
//! Interpolating magnitude and unwrapped phase separately keeps the
//! oscillatory structure of the coefficients intact, which direct
//! interpolation of the real and imaginary parts would smear.

use tracing::debug;

use aeolus_interp::{linspace, CubicSpline};

use crate::cwt::dimensions;
use crate::error::WaveletError;

/// Resamples magnitude and phase matrices along the time axis by `factor`.
///
/// Each row is fitted with a natural cubic spline over a unit parameter grid
/// and re-evaluated on a grid of `floor(width * factor)` points, so a factor
/// above one stretches the coefficient history and a factor below one
/// contracts it. Row count is unchanged.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::InvalidParameter`] | non-positive factor, or a factor that rounds the width to zero |
/// | [`WaveletError::EmptyMatrix`] | empty input matrices |
/// | [`WaveletError::RaggedMatrix`] | rows of unequal length |
/// | [`WaveletError::PolarShapeMismatch`] | magnitude and phase shapes disagree |
/// | [`WaveletError::Interp`] | a row cannot be spline-fitted |
pub fn interpolate_polar(
    magnitude: &[Vec<f64>],
    phase: &[Vec<f64>],
    factor: f64,
) -> Result<(Vec<Vec<f64>>, Vec<Vec<f64>>), WaveletError> {
    if !(factor > 0.0 && factor.is_finite()) {
        return Err(WaveletError::InvalidParameter(format!(
            "interpolation factor {factor} is not positive"
        )));
    }
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
    let new_width = (magnitude_cols as f64 * factor).floor() as usize;
    if new_width == 0 {
        return Err(WaveletError::InvalidParameter(format!(
            "interpolation factor {factor} produces an empty matrix"
        )));
    }
    debug!(
        rows = magnitude_rows,
        from = magnitude_cols,
        to = new_width,
        "resampling polar coefficients"
    );

    let old_grid = linspace(0.0, 1.0, magnitude_cols);
    let new_grid = linspace(0.0, 1.0, new_width);
    let resample = |rows: &[Vec<f64>]| -> Result<Vec<Vec<f64>>, WaveletError> {
        rows.iter()
            .map(|row| {
                let spline = CubicSpline::fit(&old_grid, row)?;
                Ok(spline.evaluate_many(&new_grid))
            })
            .collect()
    };
    Ok((resample(magnitude)?, resample(phase)?))
}
