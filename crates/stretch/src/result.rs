//! Result of a pitch shift or time stretch.

use aeolus_signal::MonoSignal;
use aeolus_wavelet::CoefficientMatrix;

/// Output of [`pitch_shift`](crate::pitch_shift) and
/// [`time_stretch`](crate::time_stretch).
///
/// Besides the rendered signal, the analysis state is kept: the scale
/// ladder, the raw coefficients and the phase-shifted coefficients, so a
/// caller can inspect the spectrum the output was synthesized from.
#[derive(Debug, Clone)]
pub struct ShiftResult {
    signal: MonoSignal,
    scales: Vec<f64>,
    coefficients: CoefficientMatrix,
    shifted: CoefficientMatrix,
}

impl ShiftResult {
    pub(crate) fn new(
        signal: MonoSignal,
        scales: Vec<f64>,
        coefficients: CoefficientMatrix,
        shifted: CoefficientMatrix,
    ) -> Self {
        Self {
            signal,
            scales,
            coefficients,
            shifted,
        }
    }

    /// Returns the synthesized signal.
    pub fn signal(&self) -> &MonoSignal {
        &self.signal
    }

    /// Returns the scale ladder the analysis ran over.
    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    /// Returns the raw coefficients of the forward transform, at the
    /// analysis width.
    pub fn coefficients(&self) -> &CoefficientMatrix {
        &self.coefficients
    }

    /// Returns the coefficients after interpolation and the phase multiply,
    /// the matrix the output was synthesized from.
    pub fn shifted_coefficients(&self) -> &CoefficientMatrix {
        &self.shifted
    }

    /// Consumes the result, returning the synthesized signal.
    pub fn into_signal(self) -> MonoSignal {
        self.signal
    }
}
