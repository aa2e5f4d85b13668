//! Configuration for the pitch shifter and the time stretcher.

use aeolus_wavelet::InverseFormula;

use crate::error::StretchError;

/// Configuration for [`pitch_shift`](crate::pitch_shift).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use aeolus_stretch::ShiftConfig;
///
/// let config = ShiftConfig::new()
///     .with_shift(2.0)
///     .with_scale_spacing(0.125);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ShiftConfig {
    shift: f64,
    scale_spacing: f64,
    interpolate: Option<f64>,
    max_kernel_samples: usize,
    formula: InverseFormula,
}

impl ShiftConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `shift = 1.0`, `scale_spacing = 0.125`,
    /// `interpolate = None`, `max_kernel_samples = 1200`,
    /// `formula = Admissibility`.
    pub fn new() -> Self {
        Self {
            shift: 1.0,
            scale_spacing: 0.125,
            interpolate: None,
            max_kernel_samples: 1200,
            formula: InverseFormula::Admissibility,
        }
    }

    /// Sets the phase multiplier. Values above one raise the pitch.
    pub fn with_shift(mut self, shift: f64) -> Self {
        self.shift = shift;
        self
    }

    /// Sets the fractional octave spacing of the scale ladder.
    pub fn with_scale_spacing(mut self, spacing: f64) -> Self {
        self.scale_spacing = spacing;
        self
    }

    /// Sets the coefficient interpolation factor applied before the phase
    /// multiply.
    pub fn with_interpolate(mut self, factor: f64) -> Self {
        self.interpolate = Some(factor);
        self
    }

    /// Sets the cap on the kernel width of the largest scale, in samples.
    pub fn with_max_kernel_samples(mut self, samples: usize) -> Self {
        self.max_kernel_samples = samples;
        self
    }

    /// Sets the reconstruction formula.
    pub fn with_formula(mut self, formula: InverseFormula) -> Self {
        self.formula = formula;
        self
    }

    // --- Accessors ---

    /// Returns the phase multiplier.
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Returns the fractional octave spacing.
    pub fn scale_spacing(&self) -> f64 {
        self.scale_spacing
    }

    /// Returns the coefficient interpolation factor, if set.
    pub fn interpolate(&self) -> Option<f64> {
        self.interpolate
    }

    /// Returns the kernel width cap in samples.
    pub fn max_kernel_samples(&self) -> usize {
        self.max_kernel_samples
    }

    /// Returns the reconstruction formula.
    pub fn formula(&self) -> InverseFormula {
        self.formula
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), StretchError> {
        if !self.shift.is_finite() || self.shift <= 0.0 {
            return Err(StretchError::InvalidConfig {
                reason: format!("shift must be finite and positive, got {}", self.shift),
            });
        }
        if !self.scale_spacing.is_finite() || self.scale_spacing <= 0.0 {
            return Err(StretchError::InvalidConfig {
                reason: format!(
                    "scale_spacing must be finite and positive, got {}",
                    self.scale_spacing
                ),
            });
        }
        if let Some(factor) = self.interpolate {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(StretchError::InvalidConfig {
                    reason: format!(
                        "interpolate factor must be finite and positive, got {factor}"
                    ),
                });
            }
        }
        if self.max_kernel_samples < 2 {
            return Err(StretchError::InvalidConfig {
                reason: format!(
                    "max_kernel_samples must be >= 2, got {}",
                    self.max_kernel_samples
                ),
            });
        }
        Ok(())
    }
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for [`time_stretch`](crate::time_stretch).
///
/// The stretch factor itself is an argument of the call; this type carries
/// the analysis parameters around it. When neither interpolation knob is
/// set, the coefficient interpolation defaults to the stretch factor, which
/// is what multiplies the duration.
#[derive(Debug, Clone)]
pub struct StretchConfig {
    scale_spacing: f64,
    interpolate_before: Option<f64>,
    interpolate_after: Option<f64>,
    max_kernel_samples: usize,
    formula: InverseFormula,
}

impl StretchConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `scale_spacing = 0.12`, `interpolate_before = None`,
    /// `interpolate_after = None`, `max_kernel_samples = 1200`,
    /// `formula = Admissibility`.
    pub fn new() -> Self {
        Self {
            scale_spacing: 0.12,
            interpolate_before: None,
            interpolate_after: None,
            max_kernel_samples: 1200,
            formula: InverseFormula::Admissibility,
        }
    }

    /// Sets the fractional octave spacing of the scale ladder.
    pub fn with_scale_spacing(mut self, spacing: f64) -> Self {
        self.scale_spacing = spacing;
        self
    }

    /// Sets a signal resampling factor applied before the analysis.
    pub fn with_interpolate_before(mut self, factor: f64) -> Self {
        self.interpolate_before = Some(factor);
        self
    }

    /// Sets the coefficient interpolation factor applied between analysis
    /// and synthesis.
    pub fn with_interpolate_after(mut self, factor: f64) -> Self {
        self.interpolate_after = Some(factor);
        self
    }

    /// Sets the cap on the kernel width of the largest scale, in samples.
    pub fn with_max_kernel_samples(mut self, samples: usize) -> Self {
        self.max_kernel_samples = samples;
        self
    }

    /// Sets the reconstruction formula.
    pub fn with_formula(mut self, formula: InverseFormula) -> Self {
        self.formula = formula;
        self
    }

    // --- Accessors ---

    /// Returns the fractional octave spacing.
    pub fn scale_spacing(&self) -> f64 {
        self.scale_spacing
    }

    /// Returns the pre-analysis resampling factor, if set.
    pub fn interpolate_before(&self) -> Option<f64> {
        self.interpolate_before
    }

    /// Returns the coefficient interpolation factor, if set.
    pub fn interpolate_after(&self) -> Option<f64> {
        self.interpolate_after
    }

    /// Returns the kernel width cap in samples.
    pub fn max_kernel_samples(&self) -> usize {
        self.max_kernel_samples
    }

    /// Returns the reconstruction formula.
    pub fn formula(&self) -> InverseFormula {
        self.formula
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), StretchError> {
        if !self.scale_spacing.is_finite() || self.scale_spacing <= 0.0 {
            return Err(StretchError::InvalidConfig {
                reason: format!(
                    "scale_spacing must be finite and positive, got {}",
                    self.scale_spacing
                ),
            });
        }
        for (name, knob) in [
            ("interpolate_before", self.interpolate_before),
            ("interpolate_after", self.interpolate_after),
        ] {
            if let Some(factor) = knob {
                if !factor.is_finite() || factor <= 0.0 {
                    return Err(StretchError::InvalidConfig {
                        reason: format!("{name} must be finite and positive, got {factor}"),
                    });
                }
            }
        }
        if self.max_kernel_samples < 2 {
            return Err(StretchError::InvalidConfig {
                reason: format!(
                    "max_kernel_samples must be >= 2, got {}",
                    self.max_kernel_samples
                ),
            });
        }
        Ok(())
    }
}

impl Default for StretchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_defaults() {
        let cfg = ShiftConfig::new();
        assert!((cfg.shift() - 1.0).abs() < f64::EPSILON);
        assert!((cfg.scale_spacing() - 0.125).abs() < f64::EPSILON);
        assert_eq!(cfg.interpolate(), None);
        assert_eq!(cfg.max_kernel_samples(), 1200);
        assert_eq!(cfg.formula(), InverseFormula::Admissibility);
    }

    #[test]
    fn shift_builder_chaining() {
        let cfg = ShiftConfig::new()
            .with_shift(4.0)
            .with_scale_spacing(0.1)
            .with_interpolate(2.0)
            .with_max_kernel_samples(600)
            .with_formula(InverseFormula::TimeDifference);
        assert!((cfg.shift() - 4.0).abs() < f64::EPSILON);
        assert!((cfg.scale_spacing() - 0.1).abs() < f64::EPSILON);
        assert_eq!(cfg.interpolate(), Some(2.0));
        assert_eq!(cfg.max_kernel_samples(), 600);
        assert_eq!(cfg.formula(), InverseFormula::TimeDifference);
    }

    #[test]
    fn shift_validate_ok() {
        assert!(ShiftConfig::new().validate().is_ok());
    }

    #[test]
    fn shift_validate_bad_shift() {
        assert!(ShiftConfig::new().with_shift(0.0).validate().is_err());
        assert!(ShiftConfig::new().with_shift(-1.0).validate().is_err());
        assert!(ShiftConfig::new().with_shift(f64::NAN).validate().is_err());
    }

    #[test]
    fn shift_validate_bad_spacing() {
        assert!(ShiftConfig::new().with_scale_spacing(0.0).validate().is_err());
        assert!(
            ShiftConfig::new()
                .with_scale_spacing(f64::INFINITY)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn shift_validate_bad_interpolate() {
        assert!(ShiftConfig::new().with_interpolate(0.0).validate().is_err());
        assert!(
            ShiftConfig::new()
                .with_interpolate(f64::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn shift_validate_bad_kernel_cap() {
        assert!(
            ShiftConfig::new()
                .with_max_kernel_samples(1)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn stretch_defaults() {
        let cfg = StretchConfig::new();
        assert!((cfg.scale_spacing() - 0.12).abs() < f64::EPSILON);
        assert_eq!(cfg.interpolate_before(), None);
        assert_eq!(cfg.interpolate_after(), None);
        assert_eq!(cfg.max_kernel_samples(), 1200);
        assert_eq!(cfg.formula(), InverseFormula::Admissibility);
    }

    #[test]
    fn stretch_builder_chaining() {
        let cfg = StretchConfig::new()
            .with_scale_spacing(0.125)
            .with_interpolate_before(0.5)
            .with_interpolate_after(16.0)
            .with_max_kernel_samples(2400)
            .with_formula(InverseFormula::TimeDifference);
        assert!((cfg.scale_spacing() - 0.125).abs() < f64::EPSILON);
        assert_eq!(cfg.interpolate_before(), Some(0.5));
        assert_eq!(cfg.interpolate_after(), Some(16.0));
        assert_eq!(cfg.max_kernel_samples(), 2400);
        assert_eq!(cfg.formula(), InverseFormula::TimeDifference);
    }

    #[test]
    fn stretch_validate_bad_knobs() {
        assert!(
            StretchConfig::new()
                .with_scale_spacing(-0.1)
                .validate()
                .is_err()
        );
        assert!(
            StretchConfig::new()
                .with_interpolate_before(0.0)
                .validate()
                .is_err()
        );
        assert!(
            StretchConfig::new()
                .with_interpolate_after(f64::NAN)
                .validate()
                .is_err()
        );
        assert!(
            StretchConfig::new()
                .with_max_kernel_samples(0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn default_matches_new() {
        assert!((ShiftConfig::default().shift() - ShiftConfig::new().shift()).abs() < f64::EPSILON);
        assert!(
            (StretchConfig::default().scale_spacing() - StretchConfig::new().scale_spacing()).abs()
                < f64::EPSILON
        );
    }
}
