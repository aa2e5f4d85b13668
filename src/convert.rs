//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use crate::config::StretchToml;

// Import crate types
use aeolus_simulate::SweepMode;
use aeolus_stretch::{StretchConfig, StretchMethod};
use aeolus_wavelet::InverseFormula;

/// Waveform selection for the `simulate` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Harmonic,
    Sweep,
}

/// Parses a waveform name string into the corresponding enum variant.
pub fn parse_waveform(s: &str) -> Result<Waveform> {
    match s.to_lowercase().as_str() {
        "sine" => Ok(Waveform::Sine),
        "harmonic" => Ok(Waveform::Harmonic),
        "sweep" => Ok(Waveform::Sweep),
        other => bail!("unknown waveform: {other:?}"),
    }
}

/// Parses a sweep mode name string into the corresponding enum variant.
pub fn parse_sweep_mode(s: &str) -> Result<SweepMode> {
    match s.to_lowercase().as_str() {
        "linear" => Ok(SweepMode::Linear),
        "logarithmic" | "log" => Ok(SweepMode::Logarithmic),
        other => bail!("unknown sweep mode: {other:?}"),
    }
}

/// Parses an inverse formula name string into the corresponding enum variant.
pub fn parse_formula(s: &str) -> Result<InverseFormula> {
    match s.to_lowercase().as_str() {
        "admissibility" => Ok(InverseFormula::Admissibility),
        "time-difference" | "time_difference" => Ok(InverseFormula::TimeDifference),
        other => bail!("unknown inverse formula: {other:?}"),
    }
}

/// Builds a [`StretchConfig`] from the TOML stretch configuration.
pub fn build_stretch_config(stretch: &StretchToml) -> Result<StretchConfig> {
    let formula = parse_formula(&stretch.formula)?;
    let mut cfg = StretchConfig::new()
        .with_scale_spacing(stretch.scale_spacing)
        .with_max_kernel_samples(stretch.max_kernel_samples)
        .with_formula(formula);
    if let Some(factor) = stretch.interpolate_before {
        cfg = cfg.with_interpolate_before(factor);
    }
    if let Some(factor) = stretch.interpolate_after {
        cfg = cfg.with_interpolate_after(factor);
    }
    Ok(cfg)
}

/// Builds a [`StretchMethod`] from a strategy name and the TOML stretch
/// configuration. The configuration only feeds the wavelet strategy.
pub fn build_method(name: &str, stretch: &StretchToml) -> Result<StretchMethod> {
    match name.to_lowercase().as_str() {
        "resample" => Ok(StretchMethod::Resample),
        "wavelet" => Ok(StretchMethod::Wavelet(build_stretch_config(stretch)?)),
        other => bail!("unknown stretch method: {other:?}"),
    }
}
