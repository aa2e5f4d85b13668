use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Aeolus configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AeolusConfig {
    /// Stretch engine settings.
    #[serde(default)]
    pub stretch: StretchToml,

    /// Audio writeout settings.
    #[serde(default)]
    pub audio: AudioToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StretchToml {
    #[serde(default = "default_scale_spacing")]
    pub scale_spacing: f64,
    #[serde(default = "default_max_kernel_samples")]
    pub max_kernel_samples: usize,
    #[serde(default = "default_formula")]
    pub formula: String,
    #[serde(default)]
    pub interpolate_before: Option<f64>,
    #[serde(default)]
    pub interpolate_after: Option<f64>,
}

impl Default for StretchToml {
    fn default() -> Self {
        Self {
            scale_spacing: default_scale_spacing(),
            max_kernel_samples: default_max_kernel_samples(),
            formula: default_formula(),
            interpolate_before: None,
            interpolate_after: None,
        }
    }
}

fn default_scale_spacing() -> f64 {
    0.12
}
fn default_max_kernel_samples() -> usize {
    1200
}
fn default_formula() -> String {
    "admissibility".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AudioToml {
    /// Output sample rate in Hz. When unset, simulate writes at 44100 and
    /// stretch keeps the input file's rate.
    #[serde(default)]
    pub sample_rate: Option<u32>,
    #[serde(default = "default_peak_amplitude")]
    pub peak_amplitude: f64,
}

impl Default for AudioToml {
    fn default() -> Self {
        Self {
            sample_rate: None,
            peak_amplitude: default_peak_amplitude(),
        }
    }
}

fn default_peak_amplitude() -> f64 {
    1.0
}

/// Loads the configuration from `path`, or falls back to defaults when no
/// path was given.
pub fn load(path: Option<&Path>) -> Result<AeolusConfig> {
    let Some(path) = path else {
        return Ok(AeolusConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse configuration TOML")
}
