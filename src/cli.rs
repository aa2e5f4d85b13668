use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Aeolus wavelet sonification engine.
#[derive(Parser)]
#[command(
    name = "aeolus",
    version,
    about = "Pitch-preserving time stretching for scientific time-series audio"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a synthetic waveform, optionally stretch it, write a WAV.
    Simulate(SimulateArgs),
    /// Time-stretch a mono WAV file without changing its pitch.
    Stretch(StretchArgs),
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path for the output WAV file.
    #[arg(short, long, default_value = "aeolus.wav")]
    pub output: PathBuf,

    /// Waveform to generate: sine, harmonic, or sweep.
    #[arg(short, long, default_value = "sine")]
    pub waveform: String,

    /// Waveform frequency in cycles per second (sweep start frequency).
    #[arg(short, long, default_value_t = 25.0)]
    pub frequency: f64,

    /// Sweep end frequency in cycles per second.
    #[arg(long, default_value_t = 100.0)]
    pub end_frequency: f64,

    /// Sweep frequency progression: linear or logarithmic.
    #[arg(long, default_value = "linear")]
    pub sweep_mode: String,

    /// Harmonic amplitudes, one per integer multiple of the fundamental.
    #[arg(long, value_delimiter = ',', default_value = "1.0,0.5,0.25")]
    pub harmonics: Vec<f64>,

    /// Duration of the generated signal in seconds.
    #[arg(short, long, default_value_t = 10.0)]
    pub duration: f64,

    /// Sample rate of the generated signal in samples per second.
    #[arg(short, long, default_value_t = 100.0)]
    pub rate: f64,

    /// Time-stretch factor applied after generation.
    #[arg(short = 'x', long)]
    pub stretch: Option<f64>,

    /// Stretch strategy: wavelet or resample.
    #[arg(short, long, default_value = "wavelet")]
    pub method: String,

    /// Override inverse reconstruction formula from config.
    #[arg(long)]
    pub formula: Option<String>,

    /// Override scale ladder spacing from config.
    #[arg(long)]
    pub scale_spacing: Option<f64>,

    /// Override output sample rate from config.
    #[arg(long)]
    pub sample_rate: Option<u32>,
}

/// Arguments for the `stretch` subcommand.
#[derive(clap::Args)]
pub struct StretchArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to input WAV file (16-bit PCM, mono).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the output WAV file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Time-stretch factor.
    #[arg(short = 'x', long, default_value_t = 16.0)]
    pub factor: f64,

    /// Stretch strategy: wavelet or resample.
    #[arg(short, long, default_value = "wavelet")]
    pub method: String,

    /// Override inverse reconstruction formula from config.
    #[arg(long)]
    pub formula: Option<String>,

    /// Override scale ladder spacing from config.
    #[arg(long)]
    pub scale_spacing: Option<f64>,

    /// Override output sample rate; defaults to the input file's rate.
    #[arg(long)]
    pub sample_rate: Option<u32>,
}
