//! Simulate command: generate a synthetic waveform and render it as audio.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use aeolus_audio::{DEFAULT_SAMPLE_RATE, write_mono_wav};
use aeolus_signal::MonoSignal;
use aeolus_simulate::{harmonic, sine, sweep};
use aeolus_stretch::TimeStretcher;
use aeolus_timebase::{TimeSeries, TimeUnit};

use crate::cli::SimulateArgs;
use crate::config;
use crate::convert::{self, Waveform};

/// Run the simulation pipeline.
pub fn run(args: SimulateArgs) -> Result<()> {
    let _cmd = info_span!("simulate").entered();
    // 1. Validate the sampling grid
    if !args.duration.is_finite() || args.duration <= 0.0 {
        bail!("duration must be positive, got {}", args.duration);
    }
    if !args.rate.is_finite() || args.rate <= 0.0 {
        bail!("rate must be positive, got {}", args.rate);
    }
    let n_samples = (args.duration * args.rate).round() as usize;
    if n_samples < 2 {
        bail!(
            "{} s at {} samples/s yields {} samples, need at least 2",
            args.duration,
            args.rate,
            n_samples
        );
    }

    // 2. Load TOML config and merge CLI overrides
    let config = config::load(args.config.as_deref())?;
    let mut stretch_toml = config.stretch;
    if let Some(spacing) = args.scale_spacing {
        stretch_toml.scale_spacing = spacing;
    }
    if let Some(ref formula) = args.formula {
        stretch_toml.formula = formula.clone();
    }
    if !config.audio.peak_amplitude.is_finite() || config.audio.peak_amplitude <= 0.0 {
        bail!(
            "peak_amplitude must be positive, got {}",
            config.audio.peak_amplitude
        );
    }

    // 3. Build the time axis and generate the waveform
    let offsets: Vec<f64> = (0..n_samples).map(|i| i as f64 / args.rate).collect();
    let axis = TimeSeries::from_offsets(offsets, TimeUnit::second())
        .context("failed to build the time axis")?;
    let mut signal = generate(&axis, &args).context("failed to generate the waveform")?;
    info!(
        waveform = %args.waveform,
        samples = signal.len(),
        "waveform generated"
    );

    // 4. Stretch when a factor was requested
    if let Some(factor) = args.stretch {
        let method = convert::build_method(&args.method, &stretch_toml)?;
        signal = method
            .stretch(&signal, factor)
            .with_context(|| format!("failed to stretch by {factor}"))?;
        info!(samples = signal.len(), factor, "signal stretched");
    }

    // 5. Normalize to the target peak
    signal.normalize(config.audio.peak_amplitude);

    // 6. Write the WAV file
    let sample_rate = args
        .sample_rate
        .or(config.audio.sample_rate)
        .unwrap_or(DEFAULT_SAMPLE_RATE);
    write_mono_wav(&args.output, signal.samples(), sample_rate)
        .with_context(|| format!("failed to write WAV: {}", args.output.display()))?;
    info!(path = %args.output.display(), sample_rate, "audio written");

    Ok(())
}

/// Generate the requested waveform on `axis`.
fn generate(axis: &TimeSeries, args: &SimulateArgs) -> Result<MonoSignal> {
    let signal = match convert::parse_waveform(&args.waveform)? {
        Waveform::Sine => sine(axis, args.frequency, 1.0, 0.0)?,
        Waveform::Harmonic => harmonic(axis, args.frequency, &args.harmonics)?,
        Waveform::Sweep => {
            let mode = convert::parse_sweep_mode(&args.sweep_mode)?;
            sweep(axis, args.frequency, args.end_frequency, mode)?
        }
    };
    Ok(signal)
}
