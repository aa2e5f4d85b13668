//! Stretch command: time-stretch a mono WAV file without changing its pitch.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use aeolus_audio::write_mono_wav;
use aeolus_signal::MonoSignal;
use aeolus_stretch::TimeStretcher;
use aeolus_timebase::{TimeSeries, TimeUnit};

use crate::cli::StretchArgs;
use crate::config;
use crate::convert;

/// Run the stretch pipeline.
pub fn run(args: StretchArgs) -> Result<()> {
    let _cmd = info_span!("stretch").entered();
    // 1. Validate the stretch factor
    if !args.factor.is_finite() || args.factor <= 0.0 {
        bail!("stretch factor must be positive, got {}", args.factor);
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

    // 3. Read the input WAV
    let mut reader = hound::WavReader::open(&args.input)
        .with_context(|| format!("failed to open WAV: {}", args.input.display()))?;
    let spec = reader.spec();
    if spec.channels != 1 {
        bail!("expected a mono input, got {} channels", spec.channels);
    }
    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        bail!(
            "only 16-bit PCM input is supported, got {}-bit {:?}",
            spec.bits_per_sample,
            spec.sample_format
        );
    }
    let raw: Vec<i16> = reader
        .samples::<i16>()
        .collect::<Result<_, _>>()
        .with_context(|| format!("failed to decode WAV: {}", args.input.display()))?;
    if raw.len() < 2 {
        bail!("input has {} samples, need at least 2", raw.len());
    }
    info!(
        samples = raw.len(),
        sample_rate = spec.sample_rate,
        "input read"
    );

    // 4. Build the signal on a seconds axis
    let rate = f64::from(spec.sample_rate);
    let offsets: Vec<f64> = (0..raw.len()).map(|i| i as f64 / rate).collect();
    let samples: Vec<f64> = raw.iter().map(|&s| f64::from(s) / 32767.0).collect();
    let axis = TimeSeries::from_offsets(offsets, TimeUnit::second())
        .context("failed to build the time axis")?;
    let mut signal = MonoSignal::new(axis, samples).context("failed to build the signal")?;

    // 5. Stretch
    let method = convert::build_method(&args.method, &stretch_toml)?;
    signal = method
        .stretch(&signal, args.factor)
        .with_context(|| format!("failed to stretch by {}", args.factor))?;
    info!(samples = signal.len(), factor = args.factor, "signal stretched");

    // 6. Normalize and write the WAV file
    signal.normalize(config.audio.peak_amplitude);
    let sample_rate = args
        .sample_rate
        .or(config.audio.sample_rate)
        .unwrap_or(spec.sample_rate);
    write_mono_wav(&args.output, signal.samples(), sample_rate)
        .with_context(|| format!("failed to write WAV: {}", args.output.display()))?;
    info!(path = %args.output.display(), sample_rate, "audio written");

    Ok(())
}
