//! 16-bit PCM WAV writeout via `hound`.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use tracing::debug;

use crate::error::AudioError;

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Writes `samples` as a 16-bit PCM mono WAV file.
///
/// Samples are sanitized on the way out: NaN becomes silence and values
/// are clamped to [-1, 1] before integer conversion.
///
/// # Errors
///
/// Returns [`AudioError::Wav`] if the encoder or the underlying file
/// I/O fails.
pub fn write_mono_wav(path: &Path, samples: &[f64], sample_rate: u32) -> Result<(), AudioError> {
    let mut writer = WavWriter::create(path, spec(1, sample_rate))?;
    for &v in samples {
        writer.write_sample(pcm_sample(v))?;
    }
    writer.finalize()?;
    debug!(path = %path.display(), samples = samples.len(), sample_rate, "wrote mono wav");
    Ok(())
}

/// Writes a left/right pair as a 16-bit PCM stereo WAV file, with the
/// same sanitization as [`write_mono_wav`].
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`AudioError::ChannelLengthMismatch`] | the channels differ in length |
/// | [`AudioError::Wav`] | the encoder or the underlying file I/O fails |
pub fn write_stereo_wav(
    path: &Path,
    left: &[f64],
    right: &[f64],
    sample_rate: u32,
) -> Result<(), AudioError> {
    if left.len() != right.len() {
        return Err(AudioError::ChannelLengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    let mut writer = WavWriter::create(path, spec(2, sample_rate))?;
    for (&l, &r) in left.iter().zip(right) {
        writer.write_sample(pcm_sample(l))?;
        writer.write_sample(pcm_sample(r))?;
    }
    writer.finalize()?;
    debug!(path = %path.display(), frames = left.len(), sample_rate, "wrote stereo wav");
    Ok(())
}

fn spec(channels: u16, sample_rate: u32) -> WavSpec {
    WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Converts one sample to 16-bit PCM: NaN becomes silence, everything
/// else is clamped to [-1, 1] and scaled to the symmetric i16 range.
fn pcm_sample(v: f64) -> i16 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(-1.0, 1.0) * 32767.0) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcm_sample_scales_and_clamps() {
        assert_eq!(pcm_sample(0.0), 0);
        assert_eq!(pcm_sample(1.0), 32767);
        assert_eq!(pcm_sample(-1.0), -32767);
        assert_eq!(pcm_sample(1.5), 32767);
        assert_eq!(pcm_sample(-1.5), -32767);
        assert_eq!(pcm_sample(0.5), 16383);
    }

    #[test]
    fn pcm_sample_silences_nan_and_clamps_infinities() {
        assert_eq!(pcm_sample(f64::NAN), 0);
        assert_eq!(pcm_sample(f64::INFINITY), 32767);
        assert_eq!(pcm_sample(f64::NEG_INFINITY), -32767);
    }

    #[test]
    fn stereo_rejects_mismatched_channels() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("bad.wav");
        let err =
            write_stereo_wav(&path, &[0.0, 0.1], &[0.0], DEFAULT_SAMPLE_RATE).unwrap_err();
        assert_eq!(err, AudioError::ChannelLengthMismatch { left: 2, right: 1 });
    }
}
