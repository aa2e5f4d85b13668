//! # aeolus-audio
//!
//! The audio writeout boundary: peak normalization, stereo fold-down,
//! and 16-bit PCM WAV encoding via `hound`.
//!
//! The rest of the pipeline works in floating point; this crate is
//! where samples meet the container format. Writers sanitize on the way
//! out (NaN becomes silence, values are clamped to [-1, 1]) so a
//! degenerate reconstruction still produces a playable file.
//!
//! | Function | Role |
//! |----------|------|
//! | [`normalize`] | scale a vector so its peak magnitude hits a target |
//! | [`mix_to_stereo`] | fold three field components into a stereo pair |
//! | [`write_mono_wav`] | sanitize and encode one channel |
//! | [`write_stereo_wav`] | sanitize and encode a left/right pair |
//!
//! # Quick Start
//!
//! ```ignore
//! use aeolus_audio::{DEFAULT_SAMPLE_RATE, normalize, write_mono_wav};
//!
//! let mut samples = stretched.into_parts().1;
//! normalize(&mut samples, 1.0);
//! write_mono_wav(path, &samples, DEFAULT_SAMPLE_RATE)?;
//! ```

mod error;
mod gain;
mod mix;
mod wav;

pub use error::AudioError;
pub use gain::normalize;
pub use mix::mix_to_stereo;
pub use wav::{DEFAULT_SAMPLE_RATE, write_mono_wav, write_stereo_wav};
