//! # aeolus-signal
//!
//! Numeric signal containers bound to a shared time axis: the multi-channel
//! [`Signal`] and its single-channel specialization [`MonoSignal`], the shape
//! the stretch and audio stages consume.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["TimeSeries"] --> B["Signal"]
//!     B -->|".extract(key)"| C["MonoSignal"]
//!     B -->|".running_average(w)"| B
//!     B -->|".resample_factor(f)"| B
//!     B -->|".resample_to(ref)"| B
//!     C -->|".replace(axis, samples)"| C
//! ```
//!
//! Channel data never aliases: construction, extraction and cloning all
//! deep-copy, so mutating one signal cannot disturb another.
//!
//! ## Quick Start
//!
//! ```ignore
//! use aeolus_signal::{MonoSignal, Signal};
//! use aeolus_timebase::{TimeSeries, TimeUnit};
//!
//! let axis = TimeSeries::from_offsets(vec![0.0, 1.0, 2.0], TimeUnit::second())?;
//! let mut field = Signal::from_components(axis, vec![
//!     vec![1.0, f64::NAN, 3.0],
//!     vec![0.5, 0.6, 0.7],
//!     vec![0.0, 0.0, 0.1],
//! ])?;
//!
//! field.fill_nan(0.0);
//! field.remove_duplicate_offsets()?;
//! let mut mono: MonoSignal = field.extract(0usize)?;
//! mono.normalize(1.0);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `channel` | Channel keys: vector components and named fields |
//! | `signal` | Multi-channel container and its operations |
//! | `mono` | Single-channel specialization |
//! | `smooth` | Box-filter running averages |
//! | `resample` | Axis rebuilding and spline regridding helpers |
//! | `error` | Error types |

mod channel;
mod error;
mod mono;
mod resample;
mod signal;
mod smooth;

pub use channel::ChannelKey;
pub use error::SignalError;
pub use mono::MonoSignal;
pub use signal::Signal;
