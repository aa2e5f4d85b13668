//! # aeolus-stretch
//!
//! Wavelet pitch shifting and pitch-preserving time stretching.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["MonoSignal"] -->|"time_stretch(&s, k, &config)?"| B["ShiftResult"]
//!     A -->|"pitch_shift(&s, &config)?"| B
//!     B --> C[".signal()"]
//!     B --> D[".coefficients()"]
//!     B --> E[".shifted_coefficients()"]
//!     B --> F[".scales()"]
//! ```
//!
//! ## Strategies
//!
//! | Method | Duration | Pitch |
//! |--------|----------|-------|
//! | [`StretchMethod::Resample`] | × factor | ÷ factor |
//! | [`StretchMethod::Wavelet`] | × factor | preserved |
//!
//! ## Quick Start
//!
//! ```ignore
//! use aeolus_stretch::{StretchConfig, time_stretch};
//!
//! let config = StretchConfig::new();
//! let result = time_stretch(&signal, 16.0, &config)?;
//! let audio = result.into_signal();
//! ```

mod config;
mod error;
mod method;
mod result;
mod shift;
mod stretch;

pub use config::{ShiftConfig, StretchConfig};
pub use error::StretchError;
pub use method::{StretchMethod, TimeStretcher};
pub use result::ShiftResult;
pub use shift::pitch_shift;
pub use stretch::time_stretch;
