//! # aeolus-wavelet
//!
//! Continuous wavelet analysis for pitch-preserving time stretching.
//!
//! ## Analysis Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["samples"] -->|"scale_ladder(...)?"| B["scales"]
//!     A -->|"cwt(...)?"| C["CoefficientMatrix"]
//!     C --> D[".magnitude()"]
//!     C --> E[".unwrapped_phase()"]
//!     D -->|"interpolate_polar(...)?"| F["CoefficientMatrix::from_polar(...)?"]
//!     E -->|"interpolate_polar(...)?"| F
//!     F -->|"icwt(...)?"| G["samples"]
//! ```
//!
//! ## Inverse Formulas
//!
//! | Formula | Basis | Amplitude |
//! |---------|-------|-----------|
//! | [`InverseFormula::Admissibility`] | Torrence & Compo (1998) delta reconstruction | calibrated |
//! | [`InverseFormula::TimeDifference`] | Postnikov, Lebedeva & Lavrova (2015) integral | formula-dependent gain |
//!
//! ## Quick Start
//!
//! ```ignore
//! use aeolus_wavelet::{InverseFormula, Morlet, cwt, icwt, scale_ladder};
//!
//! let scales = scale_ladder(1200, samples.len(), 0.125, 1.0, &Morlet)?;
//! let matrix = cwt(&samples, &scales, 1.0, &Morlet)?;
//! let rebuilt = icwt(
//!     &matrix,
//!     &scales,
//!     0.125,
//!     1.0,
//!     InverseFormula::Admissibility,
//!     &Morlet,
//! )?;
//! ```

mod cwt;
mod error;
mod icwt;
mod morlet;
mod polar;
mod scales;

pub use cwt::{CoefficientMatrix, cwt};
pub use error::WaveletError;
pub use icwt::{InverseFormula, icwt};
pub use morlet::{Morlet, Wavelet};
pub use polar::interpolate_polar;
pub use scales::scale_ladder;
