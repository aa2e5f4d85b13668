//! # aeolus-simulate
//!
//! Synthetic waveform generation for demos and spectral tests.
//!
//! Every generator samples a closed-form expression on a caller-supplied
//! [`TimeSeries`](aeolus_timebase::TimeSeries) and returns a
//! [`MonoSignal`](aeolus_signal::MonoSignal) carrying a deep copy of that
//! axis. Frequencies are in cycles per unit of the axis, so an axis in
//! seconds makes them plain hertz.
//!
//! | Generator | Waveform |
//! |-----------|----------|
//! | [`sine`] | `amplitude * sin(2π f t + phase)` |
//! | [`harmonic`] | sum of integer-multiple sines of one fundamental |
//! | [`sweep`] | unit chirp, linear or logarithmic frequency trajectory |
//! | [`sine_expectation`] | the sine an ideal time-stretch of a sine would yield |
//!
//! # Quick Start
//!
//! ```ignore
//! use aeolus_simulate::{SweepMode, sine, sweep};
//! use aeolus_timebase::{TimeSeries, TimeUnit};
//!
//! let offsets = (0..800).map(|k| k as f64 / 100.0).collect();
//! let axis = TimeSeries::from_offsets(offsets, TimeUnit::second())?;
//! let tone = sine(&axis, 5.0, 1.0, 0.0)?;
//! let chirp = sweep(&axis, 2.0, 20.0, SweepMode::Logarithmic)?;
//! ```

mod error;
mod waveform;

pub use error::SimulateError;
pub use waveform::{SweepMode, harmonic, sine, sine_expectation, sweep};
