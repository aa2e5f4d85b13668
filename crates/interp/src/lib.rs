//! Interpolation and quadrature primitives shared across the Aeolus crates.
//!
//! The sonification pipeline resamples unevenly sampled measurements, densifies
//! wavelet coefficient rows, and integrates coefficient columns over the scale
//! axis. This crate holds the numeric kernels those operations share:
//!
//! - [`CubicSpline`] — natural cubic spline over strictly increasing knots,
//!   with boundary-polynomial extrapolation just beyond the data range.
//! - [`linspace`] — inclusive evenly spaced grids.
//! - [`trapezoid`] — trapezoidal quadrature over unevenly spaced samples.
//!
//! # Quick start
//!
//! ```ignore
//! use aeolus_interp::{CubicSpline, linspace};
//!
//! let xs = linspace(0.0, 1.0, 5);
//! let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
//! let spline = CubicSpline::fit(&xs, &ys).unwrap();
//! let mid = spline.evaluate(0.375);
//! assert!((mid - 0.140625).abs() < 0.01);
//! ```

pub mod error;
pub mod grid;
pub mod spline;

pub use error::InterpError;
pub use grid::{linspace, trapezoid};
pub use spline::CubicSpline;
