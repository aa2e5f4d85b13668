//! # aeolus-timebase
//!
//! Sample-time model for measurement series: float offsets in a duration
//! unit, anchored at an optional absolute origin.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["instants"] -->|"TimeSeries::from_instants()"| B["TimeSeries"]
//!     C["offsets + TimeUnit"] -->|"TimeSeries::from_offsets()"| B
//!     B -->|".change_unit()"| B
//!     B -->|".resample_evenly(f)"| B
//!     B -->|".instants()"| A
//!     B -->|".mean_interval()"| D["dt"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use aeolus_timebase::{TimeSeries, TimeUnit};
//!
//! // A relative series sampled every half second.
//! let mut ts = TimeSeries::from_offsets(vec![0.0, 0.5, 1.0, 1.5], TimeUnit::second())?;
//!
//! // Double the density across the same span.
//! ts.resample_evenly(2.0)?;
//! assert_eq!(ts.len(), 8);
//!
//! // Express the same instants in milliseconds.
//! ts.change_unit(TimeUnit::millisecond());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `unit` | Duration quantum for offset values |
//! | `series` | The time series itself: construction, conversion, resampling |
//! | `error` | Error types |

mod error;
mod series;
mod unit;

pub use error::TimebaseError;
pub use series::TimeSeries;
pub use unit::TimeUnit;
