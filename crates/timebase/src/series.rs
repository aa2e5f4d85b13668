//! Sample-time model: float offsets in a duration unit, with an optional
//! absolute origin.

use chrono::{DateTime, Duration, Utc};

use crate::error::TimebaseError;
use crate::unit::TimeUnit;

/// Sample times of a signal, stored as float offsets in a [`TimeUnit`]
/// relative to an optional absolute origin instant.
///
/// Offsets are non-decreasing and finite; both invariants are checked at
/// construction. A series built without an origin supports every
/// operation except conversion to absolute instants.
///
/// # Example
///
/// ```ignore
/// use aeolus_timebase::{TimeSeries, TimeUnit};
///
/// let ts = TimeSeries::from_offsets(vec![0.0, 1.0, 2.0], TimeUnit::second())?;
/// assert_eq!(ts.len(), 3);
/// assert_eq!(ts.mean_interval()?, 2.0 / 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct TimeSeries {
    offsets: Vec<f64>,
    unit: TimeUnit,
    origin: Option<DateTime<Utc>>,
}

impl TimeSeries {
    /// Creates a relative series (no origin) from offsets in `unit`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`TimebaseError::NonFiniteOffset`] | any offset is NaN or infinite |
    /// | [`TimebaseError::NonMonotonic`] | offsets decrease |
    pub fn from_offsets(offsets: Vec<f64>, unit: TimeUnit) -> Result<Self, TimebaseError> {
        validate_offsets(&offsets)?;
        Ok(Self {
            offsets,
            unit,
            origin: None,
        })
    }

    /// Creates a series whose offsets are anchored at an absolute origin.
    ///
    /// # Errors
    ///
    /// Same validation as [`TimeSeries::from_offsets`].
    pub fn from_offsets_with_origin(
        offsets: Vec<f64>,
        unit: TimeUnit,
        origin: DateTime<Utc>,
    ) -> Result<Self, TimebaseError> {
        validate_offsets(&offsets)?;
        Ok(Self {
            offsets,
            unit,
            origin: Some(origin),
        })
    }

    /// Creates a series from absolute instants.
    ///
    /// The first instant becomes the origin; offsets are the distances
    /// from it expressed in `unit`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`TimebaseError::EmptySeries`] | `instants` is empty |
    /// | [`TimebaseError::NonMonotonic`] | instants decrease |
    pub fn from_instants(
        instants: &[DateTime<Utc>],
        unit: TimeUnit,
    ) -> Result<Self, TimebaseError> {
        let origin = *instants.first().ok_or(TimebaseError::EmptySeries)?;
        let unit_nanos = unit.nanos() as f64;
        let offsets: Vec<f64> = instants
            .iter()
            .map(|t| (*t - origin).num_nanoseconds().unwrap_or(i64::MAX) as f64 / unit_nanos)
            .collect();
        validate_offsets(&offsets)?;
        Ok(Self {
            offsets,
            unit,
            origin: Some(origin),
        })
    }

    /// Creates an even grid of `count` instants spanning `[start, end]`,
    /// endpoints included, with origin `start` and offsets in `unit`.
    ///
    /// # Errors
    ///
    /// Returns [`TimebaseError::InvertedRange`] if `end < start`.
    pub fn evenly_spaced(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        unit: TimeUnit,
        count: usize,
    ) -> Result<Self, TimebaseError> {
        if end < start {
            return Err(TimebaseError::InvertedRange { start, end });
        }
        let span = (end - start).num_nanoseconds().unwrap_or(i64::MAX) as f64 / unit.nanos() as f64;
        Ok(Self {
            offsets: linspace(0.0, span, count),
            unit,
            origin: Some(start),
        })
    }

    /// Creates a grid of instants every `spacing` from `start`, up to and
    /// including the last multiple that fits in `[start, end]`, with
    /// origin `start` and offsets in `unit`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`TimebaseError::InvertedRange`] | `end < start` |
    /// | [`TimebaseError::InvalidSpacing`] | `spacing` is zero or negative |
    pub fn with_spacing(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        unit: TimeUnit,
        spacing: Duration,
    ) -> Result<Self, TimebaseError> {
        if end < start {
            return Err(TimebaseError::InvertedRange { start, end });
        }
        let spacing_nanos = spacing.num_nanoseconds().unwrap_or(0);
        if spacing_nanos <= 0 {
            return Err(TimebaseError::InvalidSpacing {
                nanos: spacing_nanos,
            });
        }
        let span_nanos = (end - start).num_nanoseconds().unwrap_or(i64::MAX);
        let steps = (span_nanos as f64 / spacing_nanos as f64).floor() as usize;
        let spacing_units = spacing_nanos as f64 / unit.nanos() as f64;
        let offsets = (0..=steps).map(|k| k as f64 * spacing_units).collect();
        Ok(Self {
            offsets,
            unit,
            origin: Some(start),
        })
    }

    /// Returns the offsets as floats in the current unit.
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Returns the duration unit.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Returns the origin instant, if known.
    pub fn origin(&self) -> Option<DateTime<Utc>> {
        self.origin
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Returns each sample's distance from the origin as a duration,
    /// rounded to nanosecond resolution.
    pub fn as_durations(&self) -> Vec<Duration> {
        self.offsets
            .iter()
            .map(|&off| self.unit.offset_duration(off))
            .collect()
    }

    /// Returns each sample as an absolute instant.
    ///
    /// # Errors
    ///
    /// Returns [`TimebaseError::NoOrigin`] if the series has no origin.
    pub fn instants(&self) -> Result<Vec<DateTime<Utc>>, TimebaseError> {
        let origin = self.origin.ok_or(TimebaseError::NoOrigin)?;
        Ok(self
            .offsets
            .iter()
            .map(|&off| origin + self.unit.offset_duration(off))
            .collect())
    }

    /// Rescales offsets into a new unit; sample instants are unchanged.
    pub fn change_unit(&mut self, new_unit: TimeUnit) {
        let factor = self.unit.ratio_to(new_unit);
        for off in &mut self.offsets {
            *off *= factor;
        }
        self.unit = new_unit;
    }

    /// Moves the origin to a new instant, shifting offsets so that sample
    /// instants are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TimebaseError::NoOrigin`] if the series has no origin.
    pub fn rebase_origin(&mut self, new_origin: DateTime<Utc>) -> Result<(), TimebaseError> {
        let origin = self.origin.ok_or(TimebaseError::NoOrigin)?;
        let shift =
            (origin - new_origin).num_nanoseconds().unwrap_or(0) as f64 / self.unit.nanos() as f64;
        for off in &mut self.offsets {
            *off += shift;
        }
        self.origin = Some(new_origin);
        Ok(())
    }

    /// Re-spaces the series evenly across its current span with
    /// `floor(len * factor)` samples.
    ///
    /// The span and origin are unchanged; only the density changes. The
    /// mean interval divides by `factor` (up to the floor).
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`TimebaseError::InvalidFactor`] | `factor` is not positive and finite |
    /// | [`TimebaseError::EmptySeries`] | the series has no samples |
    pub fn resample_evenly(&mut self, factor: f64) -> Result<(), TimebaseError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(TimebaseError::InvalidFactor { factor });
        }
        let (&first, &last) = match (self.offsets.first(), self.offsets.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(TimebaseError::EmptySeries),
        };
        let new_len = (self.offsets.len() as f64 * factor) as usize;
        self.offsets = linspace(first, last, new_len);
        Ok(())
    }

    /// Returns a deep copy of the samples in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`TimebaseError::SliceOutOfBounds`] if the range does not
    /// fit the series.
    pub fn slice(&self, range: std::ops::Range<usize>) -> Result<Self, TimebaseError> {
        if range.start > range.end || range.end > self.offsets.len() {
            return Err(TimebaseError::SliceOutOfBounds {
                start: range.start,
                end: range.end,
                len: self.offsets.len(),
            });
        }
        Ok(Self {
            offsets: self.offsets[range].to_vec(),
            unit: self.unit,
            origin: self.origin,
        })
    }

    /// Returns the span from first to last offset, in the current unit.
    ///
    /// # Errors
    ///
    /// Returns [`TimebaseError::EmptySeries`] if the series has no samples.
    pub fn span(&self) -> Result<f64, TimebaseError> {
        match (self.offsets.first(), self.offsets.last()) {
            (Some(first), Some(last)) => Ok(last - first),
            _ => Err(TimebaseError::EmptySeries),
        }
    }

    /// Returns the mean sample interval in the current unit: the span
    /// divided by the sample count.
    ///
    /// # Errors
    ///
    /// Returns [`TimebaseError::EmptySeries`] if the series has no samples.
    pub fn mean_interval(&self) -> Result<f64, TimebaseError> {
        Ok(self.span()? / self.offsets.len() as f64)
    }
}

/// Two series are equal when their point sets match elementwise: both
/// absolute (instants agree at nanosecond resolution) or both relative
/// (offset durations agree at nanosecond resolution). An absolute series
/// never equals a relative one.
impl PartialEq for TimeSeries {
    fn eq(&self, other: &Self) -> bool {
        if self.offsets.len() != other.offsets.len() {
            return false;
        }
        match (self.origin, other.origin) {
            (Some(a), Some(b)) => self.offsets.iter().zip(&other.offsets).all(|(&x, &y)| {
                absolute_nanos(a, self.unit, x) == absolute_nanos(b, other.unit, y)
            }),
            (None, None) => self
                .offsets
                .iter()
                .zip(&other.offsets)
                .all(|(&x, &y)| self.unit.offset_nanos(x) == other.unit.offset_nanos(y)),
            _ => false,
        }
    }
}

fn absolute_nanos(origin: DateTime<Utc>, unit: TimeUnit, offset: f64) -> Option<i64> {
    origin
        .timestamp_nanos_opt()?
        .checked_add(unit.offset_nanos(offset))
}

fn validate_offsets(offsets: &[f64]) -> Result<(), TimebaseError> {
    for (i, &off) in offsets.iter().enumerate() {
        if !off.is_finite() {
            return Err(TimebaseError::NonFiniteOffset { index: i });
        }
        if i > 0 && off < offsets[i - 1] {
            return Err(TimebaseError::NonMonotonic {
                index: i,
                value: off,
                previous: offsets[i - 1],
            });
        }
    }
    Ok(())
}

/// `count` evenly spaced values from `a` to `b`, both endpoints included.
fn linspace(a: f64, b: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let step = (b - a) / (count - 1) as f64;
            (0..count).map(|i| a + i as f64 * step).collect()
        }
    }
}
