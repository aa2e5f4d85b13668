//! Duration quantum in which series offsets are expressed.

use chrono::Duration;

use crate::error::TimebaseError;

/// The duration quantum of a time series: one offset step equals one unit.
///
/// A series with offsets `[0.0, 0.5, 1.0]` and unit [`TimeUnit::second`]
/// holds samples at 0 ms, 500 ms, and 1000 ms. Stored internally at
/// nanosecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeUnit {
    nanos: i64,
}

impl TimeUnit {
    /// Creates a unit from an arbitrary duration quantum.
    ///
    /// # Errors
    ///
    /// Returns [`TimebaseError::InvalidQuantum`] if the duration is zero,
    /// negative, or not representable in nanoseconds.
    pub fn from_duration(quantum: Duration) -> Result<Self, TimebaseError> {
        let nanos = quantum
            .num_nanoseconds()
            .ok_or(TimebaseError::InvalidQuantum { nanos: i64::MAX })?;
        if nanos <= 0 {
            return Err(TimebaseError::InvalidQuantum { nanos });
        }
        Ok(Self { nanos })
    }

    /// One nanosecond.
    pub fn nanosecond() -> Self {
        Self { nanos: 1 }
    }

    /// One microsecond.
    pub fn microsecond() -> Self {
        Self { nanos: 1_000 }
    }

    /// One millisecond.
    pub fn millisecond() -> Self {
        Self { nanos: 1_000_000 }
    }

    /// One second.
    pub fn second() -> Self {
        Self {
            nanos: 1_000_000_000,
        }
    }

    /// One minute.
    pub fn minute() -> Self {
        Self {
            nanos: 60 * 1_000_000_000,
        }
    }

    /// One hour.
    pub fn hour() -> Self {
        Self {
            nanos: 3_600 * 1_000_000_000,
        }
    }

    /// Returns the quantum in nanoseconds.
    pub fn nanos(self) -> i64 {
        self.nanos
    }

    /// Returns the quantum in seconds.
    pub fn as_secs_f64(self) -> f64 {
        self.nanos as f64 / 1e9
    }

    /// Conversion factor from this unit into `other`.
    ///
    /// An offset array expressed in `self` becomes the same physical
    /// times in `other` after multiplication by this factor.
    pub fn ratio_to(self, other: TimeUnit) -> f64 {
        self.nanos as f64 / other.nanos as f64
    }

    /// Converts a float offset in this unit to a duration, rounded to
    /// nanosecond resolution.
    pub fn offset_duration(self, offset: f64) -> Duration {
        Duration::nanoseconds((offset * self.nanos as f64).round() as i64)
    }

    /// Converts a float offset in this unit to whole nanoseconds.
    pub(crate) fn offset_nanos(self, offset: f64) -> i64 {
        (offset * self.nanos as f64).round() as i64
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.nanos {
            n if n % 3_600_000_000_000 == 0 => write!(f, "{}h", n / 3_600_000_000_000),
            n if n % 60_000_000_000 == 0 => write!(f, "{}min", n / 60_000_000_000),
            n if n % 1_000_000_000 == 0 => write!(f, "{}s", n / 1_000_000_000),
            n if n % 1_000_000 == 0 => write!(f, "{}ms", n / 1_000_000),
            n if n % 1_000 == 0 => write!(f, "{}us", n / 1_000),
            n => write!(f, "{n}ns"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_duration_valid() {
        let unit = TimeUnit::from_duration(Duration::milliseconds(250)).unwrap();
        assert_eq!(unit.nanos(), 250_000_000);
    }

    #[test]
    fn from_duration_zero_rejected() {
        let err = TimeUnit::from_duration(Duration::zero()).unwrap_err();
        assert_eq!(err, TimebaseError::InvalidQuantum { nanos: 0 });
    }

    #[test]
    fn from_duration_negative_rejected() {
        let err = TimeUnit::from_duration(Duration::seconds(-1)).unwrap_err();
        assert!(matches!(err, TimebaseError::InvalidQuantum { .. }));
    }

    #[test]
    fn named_units() {
        assert_eq!(TimeUnit::nanosecond().nanos(), 1);
        assert_eq!(TimeUnit::microsecond().nanos(), 1_000);
        assert_eq!(TimeUnit::millisecond().nanos(), 1_000_000);
        assert_eq!(TimeUnit::second().nanos(), 1_000_000_000);
        assert_eq!(TimeUnit::minute().nanos(), 60_000_000_000);
        assert_eq!(TimeUnit::hour().nanos(), 3_600_000_000_000);
    }

    #[test]
    fn as_secs() {
        assert_relative_eq!(TimeUnit::second().as_secs_f64(), 1.0);
        assert_relative_eq!(TimeUnit::millisecond().as_secs_f64(), 1e-3);
        assert_relative_eq!(TimeUnit::hour().as_secs_f64(), 3600.0);
    }

    #[test]
    fn ratio_seconds_to_millis() {
        // 1 second = 1000 milliseconds, so offsets scale up by 1000.
        assert_relative_eq!(
            TimeUnit::second().ratio_to(TimeUnit::millisecond()),
            1000.0
        );
        assert_relative_eq!(
            TimeUnit::millisecond().ratio_to(TimeUnit::second()),
            1e-3
        );
    }

    #[test]
    fn ratio_identity() {
        assert_relative_eq!(TimeUnit::minute().ratio_to(TimeUnit::minute()), 1.0);
    }

    #[test]
    fn offset_duration_rounds_to_nanos() {
        let unit = TimeUnit::second();
        let d = unit.offset_duration(1.5);
        assert_eq!(d.num_nanoseconds().unwrap(), 1_500_000_000);

        // 1/3 second rounds to the nearest nanosecond.
        let d = unit.offset_duration(1.0 / 3.0);
        assert_eq!(d.num_nanoseconds().unwrap(), 333_333_333);
    }

    #[test]
    fn display_formats() {
        assert_eq!(TimeUnit::second().to_string(), "1s");
        assert_eq!(TimeUnit::millisecond().to_string(), "1ms");
        assert_eq!(TimeUnit::hour().to_string(), "1h");
        assert_eq!(TimeUnit::minute().to_string(), "1min");
        let odd = TimeUnit::from_duration(Duration::nanoseconds(22_675)).unwrap();
        assert_eq!(odd.to_string(), "22675ns");
    }

    #[test]
    fn unit_is_copy_ord_send_sync() {
        fn assert_impl<T: Copy + Ord + Send + Sync>() {}
        assert_impl::<TimeUnit>();
    }
}
