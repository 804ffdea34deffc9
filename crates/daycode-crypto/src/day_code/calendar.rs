//! Mapping between wall-clock timestamps and day indices
//!
//! Days are counted in whole UTC days since [`EPOCH_UNIX_SECS`]
//! (2020-01-01T00:00:00Z). Timestamps are floored to the whole second before
//! any arithmetic.

use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

use super::error::DayCodeError;

/// 2020-01-01T00:00:00Z as Unix seconds
pub const EPOCH_UNIX_SECS: i64 = 1_577_836_800;

/// Length of one day in seconds
pub const SECONDS_PER_DAY: i64 = 86_400;

/// A wall-clock instant in whole seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Timestamp at exactly [`EPOCH_UNIX_SECS`].
    pub const EPOCH: Self = Self(EPOCH_UNIX_SECS);

    /// Create a timestamp from whole Unix seconds.
    pub const fn from_unix_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Whole seconds since the Unix epoch.
    pub const fn unix_secs(self) -> i64 {
        self.0
    }

    /// Floor a `SystemTime` to the whole second.
    ///
    /// Instants before 1970 floor towards negative infinity, so half a second
    /// before the Unix epoch becomes `-1`.
    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Self(i64::try_from(after.as_secs()).unwrap_or(i64::MAX)),
            Err(err) => {
                let before = err.duration();
                let whole = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
                let secs = if before.subsec_nanos() > 0 { whole.saturating_add(1) } else { whole };
                Self(secs.saturating_neg())
            },
        }
    }

    /// Shift by a signed number of seconds, saturating at the `i64` bounds.
    #[must_use]
    pub const fn saturating_add_secs(self, secs: i64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        Self::from_system_time(time)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Whole days elapsed since [`EPOCH_UNIX_SECS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(usize);

impl Day {
    /// Create a day index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Index into the day code table.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Resolve the day a timestamp falls on, bounded by `horizon` days.
///
/// The before-epoch check happens ahead of the division: truncating division
/// would otherwise fold the last second before the epoch into day 0.
///
/// # Errors
///
/// - `OutOfRange`: If the timestamp is before the epoch or on/after day
///   `horizon`
pub fn day_for(at: Timestamp, horizon: usize) -> Result<Day, DayCodeError> {
    let elapsed = at.unix_secs().saturating_sub(EPOCH_UNIX_SECS);
    if elapsed < 0 {
        // Report the floored day so the error carries a negative offset
        return Err(DayCodeError::OutOfRange {
            day: elapsed.div_euclid(SECONDS_PER_DAY),
            horizon,
        });
    }

    let day = elapsed / SECONDS_PER_DAY;
    match usize::try_from(day) {
        Ok(index) if index < horizon => Ok(Day(index)),
        _ => Err(DayCodeError::OutOfRange { day, horizon }),
    }
}

/// Timestamp at which `day` begins.
pub fn day_start(day: Day) -> Timestamp {
    let offset = i64::try_from(day.index()).unwrap_or(i64::MAX);
    Timestamp::EPOCH.saturating_add_secs(offset.saturating_mul(SECONDS_PER_DAY))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const HORIZON: usize = 365 * 5;

    fn epoch_plus(secs: i64) -> Timestamp {
        Timestamp::EPOCH.saturating_add_secs(secs)
    }

    #[test]
    fn epoch_is_2020_01_01() {
        // 50 years of 365 days plus 12 leap days (1972..=2016)
        assert_eq!(EPOCH_UNIX_SECS, (50 * 365 + 12) * SECONDS_PER_DAY);
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(day_for(Timestamp::EPOCH, HORIZON), Ok(Day::new(0)));
    }

    #[test]
    fn last_second_of_day_zero() {
        assert_eq!(day_for(epoch_plus(86_399), HORIZON), Ok(Day::new(0)));
    }

    #[test]
    fn first_second_of_day_one() {
        assert_eq!(day_for(epoch_plus(86_400), HORIZON), Ok(Day::new(1)));
    }

    #[test]
    fn one_second_before_epoch_is_out_of_range() {
        assert_eq!(
            day_for(epoch_plus(-1), HORIZON),
            Err(DayCodeError::OutOfRange { day: -1, horizon: HORIZON })
        );
    }

    #[test]
    fn last_day_of_horizon() {
        let last = epoch_plus(HORIZON as i64 * SECONDS_PER_DAY - 1);
        assert_eq!(day_for(last, HORIZON), Ok(Day::new(HORIZON - 1)));
    }

    #[test]
    fn end_of_horizon_is_out_of_range() {
        let end = epoch_plus(HORIZON as i64 * SECONDS_PER_DAY);
        assert_eq!(
            day_for(end, HORIZON),
            Err(DayCodeError::OutOfRange { day: HORIZON as i64, horizon: HORIZON })
        );
    }

    #[test]
    fn extreme_timestamps_do_not_overflow() {
        assert!(day_for(Timestamp::from_unix_secs(i64::MIN), HORIZON).is_err());
        assert!(day_for(Timestamp::from_unix_secs(i64::MAX), HORIZON).is_err());
    }

    #[test]
    fn system_time_floors_to_whole_second() {
        let time = UNIX_EPOCH + Duration::from_millis(1_577_836_800_999);
        assert_eq!(Timestamp::from(time), Timestamp::EPOCH);
    }

    #[test]
    fn system_time_before_unix_epoch_floors_down() {
        let time = UNIX_EPOCH - Duration::from_millis(500);
        assert_eq!(Timestamp::from(time).unix_secs(), -1);

        let time = UNIX_EPOCH - Duration::from_secs(2);
        assert_eq!(Timestamp::from(time).unix_secs(), -2);
    }

    #[test]
    fn day_start_is_inverse_of_day_for() {
        for index in [0, 1, 59, 365, HORIZON - 1] {
            let day = Day::new(index);
            assert_eq!(day_for(day_start(day), HORIZON), Ok(day));

            let previous = day_for(day_start(day).saturating_add_secs(-1), HORIZON).ok();
            assert_eq!(previous, index.checked_sub(1).map(Day::new));
        }
    }
}
