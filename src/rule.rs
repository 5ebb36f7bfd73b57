//! Time change rules and their resolution to absolute instants.

use crate::constants::*;
use crate::datetime::{days_since_unix_epoch, week_day};
use crate::error::RuleError;

/// Rule describing one yearly time change, e.g. "DST starts on the second Sunday in March at 02:00"
///
/// A rule is year-independent: it selects an ordinal occurrence of a week day within a month,
/// and carries the UTC offset in effect while its regime applies. Two rules describe a time
/// zone: one for the start of Daylight Saving Time and one for the start of standard time.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RuleFields", into = "RuleFields"))]
pub struct TimeChangeRule {
    /// Week of the month in `[0, 4]`, with `0` representing the last occurrence
    week: u8,
    /// Day of the week in `[1, 7]` from Sunday
    week_day: u8,
    /// Month in `[1, 12]`
    month: u8,
    /// Hour of the change in `[0, 23]`, on the local clock in effect just before the change
    hour: u8,
    /// Offset from UTC in minutes while the rule is in effect
    utc_offset: i16,
}

impl TimeChangeRule {
    /// Size in bytes of an encoded rule
    pub const ENCODED_LEN: usize = 6;

    /// Construct a time change rule
    ///
    /// ## Inputs
    ///
    /// * `week`: Week of the month in `[0, 4]`, with `0` representing the last occurrence
    /// * `week_day`: Day of the week in `[1, 7]` from Sunday
    /// * `month`: Month in `[1, 12]`
    /// * `hour`: Hour of the change in `[0, 23]`, on the local clock in effect just before the change
    /// * `utc_offset`: Offset from UTC in minutes while the rule is in effect, less than one day in magnitude
    ///
    pub const fn new(week: u8, week_day: u8, month: u8, hour: u8, utc_offset: i16) -> Result<Self, RuleError> {
        if week > 4 {
            return Err(RuleError::InvalidWeek);
        }

        if week_day < 1 || week_day > 7 {
            return Err(RuleError::InvalidWeekDay);
        }

        if month < 1 || month > 12 {
            return Err(RuleError::InvalidMonth);
        }

        if hour > 23 {
            return Err(RuleError::InvalidHour);
        }

        if utc_offset <= -MINUTES_PER_DAY || utc_offset >= MINUTES_PER_DAY {
            return Err(RuleError::InvalidUtcOffset);
        }

        Ok(Self { week, week_day, month, hour, utc_offset })
    }

    /// Returns the week of the month in `[0, 4]`, with `0` representing the last occurrence
    pub const fn week(&self) -> u8 {
        self.week
    }

    /// Returns the day of the week in `[1, 7]` from Sunday
    pub const fn week_day(&self) -> u8 {
        self.week_day
    }

    /// Returns the month in `[1, 12]`
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the hour of the change in `[0, 23]`, on the local clock in effect just before the change
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the offset from UTC in minutes while the rule is in effect
    pub const fn utc_offset(&self) -> i16 {
        self.utc_offset
    }

    /// Returns the instant of the change described by the rule for the provided year.
    ///
    /// The result is a local clock reading expressed on the Unix time scale, in seconds.
    pub fn transition_instant(&self, year: i32) -> i64 {
        let mut month = self.month;
        let mut week = self.week;
        let mut year = year;

        // A last-occurrence rule selects the first occurrence in the next month, minus one week
        if week == 0 {
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
            week = 1;
        }

        let first_month_day = days_since_unix_epoch(year, month, 1);

        let mut days = first_month_day + 7 * (week as i64 - 1);
        days += (self.week_day as i64 - week_day(first_month_day) as i64).rem_euclid(DAYS_PER_WEEK);
        if self.week == 0 {
            days -= DAYS_PER_WEEK;
        }

        days * SECONDS_PER_DAY + self.hour as i64 * SECONDS_PER_HOUR
    }

    /// Encode the rule as a fixed-size blob, suitable for a byte-level storage medium
    pub const fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        let utc_offset = self.utc_offset.to_le_bytes();
        [self.week, self.week_day, self.month, self.hour, utc_offset[0], utc_offset[1]]
    }

    /// Decode a rule from a fixed-size blob, validating every field
    pub const fn from_bytes(bytes: [u8; Self::ENCODED_LEN]) -> Result<Self, RuleError> {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3], i16::from_le_bytes([bytes[4], bytes[5]]))
    }
}

/// Wire form of a rule used by the serde implementations
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RuleFields {
    week: u8,
    week_day: u8,
    month: u8,
    hour: u8,
    utc_offset: i16,
}

#[cfg(feature = "serde")]
impl From<TimeChangeRule> for RuleFields {
    fn from(rule: TimeChangeRule) -> Self {
        Self { week: rule.week, week_day: rule.week_day, month: rule.month, hour: rule.hour, utc_offset: rule.utc_offset }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RuleFields> for TimeChangeRule {
    type Error = RuleError;

    fn try_from(fields: RuleFields) -> Result<Self, RuleError> {
        Self::new(fields.week, fields.week_day, fields.month, fields.hour, fields.utc_offset)
    }
}
