//! Error types.

use core::error::Error;
use core::fmt;

/// Time change rule error
#[non_exhaustive]
#[derive(Debug)]
pub enum RuleError {
    /// Invalid week of the month
    InvalidWeek,
    /// Invalid day of the week
    InvalidWeekDay,
    /// Invalid month
    InvalidMonth,
    /// Invalid hour
    InvalidHour,
    /// Invalid UTC offset
    InvalidUtcOffset,
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::InvalidWeek => f.write_str("invalid rule week"),
            Self::InvalidWeekDay => f.write_str("invalid rule week day"),
            Self::InvalidMonth => f.write_str("invalid rule month"),
            Self::InvalidHour => f.write_str("invalid rule hour"),
            Self::InvalidUtcOffset => f.write_str("invalid rule UTC offset"),
        }
    }
}

impl Error for RuleError {}
