//! Calendar computations over Unix time instants.

use crate::constants::*;

/// Check if a year is a leap year in the proleptic gregorian calendar
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Compute the number of days since Unix epoch (`1970-01-01T00:00:00Z`).
///
/// ## Inputs
///
/// * `year`: Year
/// * `month`: Month in `[1, 12]`
/// * `month_day`: Day of the month in `[1, 31]`
///
pub(crate) fn days_since_unix_epoch(year: i32, month: u8, month_day: i64) -> i64 {
    let is_leap_year = is_leap_year(year);

    let year = year as i64;
    let month = month as usize - 1;

    let mut result = (year - 1970) * 365;

    if year >= 1970 {
        result += (year - 1968) / 4;
        result -= (year - 1900) / 100;
        result += (year - 1600) / 400;

        if is_leap_year && month < 2 {
            result -= 1;
        }
    } else {
        result += (year - 1972) / 4;
        result -= (year - 2000) / 100;
        result += (year - 2000) / 400;

        if is_leap_year && month >= 2 {
            result += 1;
        }
    }

    result += CUM_DAY_IN_MONTHS_NORMAL_YEAR[month] + month_day - 1;

    result
}

/// Compute the day of the week in `[1, 7]` from Sunday, for a day count since Unix epoch
pub(crate) fn week_day(days_since_unix_epoch: i64) -> u8 {
    ((4 + days_since_unix_epoch).rem_euclid(DAYS_PER_WEEK) + 1) as u8
}

/// Compute the calendar year containing a Unix time in seconds
pub(crate) fn year_of_unix_time(unix_time: i64) -> i32 {
    let seconds = unix_time.saturating_sub(UNIX_OFFSET_SECS);
    let mut remaining_days = seconds / SECONDS_PER_DAY;
    if seconds % SECONDS_PER_DAY < 0 {
        remaining_days -= 1;
    }

    let mut cycles_400_years = remaining_days / DAYS_PER_400_YEARS;
    remaining_days %= DAYS_PER_400_YEARS;
    if remaining_days < 0 {
        remaining_days += DAYS_PER_400_YEARS;
        cycles_400_years -= 1;
    }

    let cycles_100_years = (remaining_days / DAYS_PER_100_YEARS).min(3);
    remaining_days -= cycles_100_years * DAYS_PER_100_YEARS;

    let cycles_4_years = (remaining_days / DAYS_PER_4_YEARS).min(24);
    remaining_days -= cycles_4_years * DAYS_PER_4_YEARS;

    let remaining_years = (remaining_days / DAYS_PER_NORMAL_YEAR).min(3);
    remaining_days -= remaining_years * DAYS_PER_NORMAL_YEAR;

    let mut year = OFFSET_YEAR + remaining_years + cycles_4_years * 4 + cycles_100_years * 100 + cycles_400_years * 400;

    // The year cycle is anchored on March, so January and February fall in the next calendar year
    let mut month = 2;
    for days in DAY_IN_MONTHS_LEAP_YEAR_FROM_MARCH {
        if remaining_days < days {
            break;
        }
        remaining_days -= days;
        month += 1;
    }

    if month >= MONTHS_PER_YEAR {
        year += 1;
    }

    year as i32
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2001));
        assert!(is_leap_year(2004));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2200));
        assert!(!is_leap_year(2300));
        assert!(is_leap_year(2400));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(1600));
    }

    #[test]
    fn test_days_since_unix_epoch() {
        assert_eq!(days_since_unix_epoch(1970, 1, 1), 0);
        assert_eq!(days_since_unix_epoch(1600, 2, 29), -135081);
        assert_eq!(days_since_unix_epoch(1600, 3, 1), -135080);
        assert_eq!(days_since_unix_epoch(1700, 3, 1), -98556);
        assert_eq!(days_since_unix_epoch(1701, 3, 1), -98191);
        assert_eq!(days_since_unix_epoch(1704, 2, 29), -97096);
        assert_eq!(days_since_unix_epoch(2000, 2, 29), 11016);
        assert_eq!(days_since_unix_epoch(2000, 3, 1), 11017);
        assert_eq!(days_since_unix_epoch(2001, 3, 1), 11382);
        assert_eq!(days_since_unix_epoch(2004, 2, 29), 12477);
        assert_eq!(days_since_unix_epoch(2100, 3, 1), 47541);
        assert_eq!(days_since_unix_epoch(3001, 3, 1), 376624);
    }

    #[test]
    fn test_week_day() {
        // 1970-01-01 was a Thursday
        assert_eq!(week_day(0), 5);

        assert_eq!(week_day(days_since_unix_epoch(2000, 1, 1)), 7);
        assert_eq!(week_day(days_since_unix_epoch(2000, 2, 28)), 2);
        assert_eq!(week_day(days_since_unix_epoch(2000, 2, 29)), 3);
        assert_eq!(week_day(days_since_unix_epoch(2000, 3, 1)), 4);
        assert_eq!(week_day(days_since_unix_epoch(2000, 12, 31)), 1);

        assert_eq!(week_day(days_since_unix_epoch(2001, 1, 1)), 2);
        assert_eq!(week_day(days_since_unix_epoch(2024, 3, 1)), 6);
        assert_eq!(week_day(days_since_unix_epoch(2024, 11, 1)), 6);
    }

    #[test]
    fn test_year_of_unix_time() {
        assert_eq!(year_of_unix_time(0), 1970);
        assert_eq!(year_of_unix_time(-1), 1969);
        assert_eq!(year_of_unix_time(946684800), 2000);
        assert_eq!(year_of_unix_time(946684799), 1999);
        assert_eq!(year_of_unix_time(951868799), 2000);
        assert_eq!(year_of_unix_time(951868800), 2000);
        assert_eq!(year_of_unix_time(1704067199), 2023);
        assert_eq!(year_of_unix_time(1704067200), 2024);
        assert_eq!(year_of_unix_time(1735689599), 2024);
        assert_eq!(year_of_unix_time(1735689600), 2025);
        assert_eq!(year_of_unix_time(-11670955200), 1600);
        assert_eq!(year_of_unix_time(-11670868800), 1600);
    }
}
