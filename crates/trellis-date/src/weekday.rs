//! Day-of-week arithmetic for the Gregorian and Julian calendars.

use crate::error::DateError;
use chrono::Weekday;

/// Day of the week for a Gregorian calendar date.
///
/// Uses Keith and Craver's closed form, so it works for proleptic dates
/// without building a [`chrono::NaiveDate`].
///
/// ```rust
/// use chrono::Weekday;
/// use trellis_date::weekday;
///
/// assert_eq!(weekday(2024, 1, 1).unwrap(), Weekday::Mon);
/// assert!(weekday(2023, 2, 29).is_err());
/// ```
pub fn weekday(year: i32, month: u32, day: u32) -> Result<Weekday, DateError> {
    check_date(year, month, day, is_gregorian_leap)?;

    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
    let z = if m < 3 { y - 1 } else { y };
    let correction = if m >= 3 { 2 } else { 0 };
    let days = 23 * m / 9 + d + 4 + y + z.div_euclid(4) - z.div_euclid(100) + z.div_euclid(400)
        - correction;

    Ok(from_sunday(days.rem_euclid(7)))
}

/// Day of the week for a Julian calendar date, by Zeller's congruence.
///
/// ```rust
/// use chrono::Weekday;
/// use trellis_date::weekday_julian;
///
/// // The last day before the Gregorian reform.
/// assert_eq!(weekday_julian(1582, 10, 4).unwrap(), Weekday::Thu);
/// ```
pub fn weekday_julian(year: i32, month: u32, day: u32) -> Result<Weekday, DateError> {
    check_date(year, month, day, is_julian_leap)?;

    // January and February count as months 13 and 14 of the previous year.
    let (y, m) = if month < 3 {
        (i64::from(year) - 1, i64::from(month) + 12)
    } else {
        (i64::from(year), i64::from(month))
    };
    let h = (i64::from(day) + 13 * (m + 1) / 5 + y + y.div_euclid(4) + 5).rem_euclid(7);

    // Zeller counts from Saturday.
    Ok(from_sunday((h + 6) % 7))
}

fn from_sunday(index: i64) -> Weekday {
    match index {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

fn is_gregorian_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn is_julian_leap(year: i32) -> bool {
    year % 4 == 0
}

fn check_date(year: i32, month: u32, day: u32, is_leap: fn(i32) -> bool) -> Result<(), DateError> {
    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap(year) => 29,
        2 => 28,
        _ => return Err(DateError::InvalidMonth(month)),
    };
    if day == 0 || day > days_in_month {
        return Err(DateError::InvalidDay { year, month, day });
    }
    Ok(())
}
