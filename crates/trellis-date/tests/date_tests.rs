//! Integration tests for date formatting and weekday arithmetic.

use chrono::{Datelike, FixedOffset, TimeZone, Timelike, Weekday};
use trellis_date::{format_date, weekday, weekday_julian, DateError};

fn shanghai(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> chrono::DateTime<FixedOffset> {
    FixedOffset::east_opt(8 * 3600)
        .unwrap()
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .unwrap()
}

#[test]
fn full_timestamp_schema() {
    let date = shanghai(2023, 4, 15, 14, 30, 45).with_nanosecond(678_000_000).unwrap();
    assert_eq!(
        format_date("YYYY-MM-DDTHH:mm:ss.SSSZ", &date),
        "2023-04-15T14:30:45.678+08:00"
    );
}

#[test]
fn human_readable_schema() {
    let date = shanghai(2023, 4, 15, 9, 5, 0);
    assert_eq!(
        format_date("dddd, MMMM D, YYYY h:mm A", &date),
        "Saturday, April 15, 2023 9:05 AM"
    );
}

#[test]
fn format_agrees_with_weekday_arithmetic() {
    for day in 1..=30 {
        let date = shanghai(2023, 6, day, 12, 0, 0);
        let computed = weekday(date.year(), date.month(), date.day()).unwrap();
        assert_eq!(
            format_date("d", &date),
            computed.num_days_from_sunday().to_string()
        );
    }
}

#[test]
fn calendars_diverge_after_the_reform() {
    // Julian 5 October 1582 is Gregorian 15 October 1582.
    assert_eq!(weekday_julian(1582, 10, 5).unwrap(), Weekday::Fri);
    assert_eq!(weekday(1582, 10, 15).unwrap(), Weekday::Fri);
}

#[test]
fn leap_rules_differ_between_calendars() {
    assert_eq!(
        weekday(1900, 2, 29),
        Err(DateError::InvalidDay { year: 1900, month: 2, day: 29 })
    );
    assert!(weekday_julian(1900, 2, 29).is_ok());
    assert!(weekday(2000, 2, 29).is_ok());
}
