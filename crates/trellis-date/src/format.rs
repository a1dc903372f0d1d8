//! Token-based date formatting.

use chrono::{DateTime, Datelike, Local, Offset, TimeZone, Timelike};
use regex::{Captures, Regex};
use std::sync::OnceLock;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    // Longest alternatives first so `YYYY` wins over `YY`.
    TOKEN_REGEX.get_or_init(|| {
        Regex::new(r"YYYY|YY|M{1,4}|D{1,2}|d{1,4}|H{1,2}|h{1,2}|m{1,2}|s{1,2}|SSS|Z{1,2}|A|a")
            .unwrap()
    })
}

/// Render `date` using the tokens in `schema`.
///
/// | Token | Output |
/// |-------|--------|
/// | `YYYY` / `YY` | `2023` / `23` |
/// | `M` / `MM` / `MMM` / `MMMM` | `4` / `04` / `Apr` / `April` |
/// | `D` / `DD` | `5` / `05` |
/// | `d` / `dd` / `ddd` / `dddd` | `0`-`6` from Sunday / `Sat` / `Sat` / `Saturday` |
/// | `H` / `HH` | 24-hour clock |
/// | `h` / `hh` | 12-hour clock, `1`-`12` |
/// | `m` / `mm`, `s` / `ss` | minutes, seconds |
/// | `SSS` | milliseconds |
/// | `Z` / `ZZ` | `+08:00` / `+0800` |
/// | `A` / `a` | `AM`/`PM` or `am`/`pm` |
///
/// Everything else in the schema is copied through unchanged.
pub fn format_date<Tz: TimeZone>(schema: &str, date: &DateTime<Tz>) -> String {
    token_regex()
        .replace_all(schema, |caps: &Captures<'_>| render_token(&caps[0], date))
        .into_owned()
}

/// Render the current local time using the tokens in `schema`.
pub fn format_now(schema: &str) -> String {
    format_date(schema, &Local::now())
}

fn render_token<Tz: TimeZone>(token: &str, date: &DateTime<Tz>) -> String {
    let month = date.month0() as usize;
    let weekday = date.weekday().num_days_from_sunday() as usize;
    let (is_pm, hour12) = date.hour12();

    match token {
        "YYYY" => date.year().to_string(),
        "YY" => format!("{:02}", date.year().rem_euclid(100)),
        "M" => date.month().to_string(),
        "MM" => format!("{:02}", date.month()),
        "MMM" => MONTHS[month][..3].to_string(),
        "MMMM" => MONTHS[month].to_string(),
        "D" => date.day().to_string(),
        "DD" => format!("{:02}", date.day()),
        "d" => weekday.to_string(),
        "dd" | "ddd" => WEEKDAYS[weekday][..3].to_string(),
        "dddd" => WEEKDAYS[weekday].to_string(),
        "H" => date.hour().to_string(),
        "HH" => format!("{:02}", date.hour()),
        "h" => hour12.to_string(),
        "hh" => format!("{hour12:02}"),
        "m" => date.minute().to_string(),
        "mm" => format!("{:02}", date.minute()),
        "s" => date.second().to_string(),
        "ss" => format!("{:02}", date.second()),
        // Leap seconds carry the extra second in the nanosecond field.
        "SSS" => format!("{:03}", date.nanosecond() / 1_000_000 % 1000),
        "Z" => offset(date, ":"),
        "ZZ" => offset(date, ""),
        "A" => if is_pm { "PM" } else { "AM" }.to_string(),
        "a" => if is_pm { "pm" } else { "am" }.to_string(),
        other => other.to_string(),
    }
}

fn offset<Tz: TimeZone>(date: &DateTime<Tz>, separator: &str) -> String {
    let seconds = date.offset().fix().local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("{sign}{:02}{separator}{:02}", minutes / 60, minutes % 60)
}
