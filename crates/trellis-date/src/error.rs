use thiserror::Error;

/// A calendar date that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("month {0} is out of range 1-12")]
    InvalidMonth(u32),

    #[error("day {day} does not exist in {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
}
