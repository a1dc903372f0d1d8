//! # Trellis Date
//!
//! Small date helpers used by the UI layer.
//!
//! - [`format_date`] renders a date with `YYYY-MM-DD`-style tokens
//! - [`weekday`] and [`weekday_julian`] compute the day of the week arithmetically
//!
//! ```rust
//! use chrono::{FixedOffset, TimeZone};
//! use trellis_date::format_date;
//!
//! let date = FixedOffset::east_opt(8 * 3600)
//!     .unwrap()
//!     .with_ymd_and_hms(2023, 4, 15, 14, 30, 45)
//!     .unwrap();
//! assert_eq!(format_date("YYYY-MM-DD HH:mm (ddd)", &date), "2023-04-15 14:30 (Sat)");
//! ```

mod error;
mod format;
mod weekday;

pub use error::DateError;
pub use format::{format_date, format_now};
pub use weekday::{weekday, weekday_julian};
