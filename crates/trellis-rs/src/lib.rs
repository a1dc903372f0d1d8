//! # Trellis
//!
//! Declarative validation for form-shaped records, plus the date helpers that
//! usually sit next to it in a UI layer.
//!
//! Describe each field's rules once, hand in a JSON-like record, and get back
//! either the data or every violation grouped by field.
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis_rs::prelude::*;
//!
//! let rules = RuleDescription::new()
//!     .field("username", Rule::string().required().min(3).max(20))
//!     .field("email", Rule::string().required().email())
//!     .field("age", Rule::number().min(18));
//!
//! let data = json!({ "username": "ab", "email": "ab@example.com", "age": 30 });
//! let result = validate(data.as_object().unwrap(), &rules);
//!
//! let errors = result.errors().unwrap();
//! assert_eq!(errors.get("username").unwrap(), ["username length must not be less than 3"]);
//! ```
//!
//! ## Optional Features
//!
//! - `date` (default) - [`format_date`], [`weekday`] and [`weekday_julian`]

// Re-export validation
pub use trellis_validate::*;

// Re-export date helpers (feature-gated)
#[cfg(feature = "date")]
pub use trellis_date::{format_date, format_now, weekday, weekday_julian, DateError};

/// Prelude module - import everything you need with `use trellis_rs::prelude::*`
pub mod prelude {
    // Validation
    pub use trellis_validate::prelude::*;
    pub use trellis_validate::{
        ArrayRule, BooleanRule, GenericRule, NumberRule, RecordCheck, StringRule, ValueCheck,
    };

    // Date helpers (feature-gated)
    #[cfg(feature = "date")]
    pub use trellis_date::{format_date, format_now, weekday, weekday_julian, DateError};
    #[cfg(feature = "date")]
    pub use chrono::Weekday;

    // Re-export commonly used external types
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value};
    pub use tracing::{debug, error, info, trace, warn};
}
