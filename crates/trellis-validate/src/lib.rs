//! # Trellis Validation
//!
//! Declarative, rule-driven validation of records. A [`RuleDescription`] maps field
//! names to one or more [`Rule`]s; [`validate`] checks a record against it and either
//! hands the record back or reports every violation it found, per field and flattened.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use trellis_validate::prelude::*;
//!
//! let rules = RuleDescription::new()
//!     .field("name", Rule::string().required().min(2))
//!     .field("age", Rule::number().required().min(18))
//!     .field("tags", Rule::array().unique().element_rule(Rule::string().max(20)));
//!
//! let data = json!({ "name": "John", "age": 30, "tags": ["rust", "ui"] });
//! let record = data.as_object().unwrap();
//!
//! assert!(validate(record, &rules).is_valid());
//! ```
//!
//! ## Rules
//!
//! - [`StringRule`] - `min`/`max`/`len` on characters, `regex`, `email`, `url`, `phone`
//! - [`NumberRule`] - `min`/`max`
//! - [`ArrayRule`] - `min`/`max`/`len` on elements, `unique`, `element_rule`
//! - [`BooleanRule`], [`GenericRule`] - base checks only
//!
//! Every rule carries `required`, a `message` override, a custom `validator` and a
//! cross-field `depends_on` predicate.
//!
//! ## Error Format
//!
//! [`ValidationErrors::to_api_error`] renders the report as:
//!
//! ```json
//! {
//!   "error": {
//!     "type": "validation_error",
//!     "message": "Validation failed",
//!     "fields": [
//!       {"field": "age", "message": "age must not be less than 18"}
//!     ]
//!   }
//! }
//! ```

mod description;
mod engine;
mod error;
mod message;
mod patterns;
mod rules;
mod traits;


pub use description::RuleDescription;
pub use engine::{validate, validate_value, ValidationResult};
pub use error::{
    ApiValidationError, CheckError, ErrorBody, FieldErrorResponse, RuleConfigError,
    ValidationErrors,
};
pub use message::Violation;
pub use patterns::{is_email, is_phone, is_url};
pub use rules::{
    ArrayRule, BaseRule, BooleanRule, FieldRules, GenericRule, NumberRule, Outcome, Pattern,
    RecordCheck, Rule, StringRule, ValueCheck,
};
pub use traits::Validate;

/// A record under validation: field name to JSON value.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Prelude module for validation
pub mod prelude {
    pub use crate::description::RuleDescription;
    pub use crate::engine::{validate, validate_value, ValidationResult};
    pub use crate::error::{CheckError, RuleConfigError, ValidationErrors};
    pub use crate::rules::{FieldRules, Outcome, Rule};
    pub use crate::traits::Validate;
    pub use crate::Record;
}
