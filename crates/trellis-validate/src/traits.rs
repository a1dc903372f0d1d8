//! Validation trait for typed values.

use crate::description::RuleDescription;
use crate::engine::validate_value;
use crate::error::CheckError;
use serde::Serialize;

/// Trait for types that carry their own rule description.
///
/// The value is serialized with serde and checked field by field, so the rules
/// name fields the way they appear in the serialized form.
///
/// ## Example
///
/// ```rust
/// use serde::Serialize;
/// use trellis_validate::prelude::*;
///
/// #[derive(Serialize)]
/// struct SignUp {
///     email: String,
///     age: u8,
/// }
///
/// impl Validate for SignUp {
///     fn rules(&self) -> RuleDescription {
///         RuleDescription::new()
///             .field("email", Rule::string().required().email())
///             .field("age", Rule::number().required().min(18))
///     }
/// }
///
/// let form = SignUp { email: "kid@example.com".into(), age: 12 };
/// let err = form.validate().unwrap_err();
/// assert_eq!(
///     err.violations().unwrap().errors,
///     ["age must not be less than 18"]
/// );
/// ```
pub trait Validate: Serialize {
    /// Rules for this value.
    fn rules(&self) -> RuleDescription;

    /// Validate the value, reporting every violation.
    fn validate(&self) -> Result<(), CheckError> {
        validate_value(self, &self.rules())?.into_result()?;
        Ok(())
    }

    /// Validate and return the value if valid.
    fn validated(self) -> Result<Self, CheckError>
    where
        Self: Sized,
    {
        self.validate()?;
        Ok(self)
    }
}
