//! Violation kinds and their default messages.

use std::fmt;

/// A single failed check.
///
/// Each kind has one default message, `"<field> <reason>"`, used when the rule
/// carries no `message` override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    Required,
    DependencyUnmet,
    StringLen(usize),
    StringMin(usize),
    StringMax(usize),
    Format,
    Email,
    Url,
    Phone,
    NumberMin(f64),
    NumberMax(f64),
    ArrayLen(usize),
    ArrayMin(usize),
    ArrayMax(usize),
    NotUnique,
    ValidatorFailed,
}

impl Violation {
    /// Short machine-readable code for the check.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::Required => "required",
            Violation::DependencyUnmet => "depends_on",
            Violation::StringLen(_) | Violation::ArrayLen(_) => "len",
            Violation::StringMin(_) | Violation::ArrayMin(_) | Violation::NumberMin(_) => "min",
            Violation::StringMax(_) | Violation::ArrayMax(_) | Violation::NumberMax(_) => "max",
            Violation::Format => "regex",
            Violation::Email => "email",
            Violation::Url => "url",
            Violation::Phone => "phone",
            Violation::NotUnique => "unique",
            Violation::ValidatorFailed => "validator",
        }
    }

    /// The message for `field` when the rule has no override.
    pub fn message(&self, field: &str) -> String {
        format!("{field} {self}")
    }
}

/// Writes the reason part of the message.
impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required => f.write_str("is required"),
            Violation::DependencyUnmet => f.write_str("dependency condition not met"),
            Violation::StringLen(n) | Violation::ArrayLen(n) => write!(f, "length must be {n}"),
            Violation::StringMin(n) | Violation::ArrayMin(n) => {
                write!(f, "length must not be less than {n}")
            }
            Violation::StringMax(n) => write!(f, "length must not exceed {n}"),
            Violation::ArrayMax(n) => write!(f, "length must not be greater than {n}"),
            Violation::Format => f.write_str("format is invalid"),
            Violation::Email => f.write_str("is not a valid email"),
            Violation::Url => f.write_str("is not a valid URL"),
            Violation::Phone => f.write_str("is not a valid phone number"),
            Violation::NumberMin(n) => write!(f, "must not be less than {n}"),
            Violation::NumberMax(n) => write!(f, "must not be greater than {n}"),
            Violation::NotUnique => f.write_str("elements must be unique"),
            Violation::ValidatorFailed => f.write_str("validation failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_prefix_the_field() {
        assert_eq!(Violation::Required.message("name"), "name is required");
        assert_eq!(
            Violation::StringMin(3).message("username"),
            "username length must not be less than 3"
        );
        assert_eq!(
            Violation::NotUnique.message("ids"),
            "ids elements must be unique"
        );
    }

    #[test]
    fn whole_bounds_print_without_fraction() {
        assert_eq!(
            Violation::NumberMin(18.0).message("age"),
            "age must not be less than 18"
        );
        assert_eq!(
            Violation::NumberMax(0.5).message("ratio"),
            "ratio must not be greater than 0.5"
        );
    }

    #[test]
    fn string_and_array_upper_bounds_read_differently() {
        assert_ne!(
            Violation::StringMax(5).to_string(),
            Violation::ArrayMax(5).to_string()
        );
        assert_eq!(Violation::StringMax(5).code(), Violation::ArrayMax(5).code());
    }
}
