//! Fields and callbacks shared by every rule kind.

use crate::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Result of a custom `validator` or `depends_on` callback.
///
/// `Fail` reports the rule's generic message (or its `message` override), while
/// `Reject` carries the exact message to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The check passed.
    Pass,
    /// The check failed; report the default message.
    Fail,
    /// The check failed with a specific message.
    Reject(String),
}

impl From<bool> for Outcome {
    fn from(passed: bool) -> Self {
        if passed {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }
}

impl From<String> for Outcome {
    fn from(message: String) -> Self {
        Outcome::Reject(message)
    }
}

impl From<&str> for Outcome {
    fn from(message: &str) -> Self {
        Outcome::Reject(message.to_string())
    }
}

impl From<Result<(), String>> for Outcome {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Outcome::Pass,
            Err(message) => Outcome::Reject(message),
        }
    }
}

type ValueCheckFn = dyn Fn(&Value, &Record) -> Outcome + Send + Sync;
type RecordCheckFn = dyn Fn(&Record) -> Outcome + Send + Sync;

/// Custom predicate over a field value and the whole record.
#[derive(Clone)]
pub struct ValueCheck(Arc<ValueCheckFn>);

impl ValueCheck {
    /// Wrap a closure returning anything convertible into an [`Outcome`].
    pub fn new<F, O>(check: F) -> Self
    where
        F: Fn(&Value, &Record) -> O + Send + Sync + 'static,
        O: Into<Outcome>,
    {
        Self(Arc::new(move |value, record| check(value, record).into()))
    }

    /// Run the check.
    pub fn call(&self, value: &Value, record: &Record) -> Outcome {
        (self.0)(value, record)
    }
}

impl PartialEq for ValueCheck {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ValueCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueCheck(..)")
    }
}

/// Cross-field predicate over the whole record.
#[derive(Clone)]
pub struct RecordCheck(Arc<RecordCheckFn>);

impl RecordCheck {
    /// Wrap a closure returning anything convertible into an [`Outcome`].
    pub fn new<F, O>(check: F) -> Self
    where
        F: Fn(&Record) -> O + Send + Sync + 'static,
        O: Into<Outcome>,
    {
        Self(Arc::new(move |record| check(record).into()))
    }

    /// Run the check.
    pub fn call(&self, record: &Record) -> Outcome {
        (self.0)(record)
    }
}

impl PartialEq for RecordCheck {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for RecordCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RecordCheck(..)")
    }
}

/// Checks every rule kind supports.
///
/// Callbacks are code-only: they are skipped when a rule is serialized and absent
/// when one is loaded from configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseRule {
    /// The value must be present (non-null, and non-blank for strings and arrays)
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Replaces the default message of every check in this rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Runs last, with the value and the whole record
    #[serde(skip)]
    pub validator: Option<ValueCheck>,
    /// Runs first, with the whole record
    #[serde(skip)]
    pub depends_on: Option<RecordCheck>,
}

impl BaseRule {
    /// Shared checks as loaded from configuration, without callbacks.
    pub(crate) fn configured(required: bool, message: Option<String>) -> Self {
        Self {
            required,
            message,
            ..Self::default()
        }
    }
}

/// Builder methods for the [`BaseRule`] part of a rule kind.
macro_rules! base_builders {
    ($($ty:ty),+ $(,)?) => {$(
        impl $ty {
            /// Mark the field as required.
            pub fn required(mut self) -> Self {
                self.base.required = true;
                self
            }

            /// Override the message of every check in this rule.
            pub fn message(mut self, message: impl Into<String>) -> Self {
                self.base.message = Some(message.into());
                self
            }

            /// Attach a custom check over the value and the whole record.
            pub fn validator<F, O>(mut self, check: F) -> Self
            where
                F: Fn(&serde_json::Value, &$crate::Record) -> O + Send + Sync + 'static,
                O: Into<$crate::Outcome>,
            {
                self.base.validator = Some($crate::ValueCheck::new(check));
                self
            }

            /// Attach a cross-field condition over the whole record.
            pub fn depends_on<F, O>(mut self, check: F) -> Self
            where
                F: Fn(&$crate::Record) -> O + Send + Sync + 'static,
                O: Into<$crate::Outcome>,
            {
                self.base.depends_on = Some($crate::RecordCheck::new(check));
                self
            }

            /// The shared part of this rule.
            pub fn base(&self) -> &$crate::BaseRule {
                &self.base
            }
        }
    )+};
}

pub(crate) use base_builders;
