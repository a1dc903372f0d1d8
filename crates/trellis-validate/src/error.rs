//! Validation reports and configuration errors.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Every violation found in one validation pass.
///
/// `errors` is the flattened list in field order, then rule order, then element
/// order. `field_errors` holds the same messages grouped by field; violations of an
/// array's `element_rule` are grouped under the array's field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// All messages, flattened
    pub errors: Vec<String>,
    /// Messages per field, in the order fields were checked
    pub field_errors: IndexMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field. Empty messages are dropped.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            return;
        }
        self.field_errors
            .entry(field.into())
            .or_default()
            .push(message.clone());
        self.errors.push(message);
    }

    /// Check if there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.field_errors.get(field).map(Vec::as_slice)
    }

    /// Get all field names with errors.
    pub fn field_names(&self) -> Vec<&str> {
        self.field_errors.keys().map(String::as_str).collect()
    }

    /// Convert to Result - Ok if no errors, Err otherwise.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Convert to the API error response body.
    pub fn to_api_error(&self) -> ApiValidationError {
        let fields = self
            .field_errors
            .iter()
            .flat_map(|(field, messages)| {
                messages.iter().map(move |message| FieldErrorResponse {
                    field: field.clone(),
                    message: message.clone(),
                })
            })
            .collect();

        ApiValidationError {
            error: ErrorBody {
                error_type: "validation_error".to_string(),
                message: "Validation failed".to_string(),
                fields,
            },
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: {} error(s)", self.len())
    }
}

impl std::error::Error for ValidationErrors {}

/// API response format for validation errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiValidationError {
    pub error: ErrorBody,
}

/// Error body in API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    pub fields: Vec<FieldErrorResponse>,
}

/// Single field error in API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldErrorResponse {
    pub field: String,
    pub message: String,
}

/// A rule description that cannot be built or loaded.
#[derive(Debug, Error)]
pub enum RuleConfigError {
    #[error("invalid regex pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("malformed rule description: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failure to validate a typed value end to end.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The value broke at least one rule
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    /// The value does not serialize to a JSON object
    #[error("expected a record, found {0}")]
    NotARecord(&'static str),

    #[error("failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode validated data: {0}")]
    Decode(#[source] serde_json::Error),
}

impl CheckError {
    /// The violation report, when validation itself failed.
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            CheckError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}
