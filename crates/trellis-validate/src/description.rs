//! Rule descriptions: which rules apply to which field.

use crate::engine::{validate, ValidationResult};
use crate::error::RuleConfigError;
use crate::rules::{FieldRules, Rule};
use crate::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field name to rules, checked in insertion order.
///
/// Descriptions are plain data: build one in code, or load one from JSON where
/// each field maps to a rule object or a list of them:
///
/// ```json
/// {
///   "username": { "type": "string", "required": true, "min": 3 },
///   "tags": { "type": "array", "unique": true, "element_rule": { "type": "string" } }
/// }
/// ```
///
/// Custom `validator`/`depends_on` callbacks can only be attached in code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleDescription {
    fields: IndexMap<String, FieldRules>,
}

impl RuleDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add rules for a field, replacing any it already had.
    pub fn field(mut self, name: impl Into<String>, rules: impl Into<FieldRules>) -> Self {
        self.insert(name, rules);
        self
    }

    /// Set the rules for a field. A replaced field keeps its position.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        rules: impl Into<FieldRules>,
    ) -> Option<FieldRules> {
        self.fields.insert(name.into(), rules.into())
    }

    /// Stop validating a field.
    pub fn remove(&mut self, name: &str) -> Option<FieldRules> {
        self.fields.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&FieldRules> {
        self.fields.get(name)
    }

    /// Fields with their rules, in check order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.fields
            .iter()
            .map(|(name, rules)| (name.as_str(), rules.as_slice()))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Load a description from JSON text.
    pub fn from_json(json: &str) -> Result<Self, RuleConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a description from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, RuleConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Validate `data` against this description.
    pub fn validate(&self, data: &Record) -> ValidationResult {
        validate(data, self)
    }
}

impl<K, R> FromIterator<(K, R)> for RuleDescription
where
    K: Into<String>,
    R: Into<FieldRules>,
{
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, rules)| (name.into(), rules.into()))
                .collect(),
        }
    }
}
