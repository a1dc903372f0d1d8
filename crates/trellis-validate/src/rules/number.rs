//! Number rules.

use super::base::{base_builders, BaseRule};
use serde::{Deserialize, Serialize};

/// Rule for numeric values. Bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "NumberRuleDef")]
pub struct NumberRule {
    #[serde(flatten)]
    pub base: BaseRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl NumberRule {
    /// Create an empty number rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Not less than `min`.
    pub fn min(mut self, min: impl Into<f64>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Not greater than `max`.
    pub fn max(mut self, max: impl Into<f64>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Shorthand for `min(min).max(max)`.
    pub fn range(self, min: impl Into<f64>, max: impl Into<f64>) -> Self {
        self.min(min).max(max)
    }
}

/// Rule for boolean values: only the shared checks apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BaseRuleDef")]
pub struct BooleanRule {
    #[serde(flatten)]
    pub base: BaseRule,
}

impl BooleanRule {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Rule for values of any shape: only the shared checks apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BaseRuleDef")]
pub struct GenericRule {
    #[serde(flatten)]
    pub base: BaseRule,
}

impl GenericRule {
    pub fn new() -> Self {
        Self::default()
    }
}

base_builders!(NumberRule, BooleanRule, GenericRule);

/// Loaded form of [`NumberRule`]. Unknown keys are rejected.
#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct NumberRuleDef {
    required: bool,
    message: Option<String>,
    min: Option<f64>,
    max: Option<f64>,
}

impl From<NumberRuleDef> for NumberRule {
    fn from(def: NumberRuleDef) -> Self {
        Self {
            base: BaseRule::configured(def.required, def.message),
            min: def.min,
            max: def.max,
        }
    }
}

/// Loaded form of the kinds with only shared checks.
#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct BaseRuleDef {
    required: bool,
    message: Option<String>,
}

impl From<BaseRuleDef> for BooleanRule {
    fn from(def: BaseRuleDef) -> Self {
        Self {
            base: BaseRule::configured(def.required, def.message),
        }
    }
}

impl From<BaseRuleDef> for GenericRule {
    fn from(def: BaseRuleDef) -> Self {
        Self {
            base: BaseRule::configured(def.required, def.message),
        }
    }
}
