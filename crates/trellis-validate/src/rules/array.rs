//! Array rules.

use super::base::{base_builders, BaseRule};
use super::Rule;
use serde::{Deserialize, Serialize};

/// Rule for array values. Lengths count elements.
///
/// `element_rule` is applied to every element; its violations are reported under
/// the array's field, keyed `field[index]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ArrayRuleDef")]
pub struct ArrayRule {
    #[serde(flatten)]
    pub base: BaseRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<usize>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unique: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_rule: Option<Box<Rule>>,
}

impl ArrayRule {
    /// Create an empty array rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// At least `min` elements.
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// At most `max` elements.
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Exactly `len` elements.
    pub fn len(mut self, len: usize) -> Self {
        self.len = Some(len);
        self
    }

    /// No two elements may be equal.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Validate every element with `rule`.
    pub fn element_rule(mut self, rule: impl Into<Rule>) -> Self {
        self.element_rule = Some(Box::new(rule.into()));
        self
    }
}

base_builders!(ArrayRule);

/// Loaded form of [`ArrayRule`]. Unknown keys are rejected.
#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ArrayRuleDef {
    required: bool,
    message: Option<String>,
    min: Option<usize>,
    max: Option<usize>,
    len: Option<usize>,
    unique: bool,
    element_rule: Option<Box<Rule>>,
}

impl From<ArrayRuleDef> for ArrayRule {
    fn from(def: ArrayRuleDef) -> Self {
        Self {
            base: BaseRule::configured(def.required, def.message),
            min: def.min,
            max: def.max,
            len: def.len,
            unique: def.unique,
            element_rule: def.element_rule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::StringRule;
    use serde_json::json;

    #[test]
    fn nested_element_rule_deserializes() {
        let rule: ArrayRule = serde_json::from_value(json!({
            "min": 1,
            "unique": true,
            "element_rule": { "type": "string", "email": true }
        }))
        .unwrap();

        assert_eq!(rule.min, Some(1));
        assert!(rule.unique);
        assert_eq!(
            rule.element_rule.as_deref(),
            Some(&Rule::String(StringRule::new().email()))
        );
    }

    #[test]
    fn unknown_keys_fail_to_load() {
        let result = serde_json::from_value::<ArrayRule>(json!({ "uniq": true }));
        assert!(result.is_err());

        let result = serde_json::from_value::<Rule>(json!({ "type": "array", "max": 2, "unique": true }));
        assert!(result.is_ok());
    }
}
