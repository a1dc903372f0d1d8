//! Rule kinds and the per-field rule list.

mod array;
mod base;
mod number;
mod string;

pub use array::ArrayRule;
pub use base::{BaseRule, Outcome, RecordCheck, ValueCheck};
pub use number::{BooleanRule, GenericRule, NumberRule};
pub use string::{Pattern, StringRule};

use serde::{Deserialize, Serialize};

/// A rule for one field, by the kind of value it expects.
///
/// Type-specific checks only run when the runtime value has the matching kind:
/// a [`StringRule`] applied to a number still runs its shared checks, but none of
/// its length or format checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rule {
    String(StringRule),
    Number(NumberRule),
    Boolean(BooleanRule),
    Array(ArrayRule),
    Generic(GenericRule),
}

impl Rule {
    /// Start a string rule.
    pub fn string() -> StringRule {
        StringRule::new()
    }

    /// Start a number rule.
    pub fn number() -> NumberRule {
        NumberRule::new()
    }

    /// Start a boolean rule.
    pub fn boolean() -> BooleanRule {
        BooleanRule::new()
    }

    /// Start an array rule.
    pub fn array() -> ArrayRule {
        ArrayRule::new()
    }

    /// Start a rule with only the shared checks.
    pub fn generic() -> GenericRule {
        GenericRule::new()
    }

    /// The checks shared by every kind.
    pub fn base(&self) -> &BaseRule {
        match self {
            Rule::String(rule) => &rule.base,
            Rule::Number(rule) => &rule.base,
            Rule::Boolean(rule) => &rule.base,
            Rule::Array(rule) => &rule.base,
            Rule::Generic(rule) => &rule.base,
        }
    }

    /// Name of the rule kind, as used in serialized descriptions.
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::String(_) => "string",
            Rule::Number(_) => "number",
            Rule::Boolean(_) => "boolean",
            Rule::Array(_) => "array",
            Rule::Generic(_) => "generic",
        }
    }
}

impl From<StringRule> for Rule {
    fn from(rule: StringRule) -> Self {
        Rule::String(rule)
    }
}

impl From<NumberRule> for Rule {
    fn from(rule: NumberRule) -> Self {
        Rule::Number(rule)
    }
}

impl From<BooleanRule> for Rule {
    fn from(rule: BooleanRule) -> Self {
        Rule::Boolean(rule)
    }
}

impl From<ArrayRule> for Rule {
    fn from(rule: ArrayRule) -> Self {
        Rule::Array(rule)
    }
}

impl From<GenericRule> for Rule {
    fn from(rule: GenericRule) -> Self {
        Rule::Generic(rule)
    }
}

/// The rules attached to one field: a single rule or an ordered list.
///
/// Every rule in a list is applied and every violation is collected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldRules {
    One(Rule),
    Many(Vec<Rule>),
}

impl FieldRules {
    /// The rules in application order.
    pub fn as_slice(&self) -> &[Rule] {
        match self {
            FieldRules::One(rule) => std::slice::from_ref(rule),
            FieldRules::Many(rules) => rules,
        }
    }
}

macro_rules! field_rules_from {
    ($($ty:ty),+) => {$(
        impl From<$ty> for FieldRules {
            fn from(rule: $ty) -> Self {
                FieldRules::One(rule.into())
            }
        }
    )+};
}

field_rules_from!(Rule, StringRule, NumberRule, BooleanRule, ArrayRule, GenericRule);

impl From<Vec<Rule>> for FieldRules {
    fn from(rules: Vec<Rule>) -> Self {
        FieldRules::Many(rules)
    }
}

impl<const N: usize> From<[Rule; N]> for FieldRules {
    fn from(rules: [Rule; N]) -> Self {
        FieldRules::Many(rules.into())
    }
}
