//! String rules.

use super::base::{base_builders, BaseRule};
use crate::error::RuleConfigError;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A compiled regex that serializes as its source pattern.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Compile a pattern.
    pub fn new(pattern: &str) -> Result<Self, RuleConfigError> {
        Regex::new(pattern)
            .map(Self)
            .map_err(|source| RuleConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the pattern matches anywhere in `value`.
    pub fn is_match(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self(regex)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pattern = String::deserialize(deserializer)?;
        Pattern::new(&pattern).map_err(serde::de::Error::custom)
    }
}

/// Rule for string values. Lengths count characters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StringRuleDef")]
pub struct StringRule {
    #[serde(flatten)]
    pub base: BaseRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<Pattern>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub email: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub url: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub phone: bool,
}

impl StringRule {
    /// Create an empty string rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// At least `min` characters.
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// At most `max` characters.
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Exactly `len` characters.
    pub fn len(mut self, len: usize) -> Self {
        self.len = Some(len);
        self
    }

    /// Must match `regex` somewhere in the value. Anchor it for a full match.
    pub fn regex(mut self, regex: impl Into<Pattern>) -> Self {
        self.regex = Some(regex.into());
        self
    }

    /// Compile `pattern` and require a match.
    pub fn pattern(self, pattern: &str) -> Result<Self, RuleConfigError> {
        Ok(self.regex(Pattern::new(pattern)?))
    }

    /// Must be an email address.
    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Must be a URL.
    pub fn url(mut self) -> Self {
        self.url = true;
        self
    }

    /// Must be a mobile phone number.
    pub fn phone(mut self) -> Self {
        self.phone = true;
        self
    }
}

base_builders!(StringRule);

/// Loaded form of [`StringRule`]. Unknown keys are rejected.
#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StringRuleDef {
    required: bool,
    message: Option<String>,
    min: Option<usize>,
    max: Option<usize>,
    len: Option<usize>,
    regex: Option<Pattern>,
    email: bool,
    url: bool,
    phone: bool,
}

impl From<StringRuleDef> for StringRule {
    fn from(def: StringRuleDef) -> Self {
        Self {
            base: BaseRule::configured(def.required, def.message),
            min: def.min,
            max: def.max,
            len: def.len,
            regex: def.regex,
            email: def.email,
            url: def.url,
            phone: def.phone,
        }
    }
}
