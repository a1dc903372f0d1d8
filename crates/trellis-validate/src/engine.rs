//! The validation pass: per-rule checks and aggregation into a result.

use crate::description::RuleDescription;
use crate::error::{CheckError, ValidationErrors};
use crate::message::Violation;
use crate::patterns;
use crate::rules::{ArrayRule, BaseRule, NumberRule, Outcome, Rule, StringRule};
use crate::Record;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt::Write;

/// Outcome of validating a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    /// No rule was broken. Fields marked `required` are present in `data`.
    Valid { data: Record },
    /// At least one rule was broken.
    Invalid(ValidationErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    /// The validated record, if valid.
    pub fn data(&self) -> Option<&Record> {
        match self {
            ValidationResult::Valid { data } => Some(data),
            ValidationResult::Invalid(_) => None,
        }
    }

    /// The violation report, if invalid.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            ValidationResult::Valid { .. } => None,
            ValidationResult::Invalid(errors) => Some(errors),
        }
    }

    pub fn into_result(self) -> Result<Record, ValidationErrors> {
        match self {
            ValidationResult::Valid { data } => Ok(data),
            ValidationResult::Invalid(errors) => Err(errors),
        }
    }

    /// Decode the validated record into `T`.
    ///
    /// Fields the rules mark `required` can be non-optional in `T`.
    pub fn narrow<T: DeserializeOwned>(self) -> Result<T, CheckError> {
        let data = self.into_result()?;
        serde_json::from_value(Value::Object(data)).map_err(CheckError::Decode)
    }
}

/// Validate `data` against `rules`.
///
/// Every field named in `rules` is checked with every one of its rules, and every
/// violation is collected; fields the description does not name are ignored. The
/// record is returned unchanged when nothing is violated.
pub fn validate(data: &Record, rules: &RuleDescription) -> ValidationResult {
    let _span = tracing::debug_span!("validate", fields = rules.len()).entered();

    let mut report = ValidationErrors::new();
    for (field, field_rules) in rules.iter() {
        tracing::trace!(field, rules = field_rules.len(), "checking field");

        let value = data.get(field);
        let mut sink = FieldSink {
            field,
            report: &mut report,
        };
        for rule in field_rules {
            check_rule(field, value, rule, data, &mut sink);
        }
    }

    tracing::debug!(violations = report.len(), "record validated");

    match report.into_result() {
        Ok(()) => ValidationResult::Valid { data: data.clone() },
        Err(errors) => ValidationResult::Invalid(errors),
    }
}

/// Validate any value that serializes to a JSON object.
pub fn validate_value<T>(value: &T, rules: &RuleDescription) -> Result<ValidationResult, CheckError>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(value).map_err(CheckError::Encode)? {
        Value::Object(record) => Ok(validate(&record, rules)),
        other => Err(CheckError::NotARecord(kind_of(&other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Collects the messages of one top-level field.
struct FieldSink<'a> {
    field: &'a str,
    report: &'a mut ValidationErrors,
}

impl FieldSink<'_> {
    /// Report a failed built-in check on `key`.
    fn violation(&mut self, key: &str, base: &BaseRule, violation: Violation) {
        tracing::trace!(key, code = violation.code(), "rule violated");
        let message = match &base.message {
            Some(message) => message.clone(),
            None => violation.message(key),
        };
        self.report.add(self.field, message);
    }

    /// Report the result of a callback; `violation` supplies the generic message.
    fn outcome(&mut self, key: &str, base: &BaseRule, outcome: Outcome, violation: Violation) {
        match outcome {
            Outcome::Pass => {}
            Outcome::Fail => self.violation(key, base, violation),
            Outcome::Reject(message) => {
                tracing::trace!(key, code = violation.code(), "rule rejected");
                self.report.add(self.field, message);
            }
        }
    }
}

/// Whether a value counts as filled in for `required`.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// Apply one rule to one value. `key` names the value in messages: the field
/// itself, or `field[index]` for array elements.
fn check_rule(
    key: &str,
    value: Option<&Value>,
    rule: &Rule,
    record: &Record,
    sink: &mut FieldSink<'_>,
) {
    let base = rule.base();

    // A missing key and an explicit null are both "not provided"
    let Some(value) = value.filter(|v| !v.is_null()) else {
        if base.required {
            sink.violation(key, base, Violation::Required);
        }
        return;
    };

    if base.required && !is_present(value) {
        sink.violation(key, base, Violation::Required);
        return;
    }

    if let Some(depends_on) = &base.depends_on {
        sink.outcome(key, base, depends_on.call(record), Violation::DependencyUnmet);
    }

    match (rule, value) {
        (Rule::String(rule), Value::String(s)) => check_string(key, s, rule, sink),
        (Rule::Number(rule), Value::Number(n)) => {
            if let Some(n) = n.as_f64() {
                check_number(key, n, rule, sink);
            }
        }
        (Rule::Array(rule), Value::Array(items)) => check_array(key, items, rule, record, sink),
        // A rule kind that does not match the value only runs the shared checks
        _ => {}
    }

    if let Some(validator) = &base.validator {
        sink.outcome(key, base, validator.call(value, record), Violation::ValidatorFailed);
    }
}

fn check_string(key: &str, value: &str, rule: &StringRule, sink: &mut FieldSink<'_>) {
    let base = &rule.base;
    let len = value.chars().count();

    if let Some(expected) = rule.len {
        if len != expected {
            sink.violation(key, base, Violation::StringLen(expected));
        }
    }
    if let Some(min) = rule.min {
        if len < min {
            sink.violation(key, base, Violation::StringMin(min));
        }
    }
    if let Some(max) = rule.max {
        if len > max {
            sink.violation(key, base, Violation::StringMax(max));
        }
    }
    if let Some(pattern) = &rule.regex {
        if !pattern.is_match(value) {
            sink.violation(key, base, Violation::Format);
        }
    }
    if rule.email && !patterns::is_email(value) {
        sink.violation(key, base, Violation::Email);
    }
    if rule.url && !patterns::is_url(value) {
        sink.violation(key, base, Violation::Url);
    }
    if rule.phone && !patterns::is_phone(value) {
        sink.violation(key, base, Violation::Phone);
    }
}

fn check_number(key: &str, value: f64, rule: &NumberRule, sink: &mut FieldSink<'_>) {
    if let Some(min) = rule.min {
        if value < min {
            sink.violation(key, &rule.base, Violation::NumberMin(min));
        }
    }
    if let Some(max) = rule.max {
        if value > max {
            sink.violation(key, &rule.base, Violation::NumberMax(max));
        }
    }
}

fn check_array(
    key: &str,
    items: &[Value],
    rule: &ArrayRule,
    record: &Record,
    sink: &mut FieldSink<'_>,
) {
    let base = &rule.base;
    let count = items.len();

    if let Some(expected) = rule.len {
        if count != expected {
            sink.violation(key, base, Violation::ArrayLen(expected));
        }
    }
    if let Some(min) = rule.min {
        if count < min {
            sink.violation(key, base, Violation::ArrayMin(min));
        }
    }
    if let Some(max) = rule.max {
        if count > max {
            sink.violation(key, base, Violation::ArrayMax(max));
        }
    }
    if rule.unique && has_duplicates(items) {
        sink.violation(key, base, Violation::NotUnique);
    }
    if let Some(element_rule) = &rule.element_rule {
        for (index, item) in items.iter().enumerate() {
            let element_key = format!("{key}[{index}]");
            check_rule(&element_key, Some(item), element_rule, record, sink);
        }
    }
}

fn has_duplicates(items: &[Value]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().any(|item| {
        let mut key = String::new();
        write_unique_key(item, &mut key);
        !seen.insert(key)
    })
}

/// Write a key that is equal for equal values. Numbers compare by value, so
/// `1` and `1.0` collide; object keys are sorted.
fn write_unique_key(value: &Value, key: &mut String) {
    match value {
        Value::Null => key.push('n'),
        Value::Bool(true) => key.push('t'),
        Value::Bool(false) => key.push('f'),
        Value::Number(n) => {
            let n = n.as_f64().unwrap_or(f64::NAN);
            // -0.0 and 0.0 are the same number
            let n = if n == 0.0 { 0.0 } else { n };
            let _ = write!(key, "#{:x};", n.to_bits());
        }
        Value::String(s) => {
            let _ = write!(key, "s{}:{s}", s.len());
        }
        Value::Array(items) => {
            key.push('[');
            for item in items {
                write_unique_key(item, key);
            }
            key.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            key.push('{');
            for (name, item) in entries {
                let _ = write!(key, "{}:{name}", name.len());
                write_unique_key(item, key);
            }
            key.push('}');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    fn messages(data: Value, rules: &RuleDescription) -> Vec<String> {
        match validate(&record(data), rules) {
            ValidationResult::Valid { .. } => Vec::new(),
            ValidationResult::Invalid(errors) => errors.errors,
        }
    }

    #[test]
    fn presence() {
        assert!(!is_present(&Value::Null));
        assert!(!is_present(&json!("")));
        assert!(!is_present(&json!(" \t\n")));
        assert!(!is_present(&json!([])));
        assert!(is_present(&json!(0)));
        assert!(is_present(&json!(false)));
        assert!(is_present(&json!({})));
        assert!(is_present(&json!(" x ")));
    }

    #[test]
    fn duplicates_by_value() {
        assert!(has_duplicates(&[json!(1), json!(2), json!(2), json!(3)]));
        assert!(!has_duplicates(&[json!(1), json!(2), json!(3), json!(4)]));
        assert!(has_duplicates(&[json!({"a": 1}), json!({"a": 1})]));
        assert!(!has_duplicates(&[]));
    }

    #[test]
    fn duplicates_compare_numbers_by_value() {
        assert!(has_duplicates(&[json!(1), json!(1.0)]));
        assert!(has_duplicates(&[json!(0), json!(-0.0)]));
        assert!(has_duplicates(&[json!([1, 2]), json!([1.0, 2])]));
        assert!(has_duplicates(&[json!({"a": 1, "b": 2}), json!({"b": 2.0, "a": 1})]));
        assert!(!has_duplicates(&[json!(1), json!("1")]));
        assert!(!has_duplicates(&[json!(1), json!(1.5)]));
        assert!(!has_duplicates(&[json!(["a", "b"]), json!(["ab"])]));
        assert!(!has_duplicates(&[json!({"a": null}), json!({})]));
    }

    #[test]
    fn duplicates_in_large_arrays() {
        let mut items: Vec<Value> = (0..50_000).map(Value::from).collect();
        assert!(!has_duplicates(&items));

        items.push(json!(49_999.0));
        assert!(has_duplicates(&items));
    }

    #[test]
    fn unique_rule_treats_integer_and_float_as_equal() {
        let rules = RuleDescription::new().field("ids", Rule::array().unique());
        assert_eq!(
            messages(json!({ "ids": [1, 1.0] }), &rules),
            ["ids elements must be unique"]
        );
        assert!(messages(json!({ "ids": [1, 2.5] }), &rules).is_empty());
    }

    #[test]
    fn required_stops_only_its_own_rule() {
        let rules = RuleDescription::new().field(
            "password",
            [
                Rule::from(Rule::string().required().min(6)),
                Rule::string().min(6).message("too short").into(),
            ],
        );

        // The second rule still runs on the (provided, blank) value
        assert_eq!(
            messages(json!({ "password": "  " }), &rules),
            ["password is required", "too short"]
        );
    }

    #[test]
    fn absent_optional_value_skips_callbacks() {
        let rules = RuleDescription::new().field(
            "nickname",
            Rule::string()
                .depends_on(|_| false)
                .validator(|_, _| "rejected"),
        );

        assert!(messages(json!({}), &rules).is_empty());
        assert!(messages(json!({ "nickname": null }), &rules).is_empty());
        assert_eq!(messages(json!({ "nickname": "x" }), &rules).len(), 2);
    }

    #[test]
    fn callbacks_run_in_order_around_type_checks() {
        let rules = RuleDescription::new().field(
            "code",
            Rule::string()
                .len(4)
                .depends_on(|_| "first")
                .validator(|_, _| "last"),
        );

        assert_eq!(
            messages(json!({ "code": "123" }), &rules),
            ["first", "code length must be 4", "last"]
        );
    }

    #[test]
    fn message_override_applies_to_every_check_of_the_rule() {
        let rules = RuleDescription::new().field(
            "handle",
            Rule::string().min(5).regex(regex::Regex::new("^@").unwrap()).message("bad handle"),
        );

        assert_eq!(
            messages(json!({ "handle": "abc" }), &rules),
            ["bad handle", "bad handle"]
        );
    }

    #[test]
    fn empty_reject_message_is_not_recorded() {
        let rules =
            RuleDescription::new().field("x", Rule::generic().validator(|_, _| String::new()));
        assert!(messages(json!({ "x": 1 }), &rules).is_empty());
    }

    #[test]
    fn mismatched_rule_kind_is_a_no_op() {
        let rules = RuleDescription::new()
            .field("age", Rule::string().min(10).email())
            .field("tags", Rule::number().min(5))
            .field("name", Rule::array().element_rule(Rule::string().email()));

        let data = json!({ "age": 3, "tags": ["a"], "name": "not-an-array" });
        assert!(messages(data, &rules).is_empty());
    }

    #[test]
    fn element_messages_join_the_parent_field() {
        let rules = RuleDescription::new().field(
            "scores",
            Rule::array()
                .max(2)
                .element_rule(Rule::number().min(0).max(100)),
        );

        let result = validate(&record(json!({ "scores": [50, -1, 101] })), &rules);
        let errors = result.errors().unwrap();
        assert_eq!(
            errors.get("scores").unwrap(),
            [
                "scores length must not be greater than 2",
                "scores[1] must not be less than 0",
                "scores[2] must not be greater than 100",
            ]
        );
        assert!(errors.get("scores[1]").is_none());
    }

    #[test]
    fn nested_arrays_compose_keys() {
        let rules = RuleDescription::new().field(
            "grid",
            Rule::array().element_rule(Rule::array().element_rule(Rule::boolean().required())),
        );

        assert_eq!(
            messages(json!({ "grid": [[true], [false, null]] }), &rules),
            ["grid[1][1] is required"]
        );
    }

    #[test]
    fn validator_sees_the_whole_record() {
        let rules = RuleDescription::new().field(
            "confirm",
            Rule::string().required().validator(|value, record| {
                if Some(value) == record.get("password") {
                    Ok(())
                } else {
                    Err("passwords differ".to_string())
                }
            }),
        );

        assert!(messages(json!({ "password": "a", "confirm": "a" }), &rules).is_empty());
        assert_eq!(
            messages(json!({ "password": "a", "confirm": "b" }), &rules),
            ["passwords differ"]
        );
    }

    #[test]
    fn validate_value_requires_an_object() {
        let rules = RuleDescription::new();
        let err = validate_value(&vec![1, 2], &rules).unwrap_err();
        assert!(matches!(err, CheckError::NotARecord("array")));
    }

    #[test]
    fn narrow_decodes_valid_data() {
        #[derive(Debug, serde::Deserialize)]
        struct User {
            name: String,
            age: u32,
        }

        let rules = RuleDescription::new()
            .field("name", Rule::string().required())
            .field("age", Rule::number().required().min(18));

        let user: User = validate(&record(json!({ "name": "John", "age": 30 })), &rules)
            .narrow()
            .unwrap();
        assert_eq!(user.name, "John");
        assert_eq!(user.age, 30);

        let err = validate(&record(json!({ "age": 30 })), &rules)
            .narrow::<User>()
            .unwrap_err();
        assert!(err.violations().is_some());
    }
}
