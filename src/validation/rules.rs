//! Declarative field rules and the engine that applies them.

use serde_json::{Map, Value};
use std::collections::HashMap;
use url::Url;

use crate::catalog::types::Genre;
use crate::validation::issues::{Issue, IssueCode, ValidationErrors};

/// Whether absent fields are an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every rule's field must be present.
    Full,
    /// Only present fields are checked.
    Partial,
}

/// What a field's value must satisfy.
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// A string with at least `min_len` characters.
    Text { min_len: usize },
    /// A whole number, at least `min`. `positive` additionally rejects zero.
    Integer { min: Option<u32>, positive: bool },
    /// A string that parses as an absolute URL.
    Url,
    /// One genre tag, or a non-empty list of them, matched case-insensitively.
    GenreSet,
}

/// Overrides for the generated messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Messages {
    pub required: Option<&'static str>,
    pub invalid_type: Option<&'static str>,
    pub constraint: Option<&'static str>,
}

/// One row of a validation table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraint: Constraint,
    pub messages: Messages,
}

/// A checked and normalized field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(u32),
    Genres(Vec<Genre>),
}

/// Values that passed their rules, keyed by field name.
#[derive(Debug, Default)]
pub struct ValidatedFields {
    values: HashMap<&'static str, FieldValue>,
}

impl ValidatedFields {
    pub fn take_text(&mut self, field: &str) -> Option<String> {
        match self.values.remove(field)? {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn take_integer(&mut self, field: &str) -> Option<u32> {
        match self.values.remove(field)? {
            FieldValue::Integer(n) => Some(n),
            _ => None,
        }
    }

    pub fn take_genres(&mut self, field: &str) -> Option<Vec<Genre>> {
        match self.values.remove(field)? {
            FieldValue::Genres(g) => Some(g),
            _ => None,
        }
    }
}

/// Check `input` against `rules`, collecting every issue.
///
/// Keys with no rule are dropped.
pub fn apply_rules(
    rules: &[FieldRule],
    input: &Value,
    mode: Mode,
) -> Result<ValidatedFields, ValidationErrors> {
    let object = match input {
        Value::Object(object) => object,
        other => {
            return Err(ValidationErrors::new(vec![Issue::new(
                IssueCode::InvalidType,
                Vec::new(),
                format!("Expected object, received {}", type_name(other)),
            )]));
        }
    };

    let mut fields = ValidatedFields::default();
    let mut issues = Vec::new();

    for rule in rules {
        match check_field(rule, object, mode) {
            Ok(Some(value)) => {
                fields.values.insert(rule.field, value);
            }
            Ok(None) => {}
            Err(mut found) => issues.append(&mut found),
        }
    }

    if issues.is_empty() {
        Ok(fields)
    } else {
        Err(ValidationErrors::new(issues))
    }
}

fn check_field(
    rule: &FieldRule,
    object: &Map<String, Value>,
    mode: Mode,
) -> Result<Option<FieldValue>, Vec<Issue>> {
    let value = match object.get(rule.field) {
        Some(value) => value,
        None if mode == Mode::Partial => return Ok(None),
        None => {
            return Err(vec![rule.issue(
                IssueCode::InvalidType,
                rule.messages.required.unwrap_or("Required"),
            )]);
        }
    };

    let checked = match rule.constraint {
        Constraint::Text { min_len } => check_text(rule, value, min_len),
        Constraint::Integer { min, positive } => check_integer(rule, value, min, positive),
        Constraint::Url => check_url(rule, value),
        Constraint::GenreSet => check_genres(rule, value),
    };

    checked.map(Some)
}

impl FieldRule {
    fn issue(&self, code: IssueCode, message: impl Into<String>) -> Issue {
        Issue::new(code, vec![self.field.to_string()], message)
    }

    fn type_issue(&self, expected: &str, value: &Value) -> Issue {
        match self.messages.invalid_type {
            Some(message) => self.issue(IssueCode::InvalidType, message),
            None => self.issue(
                IssueCode::InvalidType,
                format!("Expected {}, received {}", expected, type_name(value)),
            ),
        }
    }

    fn constraint_issue(&self, code: IssueCode, default: String) -> Issue {
        match self.messages.constraint {
            Some(message) => self.issue(code, message),
            None => self.issue(code, default),
        }
    }
}

fn check_text(rule: &FieldRule, value: &Value, min_len: usize) -> Result<FieldValue, Vec<Issue>> {
    let Value::String(text) = value else {
        return Err(vec![rule.type_issue("string", value)]);
    };

    if text.chars().count() < min_len {
        return Err(vec![rule.constraint_issue(
            IssueCode::TooSmall,
            format!("String must contain at least {} character(s)", min_len),
        )]);
    }

    Ok(FieldValue::Text(text.clone()))
}

fn check_integer(
    rule: &FieldRule,
    value: &Value,
    min: Option<u32>,
    positive: bool,
) -> Result<FieldValue, Vec<Issue>> {
    let Value::Number(number) = value else {
        return Err(vec![rule.type_issue("number", value)]);
    };

    let whole: i128 = if let Some(n) = number.as_i64() {
        n as i128
    } else if let Some(n) = number.as_u64() {
        n as i128
    } else {
        match number.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 => f as i128,
            _ => {
                return Err(vec![rule.issue(
                    IssueCode::InvalidType,
                    "Expected integer, received float",
                )]);
            }
        }
    };

    let mut issues = Vec::new();
    if positive && whole <= 0 {
        issues.push(rule.constraint_issue(
            IssueCode::TooSmall,
            "Number must be greater than 0".to_string(),
        ));
    }
    if let Some(min) = min {
        if whole < min as i128 {
            issues.push(rule.constraint_issue(
                IssueCode::TooSmall,
                format!("Number must be greater than or equal to {}", min),
            ));
        }
    }
    if whole > u32::MAX as i128 {
        issues.push(rule.issue(
            IssueCode::TooBig,
            format!("Number must be less than or equal to {}", u32::MAX),
        ));
    }

    match u32::try_from(whole) {
        Ok(n) if issues.is_empty() => Ok(FieldValue::Integer(n)),
        Ok(_) => Err(issues),
        Err(_) => {
            if issues.is_empty() {
                issues.push(rule.issue(
                    IssueCode::TooSmall,
                    "Number must be greater than or equal to 0",
                ));
            }
            Err(issues)
        }
    }
}

fn check_url(rule: &FieldRule, value: &Value) -> Result<FieldValue, Vec<Issue>> {
    let Value::String(text) = value else {
        return Err(vec![rule.type_issue("string", value)]);
    };

    match Url::parse(text) {
        Ok(_) => Ok(FieldValue::Text(text.clone())),
        Err(_) => Err(vec![
            rule.constraint_issue(IssueCode::InvalidString, "Invalid url".to_string())
        ]),
    }
}

fn check_genres(rule: &FieldRule, value: &Value) -> Result<FieldValue, Vec<Issue>> {
    match value {
        Value::String(tag) => parse_genre(rule, tag, None)
            .map(|genre| FieldValue::Genres(vec![genre]))
            .map_err(|issue| vec![issue]),
        Value::Array(items) if items.is_empty() => Err(vec![rule.constraint_issue(
            IssueCode::TooSmall,
            "Array must contain at least 1 element(s)".to_string(),
        )]),
        Value::Array(items) => {
            let mut genres = Vec::with_capacity(items.len());
            let mut issues = Vec::new();

            for (index, item) in items.iter().enumerate() {
                let parsed = match item {
                    Value::String(tag) => parse_genre(rule, tag, Some(index)),
                    other => Err(Issue::new(
                        IssueCode::InvalidType,
                        vec![rule.field.to_string(), index.to_string()],
                        rule.messages.invalid_type.map(str::to_string).unwrap_or_else(|| {
                            format!("Expected string, received {}", type_name(other))
                        }),
                    )),
                };

                match parsed {
                    Ok(genre) if !genres.contains(&genre) => genres.push(genre),
                    Ok(_) => {}
                    Err(issue) => issues.push(issue),
                }
            }

            if issues.is_empty() {
                Ok(FieldValue::Genres(genres))
            } else {
                Err(issues)
            }
        }
        other => Err(vec![rule.type_issue("string", other)]),
    }
}

fn parse_genre(rule: &FieldRule, tag: &str, index: Option<usize>) -> Result<Genre, Issue> {
    let lowered = tag.to_lowercase();
    lowered.parse::<Genre>().map_err(|_| {
        let mut path = vec![rule.field.to_string()];
        path.extend(index.map(|i| i.to_string()));

        let expected = Genre::ALL
            .iter()
            .map(|g| format!("'{}'", g))
            .collect::<Vec<_>>()
            .join(" | ");
        Issue::new(
            IssueCode::InvalidEnumValue,
            path,
            format!("Invalid enum value. Expected {}, received '{}'", expected, lowered),
        )
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
