//! Validation issue reporting.

use serde::Serialize;
use std::fmt;

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Missing value or wrong JSON type.
    InvalidType,
    /// Below a minimum length, count or value.
    TooSmall,
    /// Above a maximum value.
    TooBig,
    /// String present but in the wrong format (e.g. not a URL).
    InvalidString,
    /// Value outside an enumeration.
    InvalidEnumValue,
}

/// A single field-level problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub code: IssueCode,
    /// Location of the offending value; empty for the body itself.
    pub path: Vec<String>,
    pub message: String,
}

impl Issue {
    pub fn new(code: IssueCode, path: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path,
            message: message.into(),
        }
    }

    /// Top-level field the issue belongs to, if any.
    pub fn field(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }
}

/// Every issue found in one payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    issues: Vec<Issue>,
}

impl ValidationErrors {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    /// Names of the offending top-level fields, in report order.
    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().filter_map(Issue::field).collect()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if issue.path.is_empty() {
                write!(f, "{}", issue.message)?;
            } else {
                write!(f, "{}: {}", issue.path.join("."), issue.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
