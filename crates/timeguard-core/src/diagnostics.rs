//! Diagnostics reported back to the host framework.
//!
//! Validation failures are never fatal here. They are collected as
//! diagnostics and the host decides whether they block further processing.

use serde::{Deserialize, Serialize};

use crate::path::AttributePath;

/// Title used for values that fail a format match.
pub const INVALID_VALUE_MATCH_TITLE: &str = "Invalid Attribute Value Match";

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,

    /// Never produced by the time validator; available to host validators
    /// that report non-blocking findings into the same collection.
    Warning,
}

/// A single validation finding tied to an attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,

    /// Attribute the finding refers to
    pub path: AttributePath,

    /// Short title (e.g. "Invalid Attribute Value Match")
    pub title: String,

    /// Validator description explaining what was expected
    pub summary: String,

    /// Full sentence combining path, summary and value
    pub detail: String,

    /// The rejected value, verbatim
    pub invalid_value: String,
}

impl Diagnostic {
    /// Build the error diagnostic for a value that does not match the
    /// expected format.
    pub fn invalid_attribute_value_match(
        path: AttributePath,
        description: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let summary = description.into();
        let invalid_value = value.into();
        let detail = format!("Attribute {} {}, got: {}", path, summary, invalid_value);

        Self {
            severity: Severity::Error,
            path,
            title: INVALID_VALUE_MATCH_TITLE.to_string(),
            summary,
            detail,
            invalid_value,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Ordered collection of diagnostics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    /// True if any diagnostic has error severity.
    pub fn has_error(&self) -> bool {
        self.entries.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|d| d.is_error()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Render all diagnostics as a JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
