//! Core value types shared by validators and the host glue.

use serde::{Deserialize, Serialize};

/// Whether a configuration value is absent, not yet resolved, or present.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// The attribute was not configured.
    Null,

    /// The value will only be known later (e.g. computed during apply).
    Unknown,

    /// The value is concretely present.
    Known,
}

impl Presence {
    /// True for `Null` and `Unknown`, which validators skip.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Presence::Null | Presence::Unknown)
    }
}

/// A string attribute value as the host framework tracks it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum ConfigValue {
    Null,
    Unknown,
    Known(String),
}

impl ConfigValue {
    /// Wrap a concrete string.
    pub fn known(value: impl Into<String>) -> Self {
        ConfigValue::Known(value.into())
    }

    pub fn presence(&self) -> Presence {
        match self {
            ConfigValue::Null => Presence::Null,
            ConfigValue::Unknown => Presence::Unknown,
            ConfigValue::Known(_) => Presence::Known,
        }
    }

    /// The string value, or `""` when the value is null or unknown.
    pub fn value_str(&self) -> &str {
        match self {
            ConfigValue::Known(value) => value,
            ConfigValue::Null | ConfigValue::Unknown => "",
        }
    }
}

impl From<Option<String>> for ConfigValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(v) => ConfigValue::Known(v),
            None => ConfigValue::Null,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Known(value.to_string())
    }
}

/// Result of validating a single value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid,
    Invalid { reason: String },
}

impl ValidationOutcome {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ValidationOutcome::Invalid {
            reason: reason.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// The failure reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid { reason } => Some(reason),
        }
    }
}

/// Rendering context for validator descriptions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionFormat {
    #[default]
    Plain,
    Markdown,
}
