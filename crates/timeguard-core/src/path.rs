//! Attribute paths.
//!
//! A path identifies the attribute being validated. Validators never inspect
//! it; it is echoed back in diagnostics so the host can point at the offending
//! attribute.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step in an attribute path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PathStep {
    /// Named attribute (e.g. `expires_at`)
    Attribute(String),

    /// Map element key
    ElementKey(String),

    /// List element index
    ElementIndex(usize),
}

/// Ordered path from the schema root to an attribute.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct AttributePath {
    steps: Vec<PathStep>,
}

impl AttributePath {
    /// The empty path, referring to the schema root.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Path starting at a top-level attribute.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            steps: vec![PathStep::Attribute(name.into())],
        }
    }

    pub fn at_name(mut self, name: impl Into<String>) -> Self {
        self.steps.push(PathStep::Attribute(name.into()));
        self
    }

    pub fn at_map_key(mut self, key: impl Into<String>) -> Self {
        self.steps.push(PathStep::ElementKey(key.into()));
        self
    }

    pub fn at_list_index(mut self, index: usize) -> Self {
        self.steps.push(PathStep::ElementIndex(index));
        self
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if i == 0 => write!(f, "{}", name)?,
                PathStep::Attribute(name) => write!(f, ".{}", name)?,
                PathStep::ElementKey(key) => write!(f, "[{:?}]", key)?,
                PathStep::ElementIndex(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}
