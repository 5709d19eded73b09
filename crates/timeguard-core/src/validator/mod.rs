//! String attribute validators.
//!
//! A host schema framework drives validators through [`StringValidator`]:
//! it asks for a human-readable description when rendering docs and calls
//! [`StringValidator::validate_string`] for each configured attribute.

mod scoped;
mod time;

pub use scoped::ScopedTimeValidator;
pub use time::{
    parse_time, TimeFormatError, TimeValidator, DEFAULT_DESCRIPTION, EXAMPLE_TIMESTAMP,
};

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::path::AttributePath;
use crate::types::{ConfigValue, DescriptionFormat, Presence, ValidationOutcome};

/// A validation request for one string attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StringRequest {
    /// Attribute being validated
    pub path: AttributePath,

    /// Value as configured
    pub config_value: ConfigValue,
}

impl StringRequest {
    /// Create a request for the attribute at `path`.
    pub fn new(path: AttributePath, config_value: impl Into<ConfigValue>) -> Self {
        Self {
            path,
            config_value: config_value.into(),
        }
    }
}

/// Collects diagnostics produced while validating a request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StringResponse {
    pub diagnostics: Diagnostics,
}

impl StringResponse {
    /// Create a response with no diagnostics.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Capability expected by the host framework for string attributes.
pub trait StringValidator {
    /// Describe what the validator expects.
    fn description(&self, format: DescriptionFormat) -> String;

    /// Markdown rendering of the description.
    fn markdown_description(&self) -> String {
        self.description(DescriptionFormat::Markdown)
    }

    /// Decide whether `candidate` is acceptable.
    ///
    /// Null and unknown values must be reported as valid; rejecting absent
    /// values is the job of other validators.
    fn validate(&self, candidate: &str, presence: Presence) -> ValidationOutcome;

    /// Validate a request and append a diagnostic on failure.
    fn validate_string(&self, request: &StringRequest, response: &mut StringResponse) {
        let value = request.config_value.value_str();
        if let ValidationOutcome::Invalid { reason } =
            self.validate(value, request.config_value.presence())
        {
            tracing::debug!(path = %request.path, "attribute value rejected");
            response
                .diagnostics
                .push(Diagnostic::invalid_attribute_value_match(
                    request.path.clone(),
                    reason,
                    value,
                ));
        }
    }
}
