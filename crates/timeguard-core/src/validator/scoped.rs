//! Caller-owned time validator that remembers its last failure.
//!
//! Some hosts render a validator's description separately from the call that
//! validated the value. This wrapper keeps the most recent failure reason so
//! `description()` can return the specific message instead of the generic one.
//! Create one per validation attempt; `validate` takes `&mut self`, so an
//! instance cannot be shared across threads without the caller synchronizing.

use crate::diagnostics::Diagnostic;
use crate::types::{DescriptionFormat, Presence, ValidationOutcome};

use super::{StringRequest, StringResponse, StringValidator, TimeValidator};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopedTimeValidator {
    inner: TimeValidator,
    message: Option<String>,
}

impl ScopedTimeValidator {
    /// Create a validator with no recorded failure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and remember the reason if the value is rejected.
    pub fn validate(&mut self, candidate: &str, presence: Presence) -> ValidationOutcome {
        let outcome = self.inner.validate(candidate, presence);
        if let Some(reason) = outcome.reason() {
            self.message = Some(reason.to_string());
        }
        outcome
    }

    /// The last failure reason, or the generic description if none.
    pub fn description(&self, format: DescriptionFormat) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => self.inner.description(format),
        }
    }

    pub fn markdown_description(&self) -> String {
        self.description(DescriptionFormat::Markdown)
    }

    /// The last recorded failure reason, if any.
    pub fn last_reason(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Validate a request, reporting the diagnostic with this instance's
    /// description.
    pub fn validate_string(&mut self, request: &StringRequest, response: &mut StringResponse) {
        let value = request.config_value.value_str();
        let outcome = self.validate(value, request.config_value.presence());
        if !outcome.is_valid() {
            tracing::debug!(path = %request.path, "attribute value rejected");
            response
                .diagnostics
                .push(Diagnostic::invalid_attribute_value_match(
                    request.path.clone(),
                    self.description(DescriptionFormat::Plain),
                    value,
                ));
        }
    }
}
