//! # timeguard-core
//!
//! Validation of timestamp attributes during configuration/schema checks.
//!
//! A value is accepted when it is an RFC3339 timestamp already written in
//! canonical UTC form. Anything else produces a single, stable reason:
//!
//! ```text
//! should be an RFC3339 string in UTC, e.g., "2222-01-01T00:00:00Z"
//! ```
//!
//! ## Key Guarantees
//!
//! 1. **Skip-if-absent**: null and unknown values always pass
//! 2. **Non-fatal**: failures are reported as diagnostics, never panics
//! 3. **Stateless**: `TimeValidator` can be shared across threads
//!
//! ## Example
//!
//! ```rust
//! use timeguard_core::{validate_time, Presence};
//!
//! assert!(validate_time("2024-01-01T00:00:00Z", Presence::Known).is_valid());
//! assert!(!validate_time("2024-01-01T00:00:00+02:00", Presence::Known).is_valid());
//! assert!(validate_time("whatever", Presence::Unknown).is_valid());
//! ```

pub mod diagnostics;
pub mod path;
pub mod types;
pub mod validator;

// Re-export main types at crate root
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use path::{AttributePath, PathStep};
pub use types::{ConfigValue, DescriptionFormat, Presence, ValidationOutcome};
pub use validator::{
    parse_time, ScopedTimeValidator, StringRequest, StringResponse, StringValidator,
    TimeFormatError, TimeValidator, DEFAULT_DESCRIPTION, EXAMPLE_TIMESTAMP,
};

/// Validate a single candidate with a shared [`TimeValidator`].
pub fn validate_time(candidate: &str, presence: Presence) -> ValidationOutcome {
    TimeValidator::new().validate(candidate, presence)
}

/// A time validator boxed behind the host-facing capability.
pub fn new_time_validator() -> Box<dyn StringValidator + Send + Sync> {
    Box::new(TimeValidator::new())
}
