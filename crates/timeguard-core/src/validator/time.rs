//! RFC3339 UTC timestamp validation.
//!
//! A value passes only if it parses as RFC3339 and its canonical rendering is
//! unchanged when the timestamp is converted to UTC. Both renderings come from
//! the same chrono routine, so the check is textual rather than a comparison
//! of offset fields.

use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use thiserror::Error;

use crate::types::{DescriptionFormat, Presence, ValidationOutcome};

use super::StringValidator;

/// Description returned before any failure has been recorded.
pub const DEFAULT_DESCRIPTION: &str = "value must be an RFC3339 time string";

/// Example value quoted in every failure message.
pub const EXAMPLE_TIMESTAMP: &str = "2222-01-01T00:00:00Z";

/// The one way a timestamp can be rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormatError {
    /// Not RFC3339, or RFC3339 but not in canonical UTC form.
    #[error("should be an RFC3339 string in UTC, e.g., {:?}", EXAMPLE_TIMESTAMP)]
    FormatOrOffsetInvalid,
}

/// Parse an RFC3339 timestamp that must already be in canonical UTC form.
pub fn parse_time(input: &str) -> Result<DateTime<Utc>, TimeFormatError> {
    if !has_strict_markers(input) {
        return Err(TimeFormatError::FormatOrOffsetInvalid);
    }

    let parsed = DateTime::parse_from_rfc3339(input)
        .map_err(|_| TimeFormatError::FormatOrOffsetInvalid)?;

    // chrono encodes a :60 second as nanoseconds past 1e9
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(TimeFormatError::FormatOrOffsetInvalid);
    }

    let utc = parsed.with_timezone(&Utc);
    let as_given = parsed.to_rfc3339_opts(SecondsFormat::AutoSi, true);
    let as_utc = utc.to_rfc3339_opts(SecondsFormat::AutoSi, true);
    if as_given != as_utc {
        return Err(TimeFormatError::FormatOrOffsetInvalid);
    }

    Ok(utc)
}

/// chrono also takes ' ' or 't' as the separator and 'z' as the UTC suffix;
/// the RFC3339 grammar used here only allows the uppercase forms.
fn has_strict_markers(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.get(10) == Some(&b'T') && bytes.last() != Some(&b'z')
}

/// Validates that a string attribute is an RFC3339 timestamp in UTC.
///
/// Null and unknown values are skipped. The validator holds no state and can
/// be shared freely; use [`super::ScopedTimeValidator`] when a caller needs
/// the last failure reason from a separate description call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeValidator;

impl TimeValidator {
    /// Create a new time validator.
    pub fn new() -> Self {
        Self
    }
}

impl StringValidator for TimeValidator {
    fn description(&self, _format: DescriptionFormat) -> String {
        DEFAULT_DESCRIPTION.to_string()
    }

    fn validate(&self, candidate: &str, presence: Presence) -> ValidationOutcome {
        if presence.is_skipped() {
            return ValidationOutcome::Valid;
        }

        match parse_time(candidate) {
            Ok(_) => ValidationOutcome::Valid,
            Err(e) => ValidationOutcome::invalid(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REASON: &str = r#"should be an RFC3339 string in UTC, e.g., "2222-01-01T00:00:00Z""#;

    fn known(candidate: &str) -> ValidationOutcome {
        TimeValidator::new().validate(candidate, Presence::Known)
    }

    #[test]
    fn test_error_message() {
        assert_eq!(TimeFormatError::FormatOrOffsetInvalid.to_string(), REASON);
    }

    #[test]
    fn test_utc_accepted() {
        assert_eq!(known("2024-01-01T00:00:00Z"), ValidationOutcome::Valid);
    }

    #[test]
    fn test_offset_rejected() {
        assert_eq!(known("2024-01-01T00:00:00+02:00"), ValidationOutcome::invalid(REASON));
        assert!(!known("2024-01-01T00:00:00-05:30").is_valid());
    }

    #[test]
    fn test_missing_offset_rejected() {
        assert!(!known("2024-01-01T00:00:00").is_valid());
        assert!(!known("2024-01-01 00:00:00").is_valid());
    }

    #[test]
    fn test_lenient_separator_rejected() {
        assert_eq!(known("2024-01-01 00:00:00Z"), ValidationOutcome::invalid(REASON));
        assert_eq!(known("2024-01-01t00:00:00Z"), ValidationOutcome::invalid(REASON));
        assert!(!known("2024-01-01 00:00:00.5Z").is_valid());
    }

    #[test]
    fn test_lowercase_utc_suffix_rejected() {
        assert_eq!(known("2024-01-01T00:00:00z"), ValidationOutcome::invalid(REASON));
        assert!(!known("2024-01-01t00:00:00z").is_valid());
        assert!(!known("2024-01-01T00:00:00.123z").is_valid());
    }

    #[test]
    fn test_garbage_rejected_with_example() {
        let outcome = known("not-a-time");
        assert!(outcome.reason().unwrap().contains("2222-01-01T00:00:00Z"));
    }

    #[test]
    fn test_empty_string_rejected() {
        assert!(!known("").is_valid());
    }

    #[test]
    fn test_out_of_range_components_rejected() {
        assert!(!known("2024-13-01T00:00:00Z").is_valid());
        assert!(!known("2024-02-30T00:00:00Z").is_valid());
        assert!(!known("2024-01-01T25:00:00Z").is_valid());
        assert!(!known("2024-01-01T00:61:00Z").is_valid());
    }

    #[test]
    fn test_leap_second_rejected() {
        assert_eq!(
            parse_time("2016-12-31T23:59:60Z"),
            Err(TimeFormatError::FormatOrOffsetInvalid)
        );
    }

    #[test]
    fn test_zero_offset_renders_as_z() {
        // +00:00 and Z render identically, so both pass
        assert!(known("2024-01-01T00:00:00+00:00").is_valid());
    }

    #[test]
    fn test_fractional_seconds_preserved() {
        let parsed = parse_time("2024-01-01T00:00:00.123456789Z").unwrap();
        assert_eq!(parsed.nanosecond(), 123_456_789);
        assert_eq!(
            parsed.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            "2024-01-01T00:00:00.123456789Z"
        );
    }

    #[test]
    fn test_fractional_seconds_with_offset_rejected() {
        assert!(known("2024-01-01T00:00:00.123456789Z").is_valid());
        assert!(!known("2024-01-01T00:00:00.123456789+01:00").is_valid());
    }

    #[test]
    fn test_null_and_unknown_skipped() {
        let validator = TimeValidator::new();
        for candidate in ["", "not-a-time", "2024-01-01T00:00:00+02:00"] {
            assert!(validator.validate(candidate, Presence::Null).is_valid());
            assert!(validator.validate(candidate, Presence::Unknown).is_valid());
        }
    }

    #[test]
    fn test_description_is_stable() {
        let validator = TimeValidator::new();
        let _ = validator.validate("not-a-time", Presence::Known);
        assert_eq!(validator.description(DescriptionFormat::Plain), DEFAULT_DESCRIPTION);
        assert_eq!(validator.description(DescriptionFormat::Plain), DEFAULT_DESCRIPTION);
    }
}
