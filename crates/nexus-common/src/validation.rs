//! Input validation utilities.
//!
//! Reusable field checks shared by every builder, plus the process-wide switch
//! that turns them off. Checks return [`ValidationError`] and never panic.

use std::sync::atomic::{AtomicBool, Ordering};

use url::Url;
use validator::ValidateLength;

use crate::error::ValidationError;
use crate::snowflake::Snowflake;

static VALIDATION_ENABLED: AtomicBool = AtomicBool::new(true);

/// Turn field validation on for the whole process (the default).
pub fn enable_validators() {
    set_validation_enabled(true);
}

/// Turn field validation off for the whole process.
///
/// Setters then write values as given. Checks the data model itself depends
/// on (enumerated styles, snowflake parsing) still run.
pub fn disable_validators() {
    set_validation_enabled(false);
}

/// Set the process-wide validation switch.
pub fn set_validation_enabled(enabled: bool) {
    VALIDATION_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether setters currently run field validators.
pub fn is_validation_enabled() -> bool {
    VALIDATION_ENABLED.load(Ordering::Relaxed)
}

/// Validate that `value` is between `min` and `max` characters, inclusive.
pub fn validate_length(
    field: &'static str,
    value: &str,
    min: u64,
    max: u64,
) -> Result<(), ValidationError> {
    if value.validate_length(Some(min), Some(max), None) {
        return Ok(());
    }

    Err(ValidationError::Length {
        field,
        min,
        max,
        actual: value.chars().count() as u64,
    })
}

/// Validate that `value` parses as a URL whose scheme is in `allowed`.
pub fn validate_url_scheme(
    field: &'static str,
    value: &str,
    allowed: &[&str],
) -> Result<(), ValidationError> {
    let parsed = Url::parse(value).map_err(|e| ValidationError::InvalidUrl {
        field,
        reason: e.to_string(),
    })?;

    if allowed.contains(&parsed.scheme()) {
        Ok(())
    } else {
        Err(ValidationError::DisallowedScheme {
            field,
            scheme: parsed.scheme().to_string(),
            allowed: allowed.join(", "),
        })
    }
}

/// Validate that a required string is present and not blank.
pub fn validate_present(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        Some(_) => Err(ValidationError::InvalidShape {
            field,
            reason: "cannot be empty or whitespace only".into(),
        }),
        None => Err(ValidationError::InvalidShape {
            field,
            reason: "is required".into(),
        }),
    }
}

/// Parse a Snowflake-shaped identifier.
pub fn validate_snowflake(field: &'static str, value: &str) -> Result<Snowflake, ValidationError> {
    Snowflake::parse(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMES: &[&str] = &["https", "http", "discord"];

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate_length("label", "héllo", 1, 5).is_ok());
        assert!(validate_length("label", "🙂", 1, 1).is_ok());
    }

    #[test]
    fn length_rejects_out_of_bounds() {
        assert_eq!(
            validate_length("label", "", 1, 80),
            Err(ValidationError::Length {
                field: "label",
                min: 1,
                max: 80,
                actual: 0
            })
        );

        let long = "x".repeat(81);
        let err = validate_length("label", &long, 1, 80).unwrap_err();
        assert!(matches!(err, ValidationError::Length { actual: 81, .. }));
    }

    #[test]
    fn url_scheme_allow_list() {
        assert!(validate_url_scheme("url", "https://example.com", SCHEMES).is_ok());
        assert!(validate_url_scheme("url", "http://example.com/path?q=1", SCHEMES).is_ok());
        assert!(validate_url_scheme("url", "discord://-/channels/1/2", SCHEMES).is_ok());

        let err = validate_url_scheme("url", "ftp://example.com", SCHEMES).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::DisallowedScheme { ref scheme, .. } if scheme == "ftp"
        ));
    }

    #[test]
    fn url_must_parse() {
        for raw in ["", "example.com", "not a url", "https://"] {
            let err = validate_url_scheme("url", raw, SCHEMES).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidUrl { .. }),
                "{raw:?} should fail to parse, got {err:?}"
            );
        }
    }

    #[test]
    fn present_rejects_missing_and_blank() {
        assert!(validate_present("name", Some("smile")).is_ok());
        assert!(validate_present("name", Some("  ")).is_err());
        assert!(validate_present("name", None).is_err());
    }
}
