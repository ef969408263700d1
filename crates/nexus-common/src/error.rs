//! Field-level validation errors.
//!
//! Every validator in the builder crates reports through [`ValidationError`].
//! Variants map to the kind of rule that was broken rather than to the field,
//! so callers can branch on "too long" vs. "bad scheme" without string matching.

/// A single field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    // === Range / length ===
    #[error("{field} must be between {min} and {max} characters (got {actual})")]
    Length {
        field: &'static str,
        min: u64,
        max: u64,
        actual: u64,
    },

    #[error("{value} is not a valid {field}")]
    OutOfRange { field: &'static str, value: String },

    // === URLs ===
    #[error("{field} is not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("{field} uses the '{scheme}' scheme; expected one of: {allowed}")]
    DisallowedScheme {
        field: &'static str,
        scheme: String,
        allowed: String,
    },

    // === Identifiers ===
    #[error("{field} is not a valid snowflake: '{value}'")]
    InvalidSnowflake { field: &'static str, value: String },

    // === Shape ===
    #[error("Invalid {field}: {reason}")]
    InvalidShape { field: &'static str, reason: String },
}

impl ValidationError {
    /// Name of the field that was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Length { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::InvalidUrl { field, .. }
            | Self::DisallowedScheme { field, .. }
            | Self::InvalidSnowflake { field, .. }
            | Self::InvalidShape { field, .. } => field,
        }
    }

    /// Error code string for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Length { .. } => "INVALID_LENGTH",
            Self::OutOfRange { .. } => "OUT_OF_RANGE",
            Self::InvalidUrl { .. } => "INVALID_URL",
            Self::DisallowedScheme { .. } => "DISALLOWED_SCHEME",
            Self::InvalidSnowflake { .. } => "INVALID_SNOWFLAKE",
            Self::InvalidShape { .. } => "INVALID_SHAPE",
        }
    }
}
