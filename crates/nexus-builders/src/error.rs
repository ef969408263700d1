//! Error types for the component builders.

use nexus_common::ValidationError;
use thiserror::Error;

use crate::components::types::ButtonStyle;

#[derive(Debug, Error)]
pub enum BuilderError {
    /// A setter rejected its input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The draft was serialized before a style was chosen.
    #[error("Buttons must have a style")]
    MissingStyle,

    /// The active style requires a field the draft doesn't have.
    #[error("{style} buttons must have {field}")]
    MissingField {
        style: &'static str,
        field: &'static str,
    },

    /// The active style forbids a field the draft has.
    #[error("{style} buttons cannot have {field}")]
    ForbiddenField {
        style: &'static str,
        field: &'static str,
    },

    /// Non-premium buttons need something to display.
    #[error("Non-premium buttons must have a label and/or an emoji ({style} style)")]
    MissingLabelOrEmoji { style: ButtonStyle },

    /// A JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BuilderError {
    /// Whether this error came from the serialization-time consistency check.
    pub fn is_consistency(&self) -> bool {
        matches!(
            self,
            Self::MissingStyle
                | Self::MissingField { .. }
                | Self::ForbiddenField { .. }
                | Self::MissingLabelOrEmoji { .. }
        )
    }

    /// Error code string for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::MissingStyle => "MISSING_STYLE",
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::ForbiddenField { .. } => "FORBIDDEN_FIELD",
            Self::MissingLabelOrEmoji { .. } => "MISSING_LABEL_OR_EMOJI",
            Self::Json(_) => "JSON_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, BuilderError>;
