//! Error types for Autocord.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dialog::limits;

/// A constraint violated while building a modal.
///
/// Validation errors are deterministic for a given input, so callers should
/// fix the offending value rather than retry.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Missing custom_id. Please add \"custom_id\" to your text input parameters.")]
    MissingIdentifier,

    #[error("Maximum character length for custom_id is {}.", limits::CUSTOM_ID_MAX)]
    IdentifierTooLong,

    #[error("Missing label. Please add \"label\" to your text input parameters.")]
    MissingLabel,

    #[error("Maximum character length for label is {}.", limits::LABEL_MAX)]
    LabelTooLong,

    #[error(
        "Minimum value for min_length is {}; maximum is {}.",
        limits::MIN_LENGTH_FLOOR,
        limits::INPUT_LENGTH_MAX
    )]
    MinLengthOutOfRange,

    #[error(
        "Minimum value for max_length is {}; maximum is {}.",
        limits::MAX_LENGTH_FLOOR,
        limits::INPUT_LENGTH_MAX
    )]
    MaxLengthOutOfRange,

    #[error("Maximum character length for value is {}.", limits::INPUT_LENGTH_MAX)]
    ValueTooLong,

    #[error("Maximum character length for placeholder is {}.", limits::PLACEHOLDER_MAX)]
    PlaceholderTooLong,

    #[error("Missing modal id. Please use set_dialog_id() to set the identifier.")]
    MissingDialogId,

    #[error("Maximum character length for modal custom_id is {}.", limits::CUSTOM_ID_MAX)]
    DialogIdTooLong,

    #[error("Missing title. Please use set_title() to set the title.")]
    MissingTitle,

    #[error("No action rows. Please add a row using add_short_text(...) or add_paragraph(...).")]
    NoFields,

    #[error("Duplicate custom_id. Row with custom_id \"{0}\" already exists.")]
    DuplicateIdentifier(String),
}

/// A shared error type for the Autocord crates.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum AutocordError {
    /// Modal validation failure
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Failure reported by (or while talking to) the spreadsheet backend
    #[error("Backend error: {message}")]
    Backend {
        status: Option<u16>,
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {message}")]
    Io { message: String },
}

impl AutocordError {
    /// Creates a Backend error
    pub fn backend(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// HTTP status attached to a backend error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Backend { status, .. } => *status,
            _ => None,
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a backend error
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend { .. })
    }
}

impl From<std::io::Error> for AutocordError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for AutocordError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AutocordError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, AutocordError>`.
pub type Result<T> = std::result::Result<T, AutocordError>;
