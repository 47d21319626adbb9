//! Modal definitions loaded from JSON documents.

use serde::{Deserialize, Serialize};

use super::builder::DialogBuilder;
use super::params::TextInputParams;
use super::wire::{DialogPayload, TextInputStyle};
use crate::error::ValidationError;

/// A declarative modal description.
///
/// ```json
/// {
///   "custom_id": "feedback",
///   "title": "Feedback",
///   "fields": [
///     { "style": "short", "custom_id": "name", "label": "Name" },
///     { "style": "paragraph", "custom_id": "body", "label": "Message", "required": false }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default)]
    pub custom_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// One text input of a [`DialogDefinition`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub style: TextInputStyle,
    #[serde(flatten)]
    pub params: TextInputParams,
}

impl DialogDefinition {
    /// Feeds the definition through a [`DialogBuilder`].
    ///
    /// Fields are validated in order; the first invalid field is reported.
    pub fn into_builder(self) -> Result<DialogBuilder, ValidationError> {
        let mut builder = match self.token {
            Some(token) => DialogBuilder::with_token(token),
            None => DialogBuilder::new(),
        };
        builder.set_dialog_id(self.custom_id).set_title(self.title);

        for field in self.fields {
            builder.add_text_input(field.params, field.style)?;
        }

        Ok(builder)
    }

    /// Builds the payload described by this definition.
    pub fn build(self) -> Result<DialogPayload, ValidationError> {
        self.into_builder()?.build()
    }
}
