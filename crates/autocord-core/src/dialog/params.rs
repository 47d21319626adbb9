//! Text input parameters and their validation.

use serde::{Deserialize, Serialize};

use super::limits;
use super::wire::{TEXT_INPUT, TextInput, TextInputStyle};
use crate::error::ValidationError;

fn default_true() -> bool {
    true
}

/// Parameters for a single text input.
///
/// `value` is the pre-filled text. It is length-checked but not emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInputParams {
    #[serde(default)]
    pub custom_id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Default for TextInputParams {
    fn default() -> Self {
        Self {
            custom_id: String::new(),
            label: String::new(),
            required: true,
            min_length: None,
            max_length: None,
            placeholder: None,
            value: None,
        }
    }
}

impl TextInputParams {
    /// Creates required input parameters with the given id and label.
    pub fn new(custom_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            custom_id: custom_id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_min_length(mut self, min_length: u32) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Checks every field constraint, reporting the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.custom_id.is_empty() {
            return Err(ValidationError::MissingIdentifier);
        }
        if char_len(&self.custom_id) > limits::CUSTOM_ID_MAX {
            return Err(ValidationError::IdentifierTooLong);
        }

        if self.label.is_empty() {
            return Err(ValidationError::MissingLabel);
        }
        if char_len(&self.label) > limits::LABEL_MAX {
            return Err(ValidationError::LabelTooLong);
        }

        if let Some(min) = self.min_length {
            if !(limits::MIN_LENGTH_FLOOR..=limits::INPUT_LENGTH_MAX).contains(&min) {
                return Err(ValidationError::MinLengthOutOfRange);
            }
        }

        if let Some(max) = self.max_length {
            if !(limits::MAX_LENGTH_FLOOR..=limits::INPUT_LENGTH_MAX).contains(&max) {
                return Err(ValidationError::MaxLengthOutOfRange);
            }
        }

        if let Some(value) = &self.value {
            if char_len(value) > limits::INPUT_LENGTH_MAX as usize {
                return Err(ValidationError::ValueTooLong);
            }
        }

        if let Some(placeholder) = &self.placeholder {
            if char_len(placeholder) > limits::PLACEHOLDER_MAX {
                return Err(ValidationError::PlaceholderTooLong);
            }
        }

        Ok(())
    }

    /// Shapes validated parameters into a wire component.
    pub(crate) fn into_component(self, style: TextInputStyle) -> TextInput {
        TextInput {
            component_type: TEXT_INPUT,
            custom_id: self.custom_id,
            label: self.label,
            style: style.code(),
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            placeholder: self.placeholder.filter(|p| !p.is_empty()),
        }
    }
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
