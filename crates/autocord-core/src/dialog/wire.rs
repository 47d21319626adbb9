//! Wire format of the modal payload.
//!
//! Component type and style codes are part of the contract with the chat
//! platform and must not change.
//! Reference: https://discord.com/developers/docs/interactions/message-components

use serde::{Deserialize, Serialize};

/// Component type code for an action row (layout container).
pub const ACTION_ROW: u8 = 1;

/// Component type code for a text input.
pub const TEXT_INPUT: u8 = 4;

/// Style code for a single-line text input.
pub const STYLE_SHORT: u8 = 1;

/// Style code for a multi-line text input.
pub const STYLE_PARAGRAPH: u8 = 2;

/// Visual style of a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextInputStyle {
    /// Single-line input
    Short,
    /// Multi-line input
    Paragraph,
}

impl TextInputStyle {
    /// Returns the numeric style code used on the wire.
    pub fn code(self) -> u8 {
        match self {
            TextInputStyle::Short => STYLE_SHORT,
            TextInputStyle::Paragraph => STYLE_PARAGRAPH,
        }
    }
}

fn is_true(value: &bool) -> bool {
    *value
}

fn default_true() -> bool {
    true
}

/// A text input component as sent to the platform.
///
/// `required` is omitted when true because that is the platform default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInput {
    #[serde(rename = "type")]
    pub component_type: u8,
    pub custom_id: String,
    pub label: String,
    pub style: u8,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// An action row wrapping exactly one text input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRow {
    #[serde(rename = "type")]
    pub component_type: u8,
    pub components: Vec<TextInput>,
}

impl ActionRow {
    /// Wraps a single text input in a row.
    pub fn wrap(input: TextInput) -> Self {
        Self {
            component_type: ACTION_ROW,
            components: vec![input],
        }
    }
}

/// The complete modal payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogPayload {
    /// Interaction token, carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Modal identifier
    pub custom_id: String,
    pub title: String,
    pub components: Vec<ActionRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(required: bool) -> TextInput {
        TextInput {
            component_type: TEXT_INPUT,
            custom_id: "id".to_string(),
            label: "label".to_string(),
            style: TextInputStyle::Short.code(),
            required,
            min_length: None,
            max_length: None,
            placeholder: None,
        }
    }

    #[test]
    fn test_style_codes() {
        assert_eq!(TextInputStyle::Short.code(), 1);
        assert_eq!(TextInputStyle::Paragraph.code(), 2);
    }

    #[test]
    fn test_required_true_is_omitted() {
        let value = serde_json::to_value(input(true)).unwrap();
        assert_eq!(
            value,
            json!({ "type": 4, "custom_id": "id", "label": "label", "style": 1 })
        );
    }

    #[test]
    fn test_required_false_is_emitted() {
        let value = serde_json::to_value(input(false)).unwrap();
        assert_eq!(value["required"], json!(false));
    }

    #[test]
    fn test_missing_token_is_omitted() {
        let payload = DialogPayload {
            token: None,
            custom_id: "modal".to_string(),
            title: "title".to_string(),
            components: vec![ActionRow::wrap(input(true))],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("token").is_none());
        assert_eq!(value["components"][0]["type"], json!(ACTION_ROW));
    }

    #[test]
    fn test_style_deserializes_lowercase() {
        let style: TextInputStyle = serde_json::from_str("\"paragraph\"").unwrap();
        assert_eq!(style, TextInputStyle::Paragraph);
    }
}
