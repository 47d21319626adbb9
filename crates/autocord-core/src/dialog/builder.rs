//! Fluent builder for modal payloads.

use std::collections::HashSet;

use serde_json::Value;

use super::limits;
use super::params::{TextInputParams, char_len};
use super::wire::{ActionRow, DialogPayload, TextInput, TextInputStyle};
use crate::error::{Result, ValidationError};

/// Accumulates text inputs and produces a modal payload.
///
/// Each field is validated when it is added; a rejected field leaves the
/// builder unchanged. Modal-level checks (id, title, at least one field,
/// unique ids) run in [`DialogBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct DialogBuilder {
    token: Option<String>,
    dialog_id: Option<String>,
    title: Option<String>,
    rows: Vec<TextInput>,
}

impl DialogBuilder {
    /// Creates an empty builder without an interaction token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder carrying an interaction token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Sets the modal custom_id. Checked at build time.
    pub fn set_dialog_id(&mut self, dialog_id: impl Into<String>) -> &mut Self {
        self.dialog_id = Some(dialog_id.into());
        self
    }

    /// Sets the modal title. Checked at build time.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Adds a single-line text input.
    pub fn add_short_text(
        &mut self,
        params: TextInputParams,
    ) -> std::result::Result<&mut Self, ValidationError> {
        self.add_text_input(params, TextInputStyle::Short)
    }

    /// Adds a multi-line text input.
    pub fn add_paragraph(
        &mut self,
        params: TextInputParams,
    ) -> std::result::Result<&mut Self, ValidationError> {
        self.add_text_input(params, TextInputStyle::Paragraph)
    }

    /// Adds a text input with an explicit style.
    pub fn add_text_input(
        &mut self,
        params: TextInputParams,
        style: TextInputStyle,
    ) -> std::result::Result<&mut Self, ValidationError> {
        params.validate()?;

        tracing::debug!(custom_id = %params.custom_id, ?style, "Adding text input");
        self.rows.push(params.into_component(style));
        Ok(self)
    }

    /// Number of text inputs added so far.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Runs the modal-level checks without building.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let dialog_id = self
            .dialog_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(ValidationError::MissingDialogId)?;
        if char_len(dialog_id) > limits::CUSTOM_ID_MAX {
            return Err(ValidationError::DialogIdTooLong);
        }

        if self.title.as_deref().is_none_or(str::is_empty) {
            return Err(ValidationError::MissingTitle);
        }

        if self.rows.is_empty() {
            return Err(ValidationError::NoFields);
        }

        let mut seen = HashSet::with_capacity(self.rows.len());
        for row in &self.rows {
            if !seen.insert(row.custom_id.as_str()) {
                return Err(ValidationError::DuplicateIdentifier(row.custom_id.clone()));
            }
        }

        Ok(())
    }

    /// Validates the modal and returns the payload.
    ///
    /// Each text input is wrapped in its own action row, in insertion order.
    pub fn build(&self) -> std::result::Result<DialogPayload, ValidationError> {
        self.validate()?;

        let payload = DialogPayload {
            token: self.token.clone(),
            custom_id: self.dialog_id.clone().unwrap_or_default(),
            title: self.title.clone().unwrap_or_default(),
            components: self.rows.iter().cloned().map(ActionRow::wrap).collect(),
        };

        tracing::debug!(
            custom_id = %payload.custom_id,
            rows = payload.components.len(),
            "Built modal payload"
        );
        Ok(payload)
    }

    /// Validates the modal and returns the payload as JSON.
    pub fn to_json(&self) -> Result<Value> {
        let payload = self.build()?;
        Ok(serde_json::to_value(payload)?)
    }
}
