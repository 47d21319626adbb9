//! Submitted modal values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A modal-submit interaction event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModalSubmitEvent {
    #[serde(default)]
    pub data: ModalSubmitData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModalSubmitData {
    #[serde(default)]
    pub custom_id: Option<String>,
    #[serde(default)]
    pub components: Vec<SubmittedRow>,
}

/// An action row of a submitted modal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmittedRow {
    #[serde(default)]
    pub components: Vec<SubmittedInput>,
}

/// The value entered into one text input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmittedInput {
    #[serde(default)]
    pub custom_id: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Reads text input values out of a submitted modal.
#[derive(Debug, Clone)]
pub struct ModalData {
    rows: Vec<SubmittedRow>,
}

impl ModalData {
    pub fn new(event: ModalSubmitEvent) -> Self {
        Self {
            rows: event.data.components,
        }
    }

    /// Parses a raw event.
    pub fn from_value(event: Value) -> Result<Self> {
        let event: ModalSubmitEvent = serde_json::from_value(event)?;
        Ok(Self::new(event))
    }

    /// Returns the value of the text input with the given custom_id.
    ///
    /// The first row holding a matching input wins, and that row's first
    /// input supplies the value.
    pub fn get(&self, custom_id: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.components.iter().any(|c| c.custom_id == custom_id))
            .and_then(|row| row.components.first())
            .and_then(|input| input.value.as_deref())
    }

    /// Number of submitted rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<ModalSubmitEvent> for ModalData {
    fn from(event: ModalSubmitEvent) -> Self {
        Self::new(event)
    }
}
