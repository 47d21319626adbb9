use anyhow::Result;
use autocord_core::extract::{CommandData, ModalData};
use serde_json::Value;
use std::path::Path;

use super::{read_json, unwrap_event};

/// Prints the submitted value. Returns false when the input is absent.
pub fn modal_value(path: &Path, custom_id: &str) -> Result<bool> {
    let modal = ModalData::from_value(unwrap_event(read_json(path)?))?;

    match modal.get(custom_id) {
        Some(value) => {
            println!("{}", value);
            Ok(true)
        }
        None => {
            tracing::info!(custom_id, "Text input not found in event");
            Ok(false)
        }
    }
}

/// Prints the option value. Returns false when the option is absent.
pub fn option(path: &Path, name: &str) -> Result<bool> {
    let options = CommandData::from_value(unwrap_event(read_json(path)?))?;

    match options.get(name) {
        Some(value) => {
            println!("{}", render(value));
            Ok(true)
        }
        None => {
            tracing::info!(name, "Option not found in event");
            Ok(false)
        }
    }
}

/// Strings print bare; other values print as JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
