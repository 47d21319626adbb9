pub mod event;
pub mod modal;
pub mod upsert;

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Reads a JSON file.
pub fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;

    Ok(json)
}

/// Unwraps `{ "event": { ... } }` captures to the inner event.
pub fn unwrap_event(json: Value) -> Value {
    match json {
        Value::Object(mut map) if map.contains_key("event") && !map.contains_key("data") => {
            map.remove("event").unwrap_or(Value::Null)
        }
        other => other,
    }
}
