//! Chat input command options.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A chat-input command interaction event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandEvent {
    #[serde(default)]
    pub data: CommandEventData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandEventData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

/// A named option value. Values may be strings, numbers or booleans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandOption {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

/// Reads option values out of a command invocation.
#[derive(Debug, Clone)]
pub struct CommandData {
    options: Vec<CommandOption>,
}

impl CommandData {
    pub fn new(event: CommandEvent) -> Self {
        Self {
            options: event.data.options,
        }
    }

    /// Parses a raw event.
    pub fn from_value(event: Value) -> Result<Self> {
        let event: CommandEvent = serde_json::from_value(event)?;
        Ok(Self::new(event))
    }

    /// Returns the value of the first option named `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
    }

    /// Like [`CommandData::get`], but only for string values.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }
}

impl From<CommandEvent> for CommandData {
    fn from(event: CommandEvent) -> Self {
        Self::new(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn command_event() -> Value {
        json!({
            "type": 2,
            "data": {
                "name": "test",
                "options": [
                    { "type": 3, "name": "TEST_OPTION_NAME", "value": "TEST OPTION VALUE" },
                    { "type": 4, "name": "count", "value": 3 },
                    { "type": 3, "name": "TEST_OPTION_NAME", "value": "second" }
                ]
            }
        })
    }

    #[test]
    fn test_get_present_option() {
        let options = CommandData::from_value(command_event()).unwrap();
        assert_eq!(
            options.get("TEST_OPTION_NAME"),
            Some(&json!("TEST OPTION VALUE"))
        );
        assert_eq!(options.get_str("TEST_OPTION_NAME"), Some("TEST OPTION VALUE"));
    }

    #[test]
    fn test_get_missing_option() {
        let options = CommandData::from_value(command_event()).unwrap();
        assert_eq!(options.get("missing"), None);
        assert_eq!(options.get_str("missing"), None);
    }

    #[test]
    fn test_non_string_value() {
        let options = CommandData::from_value(command_event()).unwrap();
        assert_eq!(options.get("count"), Some(&json!(3)));
        assert_eq!(options.get_str("count"), None);
    }

    #[test]
    fn test_name_match_is_exact() {
        let options = CommandData::from_value(command_event()).unwrap();
        assert_eq!(options.get("test_option_name"), None);
    }

    #[test]
    fn test_event_without_options() {
        let options = CommandData::from_value(json!({ "data": { "name": "ping" } })).unwrap();
        assert_eq!(options.get("anything"), None);
    }
}
