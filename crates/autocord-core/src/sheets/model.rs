//! Request and response shapes of the spreadsheet query API.
//!
//! `range` is an A1-notation range, `bounds` selects how the backend treats
//! it (for example `FIRST_EMPTY_ROW` or `FULL_RANGE`). `where` is passed
//! through untouched; its semantics belong to the backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Filtered read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectParams {
    pub range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<String>,
    #[serde(rename = "where")]
    pub filter: Value,
}

/// Result of a select: the matching rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectResult {
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// One matched row, keyed by column header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// Update every row matching the filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateParams {
    pub range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<String>,
    #[serde(rename = "where")]
    pub filter: Value,
    pub fields: Map<String, Value>,
}

/// Append new rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertParams {
    pub range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<String>,
    pub fieldsets: Vec<Map<String, Value>>,
}

/// Input of [`crate::sheets::SheetsUpsert::upsert`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsertParams {
    pub range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<String>,
    #[serde(rename = "where")]
    pub filter: Value,
    pub fields: Map<String, Value>,
}

impl UpsertParams {
    pub fn new(range: impl Into<String>, filter: Value, fields: Map<String, Value>) -> Self {
        Self {
            range: range.into(),
            bounds: None,
            filter,
            fields,
        }
    }

    pub fn with_bounds(mut self, bounds: impl Into<String>) -> Self {
        self.bounds = Some(bounds.into());
        self
    }

    pub(crate) fn select_params(&self) -> SelectParams {
        SelectParams {
            range: self.range.clone(),
            bounds: self.bounds.clone(),
            filter: self.filter.clone(),
        }
    }

    pub(crate) fn update_params(&self) -> UpdateParams {
        UpdateParams {
            range: self.range.clone(),
            bounds: self.bounds.clone(),
            filter: self.filter.clone(),
            fields: self.fields.clone(),
        }
    }

    pub(crate) fn insert_params(&self) -> InsertParams {
        InsertParams {
            range: self.range.clone(),
            bounds: self.bounds.clone(),
            fieldsets: vec![self.fields.clone()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params() -> UpsertParams {
        let fields = json!({ "Name": "Ada", "Score": 10 })
            .as_object()
            .cloned()
            .unwrap();
        UpsertParams::new("A1:C100", json!({ "Name": "Ada" }), fields).with_bounds("FULL_RANGE")
    }

    #[test]
    fn test_where_is_renamed_on_the_wire() {
        let value = serde_json::to_value(params().select_params()).unwrap();
        assert_eq!(
            value,
            json!({ "range": "A1:C100", "bounds": "FULL_RANGE", "where": { "Name": "Ada" } })
        );
    }

    #[test]
    fn test_insert_wraps_fields_in_single_fieldset() {
        let insert = params().insert_params();
        assert_eq!(insert.fieldsets.len(), 1);
        assert_eq!(insert.fieldsets[0]["Score"], json!(10));

        let value = serde_json::to_value(insert).unwrap();
        assert!(value.get("where").is_none());
    }

    #[test]
    fn test_bounds_omitted_when_absent() {
        let fields = Map::new();
        let upsert = UpsertParams::new("Sheet1!A:B", json!([]), fields);
        let value = serde_json::to_value(upsert.update_params()).unwrap();
        assert!(value.get("bounds").is_none());
    }

    #[test]
    fn test_select_result_defaults_to_no_rows() {
        let result: SelectResult = serde_json::from_str("{}").unwrap();
        assert!(result.rows.is_empty());
    }
}
