//! Update-or-insert on top of a [`SheetsQuery`] backend.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::model::UpsertParams;
use super::query::SheetsQuery;
use crate::error::Result;

/// Which write an upsert performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertOutcome {
    Updated,
    Inserted,
}

/// Updates matching rows, or inserts one row when nothing matches.
///
/// The select and the write are two separate backend calls. Nothing is
/// locked in between, so two concurrent upserts with the same filter may
/// both insert. Backend errors are returned as-is.
#[derive(Clone)]
pub struct SheetsUpsert {
    query: Arc<dyn SheetsQuery>,
}

impl SheetsUpsert {
    pub fn new(query: Arc<dyn SheetsQuery>) -> Self {
        Self { query }
    }

    /// Runs the select, then exactly one update or insert.
    pub async fn upsert(&self, params: &UpsertParams) -> Result<UpsertOutcome> {
        let existing = self.query.select(&params.select_params()).await?;

        if existing.rows.is_empty() {
            tracing::debug!(range = %params.range, "No matching rows, inserting");
            self.query.insert(&params.insert_params()).await?;
            Ok(UpsertOutcome::Inserted)
        } else {
            tracing::debug!(
                range = %params.range,
                matched = existing.rows.len(),
                "Matching rows found, updating"
            );
            self.query.update(&params.update_params()).await?;
            Ok(UpsertOutcome::Updated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutocordError;
    use crate::sheets::{InsertParams, Row, SelectParams, SelectResult, UpdateParams};
    use async_trait::async_trait;
    use serde_json::{Map, Value, json};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Select(SelectParams),
        Update(UpdateParams),
        Insert(InsertParams),
    }

    // Mock backend recording every call
    struct MockSheetsQuery {
        rows: Vec<Row>,
        fail_select: bool,
        fail_write: bool,
        calls: Mutex<Vec<Call>>,
    }

    impl MockSheetsQuery {
        fn with_rows(count: usize) -> Self {
            Self {
                rows: vec![Row::default(); count],
                fail_select: false,
                fail_write: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
            self.calls().iter().filter(|c| pred(*c)).count()
        }
    }

    #[async_trait]
    impl SheetsQuery for MockSheetsQuery {
        async fn select(&self, params: &SelectParams) -> Result<SelectResult> {
            self.calls.lock().unwrap().push(Call::Select(params.clone()));
            if self.fail_select {
                return Err(AutocordError::backend(Some(500), "select failed"));
            }
            Ok(SelectResult {
                rows: self.rows.clone(),
            })
        }

        async fn update(&self, params: &UpdateParams) -> Result<()> {
            self.calls.lock().unwrap().push(Call::Update(params.clone()));
            if self.fail_write {
                return Err(AutocordError::backend(Some(429), "rate limited"));
            }
            Ok(())
        }

        async fn insert(&self, params: &InsertParams) -> Result<()> {
            self.calls.lock().unwrap().push(Call::Insert(params.clone()));
            if self.fail_write {
                return Err(AutocordError::backend(Some(429), "rate limited"));
            }
            Ok(())
        }
    }

    fn fields() -> Map<String, Value> {
        json!({ "Name": "Ada", "Score": 10 })
            .as_object()
            .cloned()
            .unwrap()
    }

    fn params() -> UpsertParams {
        UpsertParams::new("A1:B", json!({ "Name": "Ada" }), fields()).with_bounds("FULL_RANGE")
    }

    #[tokio::test]
    async fn test_inserts_when_no_rows_match() {
        let mock = Arc::new(MockSheetsQuery::with_rows(0));
        let upsert = SheetsUpsert::new(mock.clone());

        let outcome = upsert.upsert(&params()).await.unwrap();

        assert_eq!(outcome, UpsertOutcome::Inserted);
        assert_eq!(mock.count(|c| matches!(c, Call::Insert(_))), 1);
        assert_eq!(mock.count(|c| matches!(c, Call::Update(_))), 0);

        let calls = mock.calls();
        assert!(matches!(calls[0], Call::Select(_)));
        match &calls[1] {
            Call::Insert(insert) => {
                assert_eq!(insert.range, "A1:B");
                assert_eq!(insert.bounds.as_deref(), Some("FULL_RANGE"));
                assert_eq!(insert.fieldsets, vec![fields()]);
            }
            other => panic!("expected insert, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_updates_when_rows_match() {
        let mock = Arc::new(MockSheetsQuery::with_rows(2));
        let upsert = SheetsUpsert::new(mock.clone());

        let outcome = upsert.upsert(&params()).await.unwrap();

        assert_eq!(outcome, UpsertOutcome::Updated);
        assert_eq!(mock.count(|c| matches!(c, Call::Update(_))), 1);
        assert_eq!(mock.count(|c| matches!(c, Call::Insert(_))), 0);

        match &mock.calls()[1] {
            Call::Update(update) => {
                assert_eq!(update.filter, json!({ "Name": "Ada" }));
                assert_eq!(update.fields, fields());
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_select_receives_filter() {
        let mock = Arc::new(MockSheetsQuery::with_rows(0));
        SheetsUpsert::new(mock.clone())
            .upsert(&params())
            .await
            .unwrap();

        assert_eq!(
            mock.calls()[0],
            Call::Select(SelectParams {
                range: "A1:B".to_string(),
                bounds: Some("FULL_RANGE".to_string()),
                filter: json!({ "Name": "Ada" }),
            })
        );
    }

    #[tokio::test]
    async fn test_select_error_stops_before_write() {
        let mut mock = MockSheetsQuery::with_rows(0);
        mock.fail_select = true;
        let mock = Arc::new(mock);

        let err = SheetsUpsert::new(mock.clone())
            .upsert(&params())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(mock.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_write_error_is_propagated_unchanged() {
        let mut mock = MockSheetsQuery::with_rows(1);
        mock.fail_write = true;
        let mock = Arc::new(mock);

        let err = SheetsUpsert::new(mock.clone())
            .upsert(&params())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AutocordError::Backend { status: Some(429), ref message } if message == "rate limited"
        ));
        assert_eq!(mock.calls().len(), 2);
    }
}
