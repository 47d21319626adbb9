//! Spreadsheet query backend trait.

use async_trait::async_trait;

use super::model::{InsertParams, SelectParams, SelectResult, UpdateParams};
use crate::error::Result;

/// Backend that answers spreadsheet queries.
#[async_trait]
pub trait SheetsQuery: Send + Sync {
    /// Returns the rows matching the filter.
    async fn select(&self, params: &SelectParams) -> Result<SelectResult>;

    /// Updates the rows matching the filter.
    async fn update(&self, params: &UpdateParams) -> Result<()>;

    /// Appends the given rows.
    async fn insert(&self, params: &InsertParams) -> Result<()>;
}
