//! Spreadsheet query module.
//!
//! # Module Structure
//!
//! - `model`: request and response shapes of the query API
//! - `query`: `SheetsQuery`, the backend trait (select / update / insert)
//! - `upsert`: `SheetsUpsert`, update-or-insert on top of any `SheetsQuery`

mod model;
mod query;
mod upsert;

pub use model::{InsertParams, Row, SelectParams, SelectResult, UpdateParams, UpsertParams};
pub use query::SheetsQuery;
pub use upsert::{SheetsUpsert, UpsertOutcome};
