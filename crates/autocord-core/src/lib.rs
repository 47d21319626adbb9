//! Helpers for chat-platform interactions.
//!
//! - [`dialog`]: build modal payloads made of text inputs
//! - [`extract`]: read values out of modal-submit and command events
//! - [`sheets`]: update-or-insert against a spreadsheet query backend
//! - [`time`]: async delay helper

pub mod dialog;
pub mod error;
pub mod extract;
pub mod sheets;
pub mod time;

// Re-export common types
pub use dialog::{DialogBuilder, DialogPayload, TextInputParams};
pub use error::{AutocordError, Result, ValidationError};
pub use extract::{CommandData, ModalData};
pub use sheets::{SheetsQuery, SheetsUpsert, UpsertOutcome, UpsertParams};
