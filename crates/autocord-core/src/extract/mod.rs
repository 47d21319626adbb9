//! Readers for incoming interaction events.
//!
//! Lookups never fail: a missing field or option is `None`.

mod command;
mod modal;

pub use command::{CommandData, CommandEvent, CommandEventData, CommandOption};
pub use modal::{ModalData, ModalSubmitData, ModalSubmitEvent, SubmittedInput, SubmittedRow};
