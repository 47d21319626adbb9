//! Modal dialog module.
//!
//! # Module Structure
//!
//! - `wire`: payload types and the component/style codes
//! - `params`: text input parameters and per-field validation
//! - `builder`: `DialogBuilder`, which accumulates fields and emits the payload
//! - `definition`: JSON modal definitions fed through the builder
//!
//! # Usage
//!
//! ```
//! use autocord_core::dialog::{DialogBuilder, TextInputParams};
//!
//! let mut modal = DialogBuilder::new();
//! modal
//!     .set_dialog_id("feedback")
//!     .set_title("Feedback")
//!     .add_short_text(TextInputParams::new("name", "Your name"))?
//!     .add_paragraph(TextInputParams::new("body", "Message").required(false))?;
//!
//! let payload = modal.build()?;
//! assert_eq!(payload.components.len(), 2);
//! # Ok::<(), autocord_core::ValidationError>(())
//! ```

mod builder;
mod definition;
mod params;
pub mod wire;

pub use builder::DialogBuilder;
pub use definition::{DialogDefinition, FieldDefinition};
pub use params::TextInputParams;
pub use wire::{ActionRow, DialogPayload, TextInput, TextInputStyle};

/// Character and value limits enforced by the platform.
pub mod limits {
    /// Max characters in a modal or text input custom_id.
    pub const CUSTOM_ID_MAX: usize = 100;
    /// Max characters in a text input label.
    pub const LABEL_MAX: usize = 45;
    /// Max characters in a placeholder.
    pub const PLACEHOLDER_MAX: usize = 100;
    /// Upper bound for min_length, max_length and the pre-filled value.
    pub const INPUT_LENGTH_MAX: u32 = 4000;
    pub const MIN_LENGTH_FLOOR: u32 = 0;
    pub const MAX_LENGTH_FLOOR: u32 = 1;
}
