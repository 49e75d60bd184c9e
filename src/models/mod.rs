//! Data models for keymap layers and binding rows.
//!
//! Models are plain data plus small helpers; parsing and rendering live in
//! [`crate::parser`] and [`crate::export`].

pub mod keymap;

// Re-export all model types
pub use keymap::{BindingRow, LayerBlock, BLOCK_TERMINATOR, ROW_WIDTHS};
