//! Service layer for business logic.
//!
//! This module contains the diagram splicing logic and the file I/O that
//! wraps it.

pub mod comment_block;
pub mod keymaps;

// Re-export commonly used types and functions
pub use comment_block::{update_keymap, KeymapUpdate, LayerOutcome, SkipReason};
pub use keymaps::KeymapService;
