//! Parsing for ZMK keymap files.
//!
//! This module locates layer blocks and splits their binding lists into
//! physical rows.

pub mod keymap;

// Re-export commonly used functions
pub use keymap::{extract_layer_rows, find_layers};
