//! Export functionality for keymap documentation.
//!
//! This module draws the box-character layer diagrams that are embedded as
//! comments in keymap files.

pub mod diagram;

pub use diagram::render as render_layer_diagram;
