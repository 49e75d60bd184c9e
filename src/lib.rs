//! keymapdoc library
//!
//! This library keeps the ASCII layer diagrams in ZMK keymap files in sync
//! with the bindings they describe: it finds each layer, resolves its
//! bindings to short legends, renders a fresh diagram and splices it over
//! the old comment block.

// Module declarations
pub mod cli;
pub mod constants;
pub mod export;
pub mod keycode_db;
pub mod models;
pub mod parser;
pub mod services;
