//! CLI command handlers for keymapdoc.
//!
//! The binary has a single command: regenerate (or check) the layer
//! diagrams of one keymap file.

pub mod common;
pub mod update;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use update::UpdateArgs;
