//! Update command: regenerate the layer diagrams of a keymap file.

use crate::cli::common::{CliError, CliResult};
use crate::keycode_db::SymbolTable;
use crate::services::comment_block::KeymapUpdate;
use crate::services::KeymapService;
use clap::Args;
use std::path::{Path, PathBuf};

/// Regenerate the layer diagram comments in a ZMK keymap file
#[derive(Debug, Clone, Args)]
pub struct UpdateArgs {
    /// Path to the .keymap file to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the updated keymap (defaults to INPUT)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Only report stale diagrams; exit non-zero if any would change
    #[arg(long)]
    pub check: bool,

    /// Log what happens to each layer
    #[arg(short, long)]
    pub verbose: bool,
}

impl UpdateArgs {
    /// Execute the update command
    pub fn execute(&self) -> CliResult<()> {
        let table = SymbolTable::load()
            .map_err(|e| CliError::io(format!("Failed to load symbol table: {e}")))?;

        let update = KeymapService::update(&self.input, &table)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        if self.check {
            return report_stale(&update);
        }

        let output = self.output_path();
        KeymapService::save(&update.content, output)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!("✓ Updated keymap saved to: {}", output.display());
        Ok(())
    }

    /// Path the result is written to: OUTPUT if given, otherwise INPUT.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }
}

/// Lists stale layers for `--check`.
fn report_stale(update: &KeymapUpdate) -> CliResult<()> {
    let stale: Vec<&str> = update
        .stale_layers()
        .map(|report| report.name.as_str())
        .collect();

    if stale.is_empty() {
        println!("✓ All layer diagrams are up to date");
        return Ok(());
    }

    println!("Out-of-date layer diagrams:");
    for name in &stale {
        println!("  {name}");
    }

    Err(CliError::validation(format!(
        "{} layer diagram(s) out of date",
        stale.len()
    )))
}
