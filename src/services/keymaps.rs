//! Keymap file I/O service.
//!
//! This module reads and writes ZMK `.keymap` files and runs the diagram
//! update between the two.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::keycode_db::SymbolTable;
use crate::services::comment_block::{update_keymap, KeymapUpdate};

/// Service for keymap file operations.
pub struct KeymapService;

impl KeymapService {
    /// Reads a keymap file as UTF-8 text.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use keymapdoc::services::KeymapService;
    ///
    /// let content = KeymapService::load(Path::new("corne.keymap"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read keymap from {}", path.display()))
    }

    /// Writes keymap text to a file, replacing any existing content.
    pub fn save(content: &str, path: &Path) -> Result<()> {
        fs::write(path, content)
            .with_context(|| format!("Failed to write keymap to {}", path.display()))
    }

    /// Loads a keymap and regenerates its layer diagrams in memory.
    ///
    /// Nothing is written; pass the returned content to [`Self::save`].
    pub fn update(path: &Path, table: &SymbolTable) -> Result<KeymapUpdate> {
        let content = Self::load(path)?;
        Ok(update_keymap(&content, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.keymap");

        let err = KeymapService::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read keymap from"));
        assert!(err.to_string().contains("missing.keymap"));
    }

    #[test]
    fn test_save_then_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("corne.keymap");

        KeymapService::save("/ { keymap { }; };\n", &path)?;
        assert_eq!(KeymapService::load(&path)?, "/ { keymap { }; };\n");
        Ok(())
    }

    #[test]
    fn test_update_without_diagrams_keeps_content() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("plain.keymap");
        let content = "base_layer {\n    bindings = <&kp A &kp B>;\n};\n";
        fs::write(&path, content)?;

        let table = SymbolTable::load()?;
        let update = KeymapService::update(&path, &table)?;

        assert_eq!(update.content, content);
        assert!(!update.has_changes());
        Ok(())
    }
}
