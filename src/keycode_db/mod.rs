//! ZMK keycode symbol table.
//!
//! This module provides the embedded keycode → label table used to print
//! short key legends into layer diagrams, plus the directive parser that
//! decides which keycode of a binding gets shown.

pub mod display;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

pub use display::Directive;

/// A named group of symbols in symbols.json (e.g. "letters", "media").
#[derive(Debug, Clone, Deserialize)]
struct SymbolGroup {
    /// Group ID, informational only
    #[allow(dead_code)]
    id: String,
    /// Keycode → label pairs
    symbols: HashMap<String, String>,
}

/// Database schema from symbols.json.
#[derive(Debug, Clone, Deserialize)]
struct SymbolDatabase {
    #[allow(dead_code)]
    version: String,
    groups: Vec<SymbolGroup>,
}

/// Immutable keycode → display label table.
///
/// The table is embedded in the binary at compile time and loaded once at
/// startup. Lookups never fail: a keycode without an entry is echoed back
/// unchanged so that unknown or future keycodes still get a legend.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    labels: HashMap<String, String>,
}

impl SymbolTable {
    /// Loads the symbol table from the embedded JSON file.
    pub fn load() -> Result<Self> {
        Self::from_json(include_str!("symbols.json"))
            .context("Failed to parse embedded symbols.json")
    }

    /// Builds a table from a symbols.json document.
    ///
    /// A keycode listed in two groups is rejected, since the winning label
    /// would depend on group order.
    pub fn from_json(json: &str) -> Result<Self> {
        let db: SymbolDatabase = serde_json::from_str(json)?;

        let mut labels = HashMap::new();
        for group in db.groups {
            for (keycode, label) in group.symbols {
                if labels.contains_key(&keycode) {
                    bail!("Keycode '{}' is defined more than once", keycode);
                }
                labels.insert(keycode, label);
            }
        }

        Ok(Self { labels })
    }

    /// Returns the label for a keycode, or the keycode itself when unknown.
    ///
    /// Compound codes such as `RA(A)` are looked up verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use keymapdoc::keycode_db::SymbolTable;
    ///
    /// let table = SymbolTable::load().unwrap();
    /// assert_eq!(table.label("SPACE"), "SPC");
    /// assert_eq!(table.label("RA(A)"), "Ä");
    /// assert_eq!(table.label("F24"), "F24");
    /// ```
    #[must_use]
    pub fn label<'a>(&'a self, keycode: &'a str) -> &'a str {
        self.labels.get(keycode).map_or(keycode, String::as_str)
    }

    /// Gets the label for a keycode only if the table defines one.
    #[must_use]
    pub fn get(&self, keycode: &str) -> Option<&str> {
        self.labels.get(keycode).map(String::as_str)
    }

    /// Iterates over every (keycode, label) pair in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Gets the number of keycodes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_table() -> SymbolTable {
        SymbolTable::load().expect("Failed to load symbol table")
    }

    #[test]
    fn test_load_table() {
        let table = get_test_table();
        assert!(table.len() > 100);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_letters_and_digits() {
        let table = get_test_table();
        assert_eq!(table.label("Q"), "Q");
        assert_eq!(table.label("M"), "M");
        assert_eq!(table.label("N0"), "0");
        assert_eq!(table.label("N9"), "9");
    }

    #[test]
    fn test_modifiers_collapse_sides() {
        let table = get_test_table();
        assert_eq!(table.label("LSHFT"), "SHIFT");
        assert_eq!(table.label("RSHIFT"), "SHIFT");
        assert_eq!(table.label("LCTRL"), "CTRL");
        assert_eq!(table.label("RGUI"), "GUI");
    }

    #[test]
    fn test_symbols() {
        let table = get_test_table();
        assert_eq!(table.label("SEMI"), ";");
        assert_eq!(table.label("BSLH"), "\\");
        assert_eq!(table.label("DQT"), "\"");
        assert_eq!(table.label("CARET"), "ˆ");
    }

    #[test]
    fn test_compound_codes() {
        let table = get_test_table();
        assert_eq!(table.label("RA(A)"), "Ä");
        assert_eq!(table.label("RA(N5)"), "EURO");
        assert_eq!(table.label("LS(RA(N4))"), "YEN");
    }

    #[test]
    fn test_unknown_keycode_echoes() {
        let table = get_test_table();
        assert_eq!(table.label("C_BRI_UP"), "C_BRI_UP");
        assert_eq!(table.label(""), "");
        assert_eq!(table.get("C_BRI_UP"), None);
    }

    #[test]
    fn test_duplicate_keycode_rejected() {
        let json = r#"{
            "version": "1.0",
            "groups": [
                { "id": "a", "symbols": { "Q": "Q" } },
                { "id": "b", "symbols": { "Q": "q" } }
            ]
        }"#;
        let err = SymbolTable::from_json(json).unwrap_err();
        assert!(err.to_string().contains("'Q'"));
    }

    #[test]
    fn test_iter_matches_len() {
        let table = get_test_table();
        assert_eq!(table.iter().count(), table.len());
    }
}
