//! Keymap layer and binding row data structures.

use crate::keycode_db::SymbolTable;

/// Keys per physical row, top to bottom, for the 38-key split layout.
///
/// The last row is the thumb cluster.
pub const ROW_WIDTHS: [usize; 4] = [10, 10, 12, 6];

/// Token that closes a layer block in a keymap file.
pub const BLOCK_TERMINATOR: &str = "};";

/// A `<name>_layer {` block found in a keymap file.
///
/// Offsets are byte offsets into the document the block was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerBlock {
    /// Layer node name (e.g., "default_layer")
    pub name: String,
    /// Offset of the first byte of the name
    pub start: usize,
    /// Offset of the nearest following `};`, if any
    pub end: Option<usize>,
}

impl LayerBlock {
    /// Creates a layer block, locating its terminator in `content`.
    #[must_use]
    pub fn new(content: &str, name: impl Into<String>, start: usize) -> Self {
        let end = content[start..]
            .find(BLOCK_TERMINATOR)
            .map(|offset| start + offset);

        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Returns true if the block has a closing `};`.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.end.is_some()
    }

    /// The layer's own text: from the name up to (not including) `};`.
    ///
    /// An unterminated layer runs to the end of the document.
    #[must_use]
    pub fn section<'a>(&self, content: &'a str) -> &'a str {
        match self.end {
            Some(end) => &content[self.start..end],
            None => &content[self.start..],
        }
    }
}

/// Binding directives for one physical row.
///
/// A row taken from a layer that ran out of bindings holds fewer
/// directives than its width; the missing keys render as blank cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingRow {
    /// Directive strings in source order (e.g., "&kp Q", "&mt LGUI A")
    pub directives: Vec<String>,
    /// Number of physical keys in the row
    pub width: usize,
}

impl BindingRow {
    /// Creates a row from directives and its physical width.
    pub fn new(directives: Vec<String>, width: usize) -> Self {
        Self { directives, width }
    }

    /// Returns true if every key in the row has a directive.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.directives.len() >= self.width
    }

    /// Resolves every directive to its legend, padding to the row width.
    #[must_use]
    pub fn labels(&self, table: &SymbolTable) -> Vec<String> {
        let mut labels: Vec<String> = self
            .directives
            .iter()
            .map(|directive| table.resolve(directive))
            .collect();
        labels.resize(self.width.max(labels.len()), String::new());
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_block_section_stops_at_terminator() {
        let content = "x base_layer { bindings = <&kp A>; }; nav_layer { };";
        let start = content.find("base_layer").unwrap();
        let block = LayerBlock::new(content, "base_layer", start);

        assert!(block.is_terminated());
        assert_eq!(block.section(content), "base_layer { bindings = <&kp A>; ");
    }

    #[test]
    fn test_layer_block_unterminated_runs_to_end() {
        let content = "base_layer { bindings = <&kp A>;";
        let block = LayerBlock::new(content, "base_layer", 0);

        assert!(!block.is_terminated());
        assert_eq!(block.section(content), content);
    }

    #[test]
    fn test_binding_row_labels_pad_to_width() {
        let table = SymbolTable::load().unwrap();
        let row = BindingRow::new(vec!["&kp Q".to_string(), "&trans".to_string()], 5);

        assert!(!row.is_full());
        assert_eq!(row.labels(&table), vec!["Q", "", "", "", ""]);
    }

    #[test]
    fn test_binding_row_full() {
        let table = SymbolTable::load().unwrap();
        let row = BindingRow::new(vec!["&kp N1".to_string(), "&kp N2".to_string()], 2);

        assert!(row.is_full());
        assert_eq!(row.labels(&table), vec!["1", "2"]);
    }
}
