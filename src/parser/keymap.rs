//! ZMK keymap layer discovery and binding extraction.
//!
//! Only as much of the devicetree syntax is understood as is needed to find
//! `<name>_layer { ... };` blocks and the `bindings = < ... >;` list inside
//! them. Everything else in the file is treated as opaque text.

use crate::models::keymap::{BindingRow, LayerBlock, BLOCK_TERMINATOR, ROW_WIDTHS};
use regex::Regex;
use std::sync::LazyLock;

/// `<identifier>_layer` followed by an opening brace.
static LAYER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+_layer)\s*\{").expect("valid layer regex"));

/// `bindings = < ... >;`, capturing the list body.
static BINDINGS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"bindings\s*=\s*<([^>]+)>;").expect("valid bindings regex"));

/// `//` comment through end of line.
static LINE_COMMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)//.*$").expect("valid comment regex"));

/// Marker that starts every binding directive.
const DIRECTIVE_MARKER: char = '&';

/// Finds every layer block in a keymap, in source order.
///
/// # Examples
///
/// ```
/// use keymapdoc::parser::keymap::find_layers;
///
/// let keymap = "keymap { base_layer { bindings = <&kp A>; }; };";
/// let layers = find_layers(keymap);
/// assert_eq!(layers.len(), 1);
/// assert_eq!(layers[0].name, "base_layer");
/// ```
#[must_use]
pub fn find_layers(content: &str) -> Vec<LayerBlock> {
    LAYER_PATTERN
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|name| LayerBlock::new(content, name.as_str(), name.start()))
        .collect()
}

/// Extracts a layer's bindings grouped into physical rows.
///
/// `layer_text` starts at the layer's name and may run past the end of the
/// layer; it is cut at the first `};`. Returns an empty vector when the
/// layer has no binding list or the list holds no directives.
///
/// Rows are filled strictly in source order with [`ROW_WIDTHS`] directives
/// each. The first row that cannot be filled takes whatever is left (possibly
/// nothing) and ends extraction; directives past the last row are ignored.
#[must_use]
pub fn extract_layer_rows(layer_text: &str) -> Vec<BindingRow> {
    let layer_text = match layer_text.find(BLOCK_TERMINATOR) {
        Some(end) => &layer_text[..end],
        None => layer_text,
    };

    let Some(bindings) = BINDINGS_PATTERN
        .captures(layer_text)
        .and_then(|caps| caps.get(1))
    else {
        return Vec::new();
    };

    let directives = split_directives(bindings.as_str());
    if directives.is_empty() {
        return Vec::new();
    }

    partition_rows(directives)
}

/// Splits a binding list body into directive strings.
///
/// Line comments are stripped first. Each directive keeps its leading `&`
/// and is trimmed; internal whitespace is left as written.
#[must_use]
pub fn split_directives(bindings: &str) -> Vec<String> {
    let uncommented = LINE_COMMENT_PATTERN.replace_all(bindings, "");

    uncommented
        .split(DIRECTIVE_MARKER)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| format!("{DIRECTIVE_MARKER}{fragment}"))
        .collect()
}

/// Groups directives into rows of [`ROW_WIDTHS`], stopping at the first short row.
fn partition_rows(directives: Vec<String>) -> Vec<BindingRow> {
    let mut remaining = directives.into_iter();
    let mut rows = Vec::with_capacity(ROW_WIDTHS.len());

    for width in ROW_WIDTHS {
        let row = BindingRow::new(remaining.by_ref().take(width).collect(), width);
        let is_full = row.is_full();
        rows.push(row);

        if !is_full {
            break;
        }
    }

    rows
}
