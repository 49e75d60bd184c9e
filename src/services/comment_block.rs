//! Layer diagram comment replacement.
//!
//! Finds the box diagram comment inside each layer of a keymap, renders a
//! fresh one from the layer's bindings and splices it over the old block.
//! All spans are computed against the original text; the edits are then
//! applied in one ordered pass that threads the cumulative length change
//! through an explicit [`SpliceOffset`].

use crate::export::diagram;
use crate::keycode_db::SymbolTable;
use crate::models::keymap::LayerBlock;
use crate::parser::keymap::{extract_layer_rows, find_layers};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

/// First line of a diagram: a comment opening with `┏`, two cells wide.
static DIAGRAM_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"//\s+┏━━━━━━━━━━━┳━━━━━━━━━━━┳").expect("valid diagram start regex")
});

/// Line closing the main key well, with `┗` and two cell bottoms.
static DIAGRAM_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"//\s+┗━━━━━━━━━━━┻━━━━━━━━━━━┻").expect("valid diagram end regex")
});

/// Glyphs marking a comment line after the end marker as part of the diagram.
const CONTINUATION_GLYPHS: &[char] = &['┃', '┗', '┻', '┛'];

/// Existing diagram block inside a layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramSpan {
    /// Offset of the start of the first diagram line (before its indent)
    pub start: usize,
    /// Offset just past the last diagram line, including its newline
    pub end: usize,
    /// Leading spaces/tabs of the first diagram line
    pub indent: String,
}

/// Locates the diagram comment within a layer block.
///
/// The block runs from the line holding the start marker through the end
/// marker's line and any following `//` lines that still carry diagram
/// glyphs (old thumb rows and bottom borders). Returns `None` when either
/// marker is missing or they are out of order.
#[must_use]
pub fn locate_diagram(content: &str, layer: &LayerBlock) -> Option<DiagramSpan> {
    let section = layer.section(content);

    let start_marker = DIAGRAM_START.find(section)?;
    let end_marker = DIAGRAM_END.find(section)?;
    if end_marker.start() < start_marker.start() {
        return None;
    }

    let line_start = section[..start_marker.start()]
        .rfind('\n')
        .map_or(0, |newline| newline + 1);
    let indent: String = section[line_start..start_marker.start()]
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect();

    let end_marker_line_end = section[end_marker.end()..]
        .find('\n')
        .map_or(section.len(), |offset| end_marker.end() + offset);

    let mut cursor = end_marker_line_end + 1;
    while cursor < section.len() {
        let line_end = section[cursor..]
            .find('\n')
            .map_or(section.len(), |offset| cursor + offset);
        let line = section[cursor..line_end].trim();

        if line.starts_with("//") && line.contains(CONTINUATION_GLYPHS) {
            cursor = line_end + 1;
        } else {
            break;
        }
    }

    Some(DiagramSpan {
        start: layer.start + line_start,
        end: layer.start + cursor.min(section.len()),
        indent,
    })
}

/// Replacement of `start..end` in the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// Start offset in the original document
    pub start: usize,
    /// End offset (exclusive) in the original document
    pub end: usize,
    /// Text to put in place of the range
    pub replacement: String,
}

impl Splice {
    /// Builds the splice that swaps a diagram span for freshly rendered lines.
    ///
    /// Every line gets the span's indent and a trailing newline.
    #[must_use]
    pub fn for_diagram(span: &DiagramSpan, lines: &[String]) -> Self {
        let mut replacement = lines
            .iter()
            .map(|line| format!("{}{}", span.indent, line))
            .collect::<Vec<_>>()
            .join("\n");
        replacement.push('\n');

        Self {
            start: span.start,
            end: span.end,
            replacement,
        }
    }

    /// Change in document length caused by this splice.
    #[must_use]
    pub fn delta(&self) -> isize {
        self.replacement.len() as isize - (self.end - self.start) as isize
    }

    /// Returns true if applying the splice would not change `content`.
    #[must_use]
    pub fn is_noop(&self, content: &str) -> bool {
        content.get(self.start..self.end) == Some(self.replacement.as_str())
    }
}

/// Cumulative length change of the splices applied so far.
///
/// Maps offsets in the original document onto the partially edited one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpliceOffset(isize);

impl SpliceOffset {
    /// Translates an original-document offset into the edited document.
    #[must_use]
    pub fn shift(self, offset: usize) -> usize {
        (offset as isize + self.0) as usize
    }

    /// The offset after `splice` has been applied.
    #[must_use]
    pub fn after(self, splice: &Splice) -> Self {
        Self(self.0 + splice.delta())
    }
}

/// Document being edited plus the accumulator state of the splice pass.
#[derive(Debug)]
struct EditState {
    text: String,
    offset: SpliceOffset,
    /// End of the last applied splice, in original coordinates
    cursor: usize,
}

impl EditState {
    fn apply(mut self, splice: &Splice) -> Self {
        if splice.start < self.cursor || splice.end < splice.start {
            warn!(
                start = splice.start,
                end = splice.end,
                "Dropping splice that overlaps an earlier edit"
            );
            return self;
        }

        let start = self.offset.shift(splice.start);
        let end = self.offset.shift(splice.end);
        self.text.replace_range(start..end, &splice.replacement);

        Self {
            text: self.text,
            offset: self.offset.after(splice),
            cursor: splice.end,
        }
    }
}

/// Applies splices given in original-document coordinates.
///
/// Splices must be sorted by start offset; one that overlaps an earlier
/// splice is dropped with a warning.
///
/// # Examples
///
/// ```
/// use keymapdoc::services::comment_block::{apply_splices, Splice};
///
/// let splices = [
///     Splice { start: 0, end: 1, replacement: "AAA".to_string() },
///     Splice { start: 2, end: 3, replacement: String::new() },
/// ];
/// assert_eq!(apply_splices("a-c-", &splices), "AAA--");
/// ```
#[must_use]
pub fn apply_splices(content: &str, splices: &[Splice]) -> String {
    let initial = EditState {
        text: content.to_owned(),
        offset: SpliceOffset::default(),
        cursor: 0,
    };

    splices.iter().fold(initial, EditState::apply).text
}

/// Why a layer's diagram was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No `};` after the layer name
    Unterminated,
    /// No `bindings = < ... >;` list, or an empty one
    NoBindings,
    /// Too few bindings to fill all four rows
    IncompleteRows,
    /// No existing diagram comment to replace
    NoDiagram,
    /// Diagram span overlaps the previous layer's
    Overlapping,
}

impl SkipReason {
    /// Human-readable explanation
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Unterminated => "layer block is not closed",
            Self::NoBindings => "no bindings found",
            Self::IncompleteRows => "not enough bindings for all rows",
            Self::NoDiagram => "no diagram comment to replace",
            Self::Overlapping => "diagram overlaps the previous layer",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// What happened to one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerOutcome {
    /// Diagram was regenerated and differs from the old one
    Updated,
    /// Diagram was already current
    Unchanged,
    /// Layer was left untouched
    Skipped(SkipReason),
}

/// Outcome for a named layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerReport {
    /// Layer node name (e.g., "default_layer")
    pub name: String,
    /// What happened to it
    pub outcome: LayerOutcome,
}

/// Result of regenerating all diagrams in a keymap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeymapUpdate {
    /// Keymap text with every regenerated diagram spliced in
    pub content: String,
    /// One report per layer, in source order
    pub layers: Vec<LayerReport>,
}

impl KeymapUpdate {
    /// Layers whose diagram was out of date.
    pub fn stale_layers(&self) -> impl Iterator<Item = &LayerReport> {
        self.layers
            .iter()
            .filter(|report| report.outcome == LayerOutcome::Updated)
    }

    /// Returns true if any diagram changed.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.stale_layers().next().is_some()
    }
}

/// Plans the diagram splice for a single layer.
fn plan_layer(
    content: &str,
    layer: &LayerBlock,
    table: &SymbolTable,
) -> Result<Splice, SkipReason> {
    if !layer.is_terminated() {
        return Err(SkipReason::Unterminated);
    }

    let rows = extract_layer_rows(layer.section(content));
    if rows.is_empty() {
        return Err(SkipReason::NoBindings);
    }

    let labels: Vec<Vec<String>> = rows.iter().map(|row| row.labels(table)).collect();
    let lines = diagram::render(&labels);
    if lines.is_empty() {
        return Err(SkipReason::IncompleteRows);
    }

    let span = locate_diagram(content, layer).ok_or(SkipReason::NoDiagram)?;
    Ok(Splice::for_diagram(&span, &lines))
}

/// Regenerates every layer diagram in a keymap.
///
/// Layers are processed in source order. A layer that cannot be handled is
/// reported and skipped; it never stops the others from being updated.
#[must_use]
pub fn update_keymap(content: &str, table: &SymbolTable) -> KeymapUpdate {
    let mut splices = Vec::new();
    let mut layers = Vec::new();
    let mut last_end = 0;

    for layer in find_layers(content) {
        let outcome = match plan_layer(content, &layer, table) {
            Ok(splice) if splice.start < last_end => LayerOutcome::Skipped(SkipReason::Overlapping),
            Ok(splice) if splice.is_noop(content) => {
                last_end = splice.end;
                LayerOutcome::Unchanged
            }
            Ok(splice) => {
                last_end = splice.end;
                splices.push(splice);
                LayerOutcome::Updated
            }
            Err(reason) => LayerOutcome::Skipped(reason),
        };

        match outcome {
            LayerOutcome::Updated => info!(layer = %layer.name, "Regenerated layer diagram"),
            LayerOutcome::Unchanged => debug!(layer = %layer.name, "Layer diagram already current"),
            LayerOutcome::Skipped(reason) => {
                debug!(layer = %layer.name, %reason, "Skipping layer");
            }
        }

        layers.push(LayerReport {
            name: layer.name,
            outcome,
        });
    }

    KeymapUpdate {
        content: apply_splices(content, &splices),
        layers,
    }
}
