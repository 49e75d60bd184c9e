//! Layer diagram renderer for keymap comments.
//!
//! Draws the 38-key split layout (5-5, 5-5, 6-6 and a 3-3 thumb cluster)
//! with heavy box-drawing characters. Every line is a `//` comment so the
//! block can be dropped straight into a keymap file.
//!
//! ```text
//! //             ┏━━━━━━━━━━━┳━━━━ ... ━━━━┓   ┏━━━━━━━━━━━┳━━━━ ... ━━━━┓
//! //             ┃     Q     ┃     ...     ┃   ┃     Y     ┃     ...     ┃
//! //             ┣━━━━━━━━━━━╋━━━━ ... ━━━━┫   ┣━━━━━━━━━━━╋━━━━ ... ━━━━┫
//! ```

use crate::models::keymap::ROW_WIDTHS;

/// Label columns inside a key cell.
pub const LABEL_WIDTH: usize = 9;

/// Columns taken by one key: `┃`, padded label, trailing space.
const CELL_SPAN: usize = LABEL_WIDTH + 3;

/// Blank columns between the two halves.
const SPLIT_GAP: &str = "   ";

/// Prefix of every diagram line.
const COMMENT_PREFIX: &str = "//";

/// Horizontal run between two junctions; matches a cell's inner width.
const SEGMENT: char = '━';

/// Left-edge columns (after `//`) of the widest row; other rows are inset from it.
const BASE_INDENT: usize = 1;

/// Junction characters for one half of a border line.
///
/// Each string has one more junction than the half has keys.
struct BorderStyle {
    left: &'static str,
    right: &'static str,
}

/// Above the top row.
const TOP_BORDER: BorderStyle = BorderStyle {
    left: "┏┳┳┳┳┓",
    right: "┏┳┳┳┳┓",
};

/// Between rows 0 and 1.
const UPPER_SEPARATOR: BorderStyle = BorderStyle {
    left: "┣╋╋╋╋┫",
    right: "┣╋╋╋╋┫",
};

/// Between row 1 and the wider row 2; opens the outer pinky column.
const WIDENING_SEPARATOR: BorderStyle = BorderStyle {
    left: "┏╋╋╋╋╋┫",
    right: "┣╋╋╋╋╋┓",
};

/// Between row 2 and the thumbs; closes everything outside the thumb cluster.
const THUMB_SEPARATOR: BorderStyle = BorderStyle {
    left: "┗┻┻╋╋╋┫",
    right: "┣╋╋╋┻┻┛",
};

/// Below the thumb cluster.
const THUMB_BOTTOM: BorderStyle = BorderStyle {
    left: "┗┻┻┛",
    right: "┗┻┻┛",
};

/// Renders resolved row labels into diagram lines.
///
/// Expects at least four rows (top, home, bottom, thumbs) and returns no
/// lines otherwise, so the caller can leave the old diagram alone. Rows
/// shorter than the physical layout render blank cells; extra labels are
/// ignored.
///
/// # Examples
///
/// ```
/// use keymapdoc::export::diagram::render;
///
/// let rows: Vec<Vec<String>> = [10, 10, 12, 6]
///     .iter()
///     .map(|&n| vec!["X".to_string(); n])
///     .collect();
/// let lines = render(&rows);
/// assert_eq!(lines.len(), 9);
/// assert!(lines.iter().all(|line| line.starts_with("//")));
///
/// assert!(render(&rows[..3]).is_empty());
/// ```
#[must_use]
pub fn render(rows: &[Vec<String>]) -> Vec<String> {
    if rows.len() < ROW_WIDTHS.len() {
        return Vec::new();
    }

    let [top, home, bottom, thumbs] = ROW_WIDTHS;
    // Rows 0-1 sit one key in from row 2, the thumbs three keys in
    let finger_indent = BASE_INDENT + CELL_SPAN;
    let thumb_indent = BASE_INDENT + 3 * CELL_SPAN;

    vec![
        border_line(finger_indent, &TOP_BORDER),
        key_line(finger_indent, &rows[0], top),
        border_line(finger_indent, &UPPER_SEPARATOR),
        key_line(finger_indent, &rows[1], home),
        border_line(BASE_INDENT, &WIDENING_SEPARATOR),
        key_line(BASE_INDENT, &rows[2], bottom),
        border_line(BASE_INDENT, &THUMB_SEPARATOR),
        key_line(thumb_indent, &rows[3], thumbs),
        border_line(thumb_indent, &THUMB_BOTTOM),
    ]
}

/// Truncates a label to [`LABEL_WIDTH`] characters and centers it.
///
/// When the padding is odd the extra space goes on the right.
#[must_use]
pub fn pad_label(label: &str) -> String {
    let truncated: String = label.chars().take(LABEL_WIDTH).collect();
    format!("{:^width$}", truncated, width = LABEL_WIDTH)
}

/// One row of key cells, split into halves of `width / 2` keys.
fn key_line(indent: usize, labels: &[String], width: usize) -> String {
    let half = width / 2;
    let left = (0..half).map(|i| label_at(labels, i));
    let right = (half..width).map(|i| label_at(labels, i));

    format!(
        "{COMMENT_PREFIX}{}{}┃{SPLIT_GAP}{}┃",
        " ".repeat(indent),
        cells(left),
        cells(right)
    )
}

fn label_at(labels: &[String], index: usize) -> &str {
    labels.get(index).map_or("", String::as_str)
}

fn cells<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels
        .map(|label| format!("┃ {} ", pad_label(label)))
        .collect()
}

fn border_line(indent: usize, style: &BorderStyle) -> String {
    format!(
        "{COMMENT_PREFIX}{}{}{SPLIT_GAP}{}",
        " ".repeat(indent),
        border(style.left),
        border(style.right)
    )
}

/// Joins junction characters with cell-wide horizontal runs.
fn border(junctions: &str) -> String {
    let run: String = std::iter::repeat(SEGMENT).take(CELL_SPAN - 1).collect();
    let mut line = String::new();

    for (i, junction) in junctions.chars().enumerate() {
        if i > 0 {
            line.push_str(&run);
        }
        line.push(junction);
    }

    line
}
