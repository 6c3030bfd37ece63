//! ASCII layout engines.
//!
//! Three independent renderings of the same tree: [`vertical`] (indent-based,
//! right subtree above left), [`horizontal`] (underscore box form) and
//! [`symmetric`] (centered titles with slash scaffolding). Horizontal and
//! symmetric run a metrics pass over the tree first, keeping the scratch data
//! in a per-pass map so nothing leaks between renderings, then emit the text
//! level by level.

pub mod horizontal;
pub mod symmetric;
pub mod vertical;

/// Glyph printed in the slot of an absent child.
pub(crate) const PLACEHOLDER: &str = "x";

/// Advance `row` to `column`, filling with `fill`. No-op when the cursor is
/// already at or past the column. Columns are byte positions; labels are
/// assumed printable ASCII.
pub(crate) fn pad_to(row: &mut String, column: usize, fill: char) {
    while row.len() < column {
        row.push(fill);
    }
}
