//! Symmetric (centered) rendering.
//!
//! Three phases. A bottom-up pass splits every subtree into left and right
//! half-widths and reserves a title span for the node's own label between
//! its children's inner halves. A top-down pass turns the widths into
//! absolute columns, placing a right child's title one column after its
//! parent's title ends. Emission walks level by level, centering each title
//! inside underscore padding with a slash/backslash scaffold row above each
//! child level.

use std::collections::HashMap;

use tracing::instrument;

use crate::arena::{NodeId, TreeArena};
use crate::layout::{pad_to, PLACEHOLDER};

#[derive(Debug, Clone, Copy, Default)]
struct Metrics {
    left_width: usize,
    right_width: usize,
    title_width: usize,
    offset: usize,
    title_offset: usize,
}

enum Slot {
    Node(NodeId),
    Placeholder { title_offset: usize },
}

#[instrument(level = "debug", skip(arena))]
pub fn render(arena: &TreeArena) -> String {
    let Some(root) = arena.root() else {
        return String::new();
    };

    let mut metrics = HashMap::new();
    measure(arena, &mut metrics, root);
    place(arena, &mut metrics, root, 0);

    let mut out = String::new();
    let mut level = vec![Slot::Node(root)];
    while !level.is_empty() {
        let mut next = Vec::new();

        let mut row = String::new();
        for slot in &level {
            match *slot {
                Slot::Placeholder { title_offset } => {
                    pad_to(&mut row, title_offset, ' ');
                    row.push_str(PLACEHOLDER);
                }
                Slot::Node(id) => {
                    let node = &arena[id];
                    let m = metrics[&id];
                    pad_to(&mut row, m.title_offset, ' ');
                    push_title(&mut row, &node.label, m.title_width);
                    if !node.is_leaf() {
                        match node.left {
                            Some(left) => next.push(Slot::Node(left)),
                            None => next.push(Slot::Placeholder {
                                title_offset: m.offset,
                            }),
                        }
                        match node.right {
                            Some(right) => next.push(Slot::Node(right)),
                            None => next.push(Slot::Placeholder {
                                title_offset: m.title_offset + m.title_width + 1,
                            }),
                        }
                    }
                }
            }
        }
        out.push_str(&row);
        out.push('\n');

        if !next.is_empty() {
            out.push_str(&connector_row(arena, &metrics, &level));
            out.push('\n');
        }
        level = next;
    }
    out
}

/// Center `label` within `title_width` underscore padding. For an odd
/// delta the left side gets the floor and the right side the ceiling, a
/// fixed numeric contract the rendered geometry depends on.
fn push_title(row: &mut String, label: &str, title_width: usize) {
    let delta = title_width - label.len();
    for _ in 0..delta / 2 {
        row.push('_');
    }
    row.push_str(label);
    for _ in 0..delta - delta / 2 {
        row.push('_');
    }
}

/// Scaffold row under the branching nodes of `level`: a slash one column
/// before each title, a backslash one past it.
fn connector_row(arena: &TreeArena, metrics: &HashMap<NodeId, Metrics>, level: &[Slot]) -> String {
    let mut row = String::new();
    for slot in level {
        if let Slot::Node(id) = *slot {
            let node = &arena[id];
            if !node.is_leaf() {
                let m = metrics[&id];
                // title_offset >= offset + 2 for any branching node
                pad_to(&mut row, m.title_offset - 1, ' ');
                row.push('/');
                pad_to(&mut row, m.title_offset + m.title_width, ' ');
                row.push('\\');
            }
        }
    }
    row
}

/// Bottom-up width pass. Returns the subtree's half-widths; a missing
/// child contributes `(0, 1)` for its placeholder column.
fn measure(
    arena: &TreeArena,
    metrics: &mut HashMap<NodeId, Metrics>,
    id: NodeId,
) -> (usize, usize) {
    let node = &arena[id];

    let m = if node.is_leaf() {
        let title_width = node.label.len();
        Metrics {
            left_width: title_width / 2,
            right_width: title_width - title_width / 2,
            title_width,
            ..Metrics::default()
        }
    } else {
        let (ll, lr) = match node.left {
            Some(left) => measure(arena, metrics, left),
            None => (0, 1),
        };
        let (rl, rr) = match node.right {
            Some(right) => measure(arena, metrics, right),
            None => (0, 1),
        };
        // the title spans the gap between the children's inner halves,
        // widened to the label when the label is longer
        let title_width = (lr + rl).saturating_sub(2).max(node.label.len());
        Metrics {
            left_width: ll + 2 + title_width / 2,
            right_width: title_width - title_width / 2 + 1 + rr,
            title_width,
            ..Metrics::default()
        }
    };
    metrics.insert(id, m);
    (m.left_width, m.right_width)
}

/// Top-down column pass. A left child keeps its parent's offset; a right
/// child starts so that its title begins one column after the parent's
/// title ends.
fn place(arena: &TreeArena, metrics: &mut HashMap<NodeId, Metrics>, id: NodeId, offset: usize) {
    let mut m = metrics[&id];
    m.offset = offset;
    m.title_offset = offset + m.left_width - m.title_width / 2;
    metrics.insert(id, m);

    let node = &arena[id];
    if let Some(left) = node.left {
        place(arena, metrics, left, offset);
    }
    if let Some(right) = node.right {
        let child_left = metrics[&right].left_width;
        let child_offset = (m.title_offset + m.title_width + 1).saturating_sub(child_left);
        place(arena, metrics, right, child_offset);
    }
}
