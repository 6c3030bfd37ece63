//! Horizontal ("underscore box") rendering.
//!
//! Two phases. A post-order width pass records, per node, the column it
//! starts at and the width reserved for its left branch; underscores bridge
//! a label to its right child's column. Emission then walks the tree level
//! by level, printing a label row and, above each child level, a scaffold
//! row of bars and backslashes.

use std::collections::HashMap;

use tracing::instrument;

use crate::arena::{NodeId, TreeArena};
use crate::layout::{pad_to, PLACEHOLDER};

#[derive(Debug, Clone, Copy)]
struct Metrics {
    offset: usize,
    left_width: usize,
}

/// One emission slot of a level. Placeholders carry only the column they
/// occupy and are dropped with the level vector that owns them.
enum Slot {
    Node(NodeId),
    Placeholder { offset: usize },
}

#[instrument(level = "debug", skip(arena))]
pub fn render(arena: &TreeArena) -> String {
    let Some(root) = arena.root() else {
        return String::new();
    };

    let mut metrics = HashMap::new();
    measure(arena, &mut metrics, Some(root), 0);

    let mut out = String::new();
    let mut level = vec![Slot::Node(root)];
    while !level.is_empty() {
        let mut next = Vec::new();

        let mut row = String::new();
        for slot in &level {
            match *slot {
                Slot::Placeholder { offset } => {
                    pad_to(&mut row, offset, ' ');
                    row.push_str(PLACEHOLDER);
                }
                Slot::Node(id) => {
                    let node = &arena[id];
                    let m = metrics[&id];
                    pad_to(&mut row, m.offset, ' ');
                    row.push_str(&node.label);
                    if !node.is_leaf() {
                        pad_to(&mut row, m.offset + m.left_width, '_');
                        next.push(child_slot(node.left, m.offset));
                        next.push(child_slot(node.right, m.offset + m.left_width + 1));
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

fn child_slot(child: Option<NodeId>, offset: usize) -> Slot {
    match child {
        Some(id) => Slot::Node(id),
        None => Slot::Placeholder { offset },
    }
}

/// Scaffold row under the branching nodes of `level`: a bar above each left
/// child column, a backslash above each right child column.
fn connector_row(arena: &TreeArena, metrics: &HashMap<NodeId, Metrics>, level: &[Slot]) -> String {
    let mut row = String::new();
    for slot in level {
        if let Slot::Node(id) = *slot {
            let node = &arena[id];
            if !node.is_leaf() {
                let m = metrics[&id];
                pad_to(&mut row, m.offset, ' ');
                row.push('|');
                pad_to(&mut row, m.offset + m.left_width, ' ');
                row.push('\\');
            }
        }
    }
    row
}

/// Post-order width pass; offsets are assigned top-down through the
/// recursion. Returns the subtree's total width. An absent child occupies
/// one column for its placeholder glyph.
fn measure(
    arena: &TreeArena,
    metrics: &mut HashMap<NodeId, Metrics>,
    id: Option<NodeId>,
    offset: usize,
) -> usize {
    let Some(id) = id else {
        return 1;
    };
    let node = &arena[id];

    if node.is_leaf() {
        metrics.insert(
            id,
            Metrics {
                offset,
                left_width: 0,
            },
        );
        return node.label.len();
    }

    let mut left_width = measure(arena, metrics, node.left, offset);
    if node.label.len() >= left_width {
        left_width = node.label.len();
    } else {
        left_width += 2; // room for the separator underscores
    }
    let right_width = measure(arena, metrics, node.right, offset + left_width + 1);

    metrics.insert(id, Metrics { offset, left_width });
    left_width + 1 + right_width
}
