//! Vertical rendering.
//!
//! Pre-order walk printing the right subtree above the left one, each line
//! indented by an accumulating pattern of `"  |"` segments. A node that is
//! its parent's left child ends the parent's column: the bar it inherited
//! flips to a space before the prefix grows.

use tracing::instrument;

use crate::arena::{NodeId, TreeArena};
use crate::layout::PLACEHOLDER;

#[instrument(level = "debug", skip(arena))]
pub fn render(arena: &TreeArena) -> String {
    let mut out = String::new();
    if let Some(root) = arena.root() {
        render_node(arena, &mut out, root, "", false);
    }
    out
}

fn render_node(arena: &TreeArena, out: &mut String, id: NodeId, prefix: &str, is_left: bool) {
    let node = &arena[id];

    if !prefix.is_empty() {
        out.push_str(prefix);
        out.push_str("__");
    }
    out.push_str(&node.label);
    out.push('\n');

    if node.is_leaf() {
        return;
    }

    let lead = if is_left {
        format!("{} ", &prefix[..prefix.len() - 1])
    } else {
        prefix.to_owned()
    };
    let child_prefix = if lead.is_empty() {
        "|".to_owned()
    } else {
        format!("{lead}  |")
    };

    if let Some(right) = node.right {
        render_node(arena, out, right, &child_prefix, false);
        // bare-prefix separator between the sibling blocks
        out.push_str(&child_prefix);
        out.push('\n');
    }
    match node.left {
        Some(left) => render_node(arena, out, left, &child_prefix, true),
        // a lone rendered child reads as the left one, so a missing left
        // slot under a right child is marked explicitly
        None => {
            out.push_str(&child_prefix);
            out.push_str("__");
            out.push_str(PLACEHOLDER);
            out.push('\n');
        }
    }
}
