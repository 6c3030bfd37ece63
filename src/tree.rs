//! Public facade over a reconstructed binary tree.

use std::fmt;

use crate::arena::{Node, NodeId, TreeArena};
use crate::builder::TreeBuilder;
use crate::errors::TreeResult;
use crate::layout;

/// A binary tree rebuilt from its pre-order and in-order linearizations.
///
/// ```
/// use retree::BinaryTree;
///
/// let pre: Vec<String> = ["B", "A", "C"].iter().map(|s| s.to_string()).collect();
/// let inorder: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
///
/// let tree = BinaryTree::from_orders(&pre, &inorder)?;
/// assert_eq!(tree.post_order(), "A C B ");
/// # Ok::<(), retree::TreeError>(())
/// ```
#[derive(Debug, Default)]
pub struct BinaryTree {
    arena: TreeArena,
}

impl BinaryTree {
    /// Empty tree; populate it with [`Self::set_orders`].
    pub fn new() -> Self {
        Self {
            arena: TreeArena::new(),
        }
    }

    /// Reconstruct a tree from its pre-order and in-order label sequences.
    pub fn from_orders(pre: &[String], inorder: &[String]) -> TreeResult<Self> {
        Self::from_orders_with(&TreeBuilder::new(), pre, inorder)
    }

    /// Same as [`Self::from_orders`] with an explicitly configured builder
    /// (custom recursion bound).
    pub fn from_orders_with(
        builder: &TreeBuilder,
        pre: &[String],
        inorder: &[String],
    ) -> TreeResult<Self> {
        Ok(Self {
            arena: builder.build(pre, inorder)?,
        })
    }

    /// Replace the whole structure from a new pair of sequences. The
    /// replacement is built before the old tree is dropped, so on failure
    /// the existing tree is left exactly as it was.
    pub fn set_orders(&mut self, pre: &[String], inorder: &[String]) -> TreeResult<()> {
        self.arena = TreeBuilder::new().build(pre, inorder)?;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Height in nodes: 0 for empty, 1 for a lone root.
    pub fn depth(&self) -> usize {
        self.arena.depth()
    }

    /// Drop every node. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.arena.clear();
    }

    /// Read access to the underlying arena and its traversal iterators.
    pub fn arena(&self) -> &TreeArena {
        &self.arena
    }

    /// Breadth-first labels, left to right per level, trailing separator.
    pub fn level_order(&self) -> String {
        Self::join(self.arena.iter_level_order())
    }

    /// Visit, left, right.
    pub fn pre_order(&self) -> String {
        Self::join(self.arena.iter_pre_order())
    }

    /// Left, visit, right. For a tree built by [`Self::from_orders`] this
    /// echoes the in-order input.
    pub fn in_order(&self) -> String {
        Self::join(self.arena.iter_in_order())
    }

    /// Left, right, visit.
    pub fn post_order(&self) -> String {
        Self::join(self.arena.iter_post_order())
    }

    /// Indent-style rendering, right subtree above left.
    pub fn render_vertical(&self) -> String {
        layout::vertical::render(&self.arena)
    }

    /// Underscore box rendering, one row per level.
    pub fn render_horizontal(&self) -> String {
        layout::horizontal::render(&self.arena)
    }

    /// Centered rendering with slash scaffolding.
    pub fn render_symmetric(&self) -> String {
        layout::symmetric::render(&self.arena)
    }

    fn join<'a>(iter: impl Iterator<Item = (NodeId, &'a Node)>) -> String {
        let mut out = String::new();
        for (_, node) in iter {
            out.push_str(&node.label);
            out.push(' ');
        }
        out
    }
}

impl fmt::Display for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_vertical())
    }
}
