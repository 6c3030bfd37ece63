use generational_arena::Arena;
use std::fmt;
use std::ops;
use tracing::instrument;

use crate::traverse::{InOrder, LevelOrder, PostOrder, PreOrder};

/// Identity of a node within its [`TreeArena`].
///
/// Also serves as the key of the per-pass metrics maps the layout engine
/// builds, so rendering scratch state never lives on the node itself.
pub type NodeId = generational_arena::Index;

/// A single labelled tree node. Children are arena indices, never aliased.
#[derive(Debug, Clone)]
pub struct Node {
    /// Payload shown by every traversal and rendering
    pub label: String,
    /// Index of the left child, if any
    pub left: Option<NodeId>,
    /// Index of the right child, if any
    pub right: Option<NodeId>,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Arena-based storage for one binary tree.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// All wiring happens inside the crate (the builder is the only writer), so
/// the structure is guaranteed acyclic and every non-root node has exactly
/// one parent.
#[derive(Debug)]
pub struct TreeArena {
    /// Arena storage for all tree nodes
    arena: Arena<Node>,
    /// Index of the root node, None for empty trees
    root: Option<NodeId>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self, node))]
    pub(crate) fn insert(&mut self, node: Node) -> NodeId {
        self.arena.insert(node)
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    pub fn get(&self, idx: NodeId) -> Option<&Node> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes currently stored.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Drop every node at once. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Height of the tree in nodes: 0 for empty, 1 for a lone root.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        match self.root {
            Some(root) => self.node_depth(root),
            None => 0,
        }
    }

    fn node_depth(&self, idx: NodeId) -> usize {
        let node = &self[idx];
        let left = node.left.map(|l| self.node_depth(l)).unwrap_or(0);
        let right = node.right.map(|r| self.node_depth(r)).unwrap_or(0);
        1 + left.max(right)
    }

    /// Depth-first iterator: visit, then left subtree, then right subtree.
    pub fn iter_pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self)
    }

    /// Depth-first iterator: left subtree, visit, right subtree.
    pub fn iter_in_order(&self) -> InOrder<'_> {
        InOrder::new(self)
    }

    /// Depth-first iterator: left subtree, right subtree, visit.
    pub fn iter_post_order(&self) -> PostOrder<'_> {
        PostOrder::new(self)
    }

    /// Breadth-first iterator, left-to-right within each level.
    pub fn iter_level_order(&self) -> LevelOrder<'_> {
        LevelOrder::new(self)
    }
}

impl ops::Index<NodeId> for TreeArena {
    type Output = Node;

    fn index(&self, idx: NodeId) -> &Node {
        &self.arena[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(label: &str) -> Node {
        Node {
            label: label.to_string(),
            left: None,
            right: None,
        }
    }

    #[test]
    fn test_empty_arena() {
        let arena = TreeArena::new();
        assert!(arena.is_empty());
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.depth(), 0);
    }

    #[test]
    fn test_depth_counts_nodes_on_longest_path() {
        let mut arena = TreeArena::new();
        let l = arena.insert(leaf("L"));
        let ll = arena.insert(Node {
            label: "M".to_string(),
            left: Some(l),
            right: None,
        });
        let r = arena.insert(leaf("R"));
        let root = arena.insert(Node {
            label: "T".to_string(),
            left: Some(ll),
            right: Some(r),
        });
        arena.set_root(Some(root));

        assert_eq!(arena.depth(), 3);
        assert_eq!(arena.len(), 4);
    }

    #[test]
    fn test_clear_is_repeatable() {
        let mut arena = TreeArena::new();
        let root = arena.insert(leaf("A"));
        arena.set_root(Some(root));
        assert!(!arena.is_empty());

        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.len(), 0);

        arena.clear();
        assert!(arena.is_empty());
    }
}
