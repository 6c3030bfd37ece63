//! Traversal iterators over a [`TreeArena`].
//!
//! All four walk the finished tree without touching it: the DFS forms keep
//! an explicit stack (O(h)), level order keeps a FIFO queue (O(w)).

use std::collections::VecDeque;

use crate::arena::{Node, NodeId, TreeArena};

/// Depth-first: visit, left, right.
pub struct PreOrder<'a> {
    arena: &'a TreeArena,
    stack: Vec<NodeId>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(arena: &'a TreeArena) -> Self {
        Self {
            arena,
            stack: arena.root().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = &self.arena[idx];
        // right below left so the left subtree pops first
        if let Some(right) = node.right {
            self.stack.push(right);
        }
        if let Some(left) = node.left {
            self.stack.push(left);
        }
        Some((idx, node))
    }
}

/// Depth-first: left, visit, right.
///
/// Entries are two-phase: a node is pushed back once its left subtree has
/// been scheduled, and yielded when it surfaces the second time.
pub struct InOrder<'a> {
    arena: &'a TreeArena,
    stack: Vec<(NodeId, bool)>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(arena: &'a TreeArena) -> Self {
        Self {
            arena,
            stack: arena.root().map(|r| (r, false)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, expanded)) = self.stack.pop() {
            let node = &self.arena[idx];
            if expanded {
                return Some((idx, node));
            }
            if let Some(right) = node.right {
                self.stack.push((right, false));
            }
            self.stack.push((idx, true));
            if let Some(left) = node.left {
                self.stack.push((left, false));
            }
        }
        None
    }
}

/// Depth-first: left, right, visit.
pub struct PostOrder<'a> {
    arena: &'a TreeArena,
    stack: Vec<(NodeId, bool)>,
}

impl<'a> PostOrder<'a> {
    pub(crate) fn new(arena: &'a TreeArena) -> Self {
        Self {
            arena,
            stack: arena.root().map(|r| (r, false)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, expanded)) = self.stack.pop() {
            let node = &self.arena[idx];
            if expanded {
                return Some((idx, node));
            }
            self.stack.push((idx, true));
            if let Some(right) = node.right {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left {
                self.stack.push((left, false));
            }
        }
        None
    }
}

/// Breadth-first, left-to-right within each level.
pub struct LevelOrder<'a> {
    arena: &'a TreeArena,
    queue: VecDeque<NodeId>,
}

impl<'a> LevelOrder<'a> {
    pub(crate) fn new(arena: &'a TreeArena) -> Self {
        Self {
            arena,
            queue: arena.root().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.queue.pop_front()?;
        let node = &self.arena[idx];
        if let Some(left) = node.left {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right {
            self.queue.push_back(right);
        }
        Some((idx, node))
    }
}
