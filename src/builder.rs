use itertools::Itertools;
use tracing::{debug, instrument};

use crate::arena::{Node, NodeId, TreeArena};
use crate::errors::{TreeError, TreeResult};

/// Tree height accepted by [`TreeBuilder::new`].
///
/// Reconstruction recurses once per level, so the bound caps stack use for
/// degenerate chain-shaped inputs. Every later pass (traversal, rendering)
/// descends an already-admitted tree and inherits the bound.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Validates a pre-order/in-order pair and reconstructs the tree it encodes.
pub struct TreeBuilder {
    max_depth: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Accept trees up to `max_depth` levels deep instead of the default.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// True iff both sequences carry the same multiset of labels
    /// (order-independent, duplicates significant).
    pub fn is_permutation(a: &[String], b: &[String]) -> bool {
        a.len() == b.len() && a.iter().sorted().eq(b.iter().sorted())
    }

    /// Error-reporting form of [`Self::is_permutation`], plus duplicate
    /// detection: duplicate labels make the in-order split ambiguous, so the
    /// pair is rejected instead of guessing.
    pub fn validate(&self, pre: &[String], inorder: &[String]) -> TreeResult<()> {
        if pre.len() != inorder.len() {
            return Err(TreeError::LengthMismatch {
                pre: pre.len(),
                inorder: inorder.len(),
            });
        }

        let sorted_pre: Vec<&String> = pre.iter().sorted().collect();
        let sorted_in: Vec<&String> = inorder.iter().sorted().collect();
        for (a, b) in sorted_pre.iter().zip(sorted_in.iter()) {
            if a != b {
                // the smaller label is the first one over-represented on its side
                let offending = (*a).min(*b);
                return Err(TreeError::LabelSetMismatch((*offending).clone()));
            }
        }

        if let Some((dup, _)) = sorted_in.iter().tuple_windows().find(|(a, b)| a == b) {
            return Err(TreeError::AmbiguousStructure((**dup).clone()));
        }

        Ok(())
    }

    /// Build the tree encoded by the pair. The arena is complete before it
    /// is handed out, so a failure never leaks a partial structure.
    #[instrument(level = "debug", skip(self, pre, inorder), fields(labels = pre.len()))]
    pub fn build(&self, pre: &[String], inorder: &[String]) -> TreeResult<TreeArena> {
        self.validate(pre, inorder)?;

        let mut arena = TreeArena::new();
        let root = self.construct(&mut arena, pre, inorder, 0)?;
        arena.set_root(root);
        debug!("reconstructed tree with {} nodes", arena.len());
        Ok(arena)
    }

    fn construct(
        &self,
        arena: &mut TreeArena,
        pre: &[String],
        inorder: &[String],
        depth: usize,
    ) -> TreeResult<Option<NodeId>> {
        if pre.is_empty() {
            return Ok(None);
        }
        if depth >= self.max_depth {
            return Err(TreeError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        // The head of the pre-order slice is this subtree's root; its
        // in-order position splits both slices into the two subtrees.
        let label = &pre[0];
        let split = inorder
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| TreeError::StructureMismatch(label.clone()))?;

        let left = self.construct(arena, &pre[1..=split], &inorder[..split], depth + 1)?;
        let right = self.construct(arena, &pre[split + 1..], &inorder[split + 1..], depth + 1)?;

        Ok(Some(arena.insert(Node {
            label: label.clone(),
            left,
            right,
        })))
    }
}
