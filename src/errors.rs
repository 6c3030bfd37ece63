use thiserror::Error;

/// Errors raised while validating traversal input or reconstructing a tree.
///
/// Rendering and traversal never fail: the builder is the single gate, and
/// everything downstream walks a structure it already admitted.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("pre-order carries {pre} labels but in-order carries {inorder}")]
    LengthMismatch { pre: usize, inorder: usize },

    #[error("label {0:?} does not occur equally often in both traversals")]
    LabelSetMismatch(String),

    #[error("duplicate label {0:?} makes the traversal pair ambiguous")]
    AmbiguousStructure(String),

    #[error("pre-order and in-order disagree on the position of {0:?}; the pair encodes no binary tree")]
    StructureMismatch(String),

    #[error("tree height exceeds the recursion limit of {limit}")]
    DepthExceeded { limit: usize },
}

pub type TreeResult<T> = Result<T, TreeError>;
