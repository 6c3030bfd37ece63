//! Rebuild binary trees from their pre-order and in-order linearizations
//! and render them as ASCII art.
//!
//! The entry point is [`BinaryTree`]: it validates that the two label
//! sequences are duplicate-free permutations of each other, reconstructs
//! the unique tree they encode into an arena, and exposes the four
//! standard linearizations plus three text layouts (vertical, horizontal
//! underscore boxes, symmetric centering). The `retree` binary wraps the
//! same API for files, stdin and command-line label lists.

pub mod arena;
pub mod builder;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod layout;
pub mod traverse;
pub mod tree;
pub mod util;

pub use arena::{Node, NodeId, TreeArena};
pub use builder::{TreeBuilder, DEFAULT_MAX_DEPTH};
pub use config::{LayoutKind, Settings};
pub use errors::{TreeError, TreeResult};
pub use tree::BinaryTree;
