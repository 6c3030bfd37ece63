//! Tests for traversal validation and tree reconstruction

use rstest::{fixture, rstest};

use retree::util::testing;
use retree::{BinaryTree, TreeBuilder, TreeError};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn labels(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

/// The nine-node reference tree used throughout the suite:
///
/// ```text
///         F
///       /   \
///      B     G
///     / \     \
///    A   D     I
///       / \   /
///      C   E H
/// ```
#[fixture]
fn nine_node_tree() -> BinaryTree {
    BinaryTree::from_orders(
        &labels("F B A D C E G I H"),
        &labels("A B C D E F G H I"),
    )
    .expect("reference tree builds")
}

// ============================================================
// Multiset validation
// ============================================================

#[test]
fn given_reordered_multiset_when_checking_permutation_then_accepts() {
    assert!(TreeBuilder::is_permutation(
        &labels("F B A D C E G I H"),
        &labels("A B C D E F G H I"),
    ));
    assert!(TreeBuilder::is_permutation(&labels("A"), &labels("A")));
    assert!(TreeBuilder::is_permutation(&labels(""), &labels("")));
}

#[test]
fn given_differing_lengths_when_checking_permutation_then_rejects() {
    assert!(!TreeBuilder::is_permutation(
        &labels("A B C"),
        &labels("A B"),
    ));
}

#[test]
fn given_differing_multisets_when_checking_permutation_then_rejects() {
    assert!(!TreeBuilder::is_permutation(
        &labels("A B C"),
        &labels("A B D"),
    ));
    // same set, different multiplicities
    assert!(!TreeBuilder::is_permutation(
        &labels("A A B"),
        &labels("A B B"),
    ));
}

#[test]
fn given_length_mismatch_when_validating_then_reports_both_counts() {
    let builder = TreeBuilder::new();

    let err = builder
        .validate(&labels("A B C"), &labels("A B"))
        .unwrap_err();

    match err {
        TreeError::LengthMismatch { pre, inorder } => {
            assert_eq!(pre, 3);
            assert_eq!(inorder, 2);
        }
        other => panic!("expected LengthMismatch, got {other:?}"),
    }
}

#[test]
fn given_disjoint_labels_when_validating_then_names_offending_label() {
    let builder = TreeBuilder::new();

    let err = builder
        .validate(&labels("A B"), &labels("A C"))
        .unwrap_err();

    match err {
        TreeError::LabelSetMismatch(label) => assert_eq!(label, "B"),
        other => panic!("expected LabelSetMismatch, got {other:?}"),
    }
}

#[test]
fn given_duplicate_label_when_validating_then_rejects_as_ambiguous() {
    let builder = TreeBuilder::new();

    // both sides agree on the multiset, but "A" occurs twice
    let err = builder
        .validate(&labels("A B A"), &labels("B A A"))
        .unwrap_err();

    match err {
        TreeError::AmbiguousStructure(label) => assert_eq!(label, "A"),
        other => panic!("expected AmbiguousStructure, got {other:?}"),
    }
}

// ============================================================
// Reconstruction
// ============================================================

#[rstest]
fn given_nine_node_example_when_building_then_all_nodes_are_stored(
    nine_node_tree: BinaryTree,
) {
    assert!(!nine_node_tree.is_empty());
    assert_eq!(nine_node_tree.node_count(), 9);
    // longest paths are F-B-D-C and F-G-I-H
    assert_eq!(nine_node_tree.depth(), 4);
}

#[test]
fn given_same_multiset_without_tree_shape_when_building_then_reports_mismatch() {
    // "A" splits the in-order into [C] and [B], but pre-order wants B first;
    // B is then missing from its own in-order slice
    let result = BinaryTree::from_orders(&labels("A B C"), &labels("C A B"));

    match result.unwrap_err() {
        TreeError::StructureMismatch(label) => assert_eq!(label, "B"),
        other => panic!("expected StructureMismatch, got {other:?}"),
    }
}

#[test]
fn given_empty_orders_when_building_then_tree_is_empty() {
    let tree = BinaryTree::from_orders(&[], &[]).expect("empty pair is valid");

    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 0);
    assert_eq!(tree.depth(), 0);
}

#[test]
fn given_single_label_when_building_then_tree_is_lone_root() {
    let tree = BinaryTree::from_orders(&labels("A"), &labels("A")).unwrap();

    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.depth(), 1);
}

// ============================================================
// Depth bound
// ============================================================

#[test]
fn given_chain_deeper_than_bound_when_building_then_rejects() {
    let builder = TreeBuilder::with_max_depth(4);

    // left-leaning chain of five nodes
    let err = builder
        .build(&labels("A B C D E"), &labels("E D C B A"))
        .unwrap_err();

    match err {
        TreeError::DepthExceeded { limit } => assert_eq!(limit, 4),
        other => panic!("expected DepthExceeded, got {other:?}"),
    }
}

#[test]
fn given_chain_exactly_at_bound_when_building_then_accepts() {
    let builder = TreeBuilder::with_max_depth(4);

    let arena = builder
        .build(&labels("A B C D"), &labels("D C B A"))
        .expect("chain at the bound builds");

    assert_eq!(arena.depth(), 4);
}

// ============================================================
// set_orders atomicity
// ============================================================

#[rstest]
fn given_loaded_tree_when_set_orders_fails_then_previous_tree_survives(
    mut nine_node_tree: BinaryTree,
) {
    let before = nine_node_tree.level_order();

    let result = nine_node_tree.set_orders(&labels("A B A"), &labels("B A A"));

    assert!(result.is_err());
    assert_eq!(nine_node_tree.level_order(), before);
    assert_eq!(nine_node_tree.node_count(), 9);
}

#[rstest]
fn given_loaded_tree_when_set_orders_succeeds_then_tree_is_replaced(
    mut nine_node_tree: BinaryTree,
) {
    nine_node_tree
        .set_orders(&labels("B A C"), &labels("A B C"))
        .expect("replacement pair builds");

    assert_eq!(nine_node_tree.node_count(), 3);
    assert_eq!(nine_node_tree.level_order(), "B A C ");
}
