//! Tests for depth-bounded flattening.
//!
//! These tests verify:
//! - Shallow (depth 1) and partial (depth n) expansion
//! - Depth 0 as a pure shallow copy
//! - Unbounded flattening of arbitrary nesting
//! - Purity: the input sequence is never mutated
//!
//! ## Test Organization
//!
//! 1. **Bounded Depth** - One and two levels of expansion
//! 2. **Depth Zero** - Shallow copy semantics
//! 3. **Unbounded Depth** - Complete flattening
//! 4. **Purity and Structure** - Input preservation, leaf counts

use arrayops::nested;
use arrayops::prelude::*;

// ============================================================================
// Bounded Depth
// ============================================================================

#[test]
fn test_flatten_depth_one() {
    let values = nested![4, [8, 15, 16], 23, 42];
    let flat = flatten(&values, Depth::Levels(1));
    assert_eq!(flat, nested![4, 8, 15, 16, 23, 42]);
}

/// Depth 1 is the default.
#[test]
fn test_flatten_default_depth_is_one() {
    let values = nested![4, [8, 15, 16], 23, 42];
    assert_eq!(
        flatten(&values, Depth::default()),
        flatten(&values, Depth::Levels(1))
    );
}

/// Two levels into a triply nested fixture: index 3 still holds one level
/// of nesting while its neighbors are plain values.
#[test]
fn test_flatten_depth_two_leaves_inner_nesting() {
    let values = nested![4, [8, [15, [16]]], 23, 42];
    let flat = flatten(&values, Depth::Levels(2));

    assert_eq!(flat.len(), 6);
    assert!(flat[2].is_value());
    assert!(flat[3].is_seq());
    assert!(flat[4].is_value());
    assert_eq!(flat[3], Nested::Seq(nested![16]));
}

/// Expanding deeper than the actual nesting is harmless.
#[test]
fn test_flatten_depth_beyond_nesting() {
    let values = nested![4, [8, 15, 16], 23, 42];
    assert_eq!(flatten(&values, Depth::Levels(10)), nested![4, 8, 15, 16, 23, 42]);
}

// ============================================================================
// Depth Zero
// ============================================================================

#[test]
fn test_flatten_depth_zero_is_shallow_copy() {
    let values = nested![4, [8, 15, 16], 23, 42];
    let copy = flatten(&values, Depth::Levels(0));
    assert_eq!(copy, values);
}

// ============================================================================
// Unbounded Depth
// ============================================================================

#[test]
fn test_flatten_unbounded() {
    let values = nested![4, [8, [15, 16]], [23], 42];
    assert_eq!(
        flatten(&values, Depth::Unbounded),
        nested![4, 8, 15, 16, 23, 42]
    );
}

#[test]
fn test_flatten_unbounded_leaves_no_seq_elements() {
    let values = nested![[[[4]]], [8, [[15]]], 16];
    let flat = flatten(&values, Depth::Unbounded);
    assert!(flat.iter().all(Nested::is_value));
    assert_eq!(flat.len(), 4);
}

#[test]
fn test_flatten_deep_unwraps_values() {
    let values = nested![4, [8, [15, 16]], [23], 42];
    assert_eq!(flatten_deep(&values), vec![4, 8, 15, 16, 23, 42]);
}

#[test]
fn test_flatten_deep_equals_unbounded_flatten() {
    let values = nested![1, [2, [3, [4, [5]]]], 6];
    let unbounded = flatten(&values, Depth::Unbounded);
    let deep = flatten_deep(&values);
    let unwrapped: Vec<i32> = unbounded
        .iter()
        .map(|e| *e.as_value().expect("unbounded flatten left a seq"))
        .collect();
    assert_eq!(deep, unwrapped);
}

// ============================================================================
// Purity and Structure
// ============================================================================

#[test]
fn test_flatten_does_not_mutate_input() {
    let values = nested![4, [8, 15, 16], 23, 42];
    let before = values.clone();
    let _ = flatten(&values, Depth::Unbounded);
    assert_eq!(values, before);
}

#[test]
fn test_flatten_empty_input() {
    let values: Vec<Nested<i32>> = nested![];
    assert!(flatten(&values, Depth::Levels(1)).is_empty());
    assert!(flatten_deep(&values).is_empty());
}

/// Empty sub-sequences vanish when expanded and survive when not.
#[test]
fn test_flatten_empty_subsequence() {
    let values = nested![4, [], 8];
    assert_eq!(flatten(&values, Depth::Levels(1)), nested![4, 8]);
    assert_eq!(flatten(&values, Depth::Levels(0)).len(), 3);
}

/// Leaf count is invariant under flattening at any depth.
#[test]
fn test_flatten_preserves_leaf_count() {
    let values = nested![4, [8, [15, [16]]], 23, 42];
    let leaves: usize = values.iter().map(Nested::count_values).sum();
    for depth in [Depth::Levels(0), Depth::Levels(1), Depth::Levels(3), Depth::Unbounded] {
        let flat = flatten(&values, depth);
        let flat_leaves: usize = flat.iter().map(Nested::count_values).sum();
        assert_eq!(flat_leaves, leaves);
    }
}
