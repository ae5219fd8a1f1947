#![cfg(feature = "dev")]
//! White-box tests for the primitives layer, through `arrayops::internals`.
//!
//! These tests verify:
//! - Depth descent arithmetic and the unbounded fixed point
//! - Boundary conversions into `Depth`
//! - `Nested` inspection helpers and error formatting
//!
//! ## Test Organization
//!
//! 1. **Depth** - Descent, defaults, conversions
//! 2. **Nested** - Inspection helpers
//! 3. **Errors** - Display formatting

use arrayops::internals::primitives::depth::Depth;
use arrayops::internals::primitives::errors::ArrayError;
use arrayops::internals::primitives::nested::Nested;

// ============================================================================
// Depth
// ============================================================================

#[test]
fn test_depth_default_is_one_level() {
    assert_eq!(Depth::default(), Depth::Levels(1));
}

#[test]
fn test_depth_descent() {
    assert_eq!(Depth::Levels(2).descend(), Depth::Levels(1));
    assert_eq!(Depth::Levels(1).descend(), Depth::Levels(0));
    // Saturates at zero rather than wrapping.
    assert_eq!(Depth::Levels(0).descend(), Depth::Levels(0));
}

#[test]
fn test_depth_unbounded_is_descent_fixed_point() {
    assert_eq!(Depth::Unbounded.descend(), Depth::Unbounded);
    assert!(Depth::Unbounded.allows_descent());
}

#[test]
fn test_depth_allows_descent() {
    assert!(!Depth::Levels(0).allows_descent());
    assert!(Depth::Levels(1).allows_descent());
    assert!(Depth::Levels(100).allows_descent());
}

#[test]
fn test_depth_from_usize() {
    assert_eq!(Depth::from(3_usize), Depth::Levels(3));
}

#[test]
fn test_depth_try_from_signed() {
    assert_eq!(Depth::try_from(0_i64), Ok(Depth::Levels(0)));
    assert_eq!(Depth::try_from(2_i64), Ok(Depth::Levels(2)));
    assert_eq!(
        Depth::try_from(-1_i64),
        Err(ArrayError::InvalidDepth { got: -1 })
    );
}

// ============================================================================
// Nested
// ============================================================================

#[test]
fn test_nested_inspection_helpers() {
    let value: Nested<i32> = Nested::Value(4);
    let seq: Nested<i32> = Nested::Seq(arrayops::nested![8, 15]);

    assert!(value.is_value());
    assert!(!value.is_seq());
    assert_eq!(value.as_value(), Some(&4));

    assert!(seq.is_seq());
    assert!(!seq.is_value());
    assert_eq!(seq.as_value(), None);
}

#[test]
fn test_nested_count_values() {
    let flat: Nested<i32> = Nested::Value(4);
    assert_eq!(flat.count_values(), 1);

    let deep: Nested<i32> = Nested::Seq(arrayops::nested![4, [8, [15, 16]], 23]);
    assert_eq!(deep.count_values(), 5);

    let empty: Nested<i32> = Nested::Seq(arrayops::nested![]);
    assert_eq!(empty.count_values(), 0);
}

#[test]
fn test_nested_from_value() {
    assert_eq!(Nested::from(42), Nested::Value(42));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_error_display_formatting() {
    assert_eq!(
        ArrayError::InvalidDepth { got: -3 }.to_string(),
        "Invalid depth: -3 (must be a non-negative integer)"
    );
    assert_eq!(
        ArrayError::InvalidLength { got: -9 }.to_string(),
        "Invalid length: -9 (must be a non-negative integer)"
    );
}
