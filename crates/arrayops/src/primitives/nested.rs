//! Recursive nested-sequence values.
//!
//! ## Purpose
//!
//! This module defines [`Nested`], the recursive sum type that represents
//! an element of a possibly-nested sequence: either a plain value or a
//! sub-sequence of further nested elements. It is the input and output
//! element type of the flatten operation.
//!
//! ## Design notes
//!
//! * **Owned tree**: A `Nested` value owns its children, so cyclic or
//!   self-referential structures are unrepresentable and flattening always
//!   terminates on the values it can be given.
//! * **Literals**: The [`nested!`](crate::nested) macro builds nested
//!   sequences with bracket syntax, so fixtures read like array literals.
//!
//! ## Invariants
//!
//! * `count_values` equals the number of `Value` leaves reachable from the
//!   element, at any nesting depth.
//!
//! ## Non-goals
//!
//! * This module does not perform flattening; see the algorithms layer.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Nested
// ============================================================================

/// An element of a possibly-nested sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    /// A plain value.
    Value(T),

    /// A nested sub-sequence.
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Whether this element is a nested sub-sequence.
    pub const fn is_seq(&self) -> bool {
        matches!(self, Nested::Seq(_))
    }

    /// Whether this element is a plain value.
    pub const fn is_value(&self) -> bool {
        matches!(self, Nested::Value(_))
    }

    /// The plain value, if this element is one.
    pub const fn as_value(&self) -> Option<&T> {
        match self {
            Nested::Value(value) => Some(value),
            Nested::Seq(_) => None,
        }
    }

    /// Number of plain values reachable from this element, at any depth.
    pub fn count_values(&self) -> usize {
        match self {
            Nested::Value(_) => 1,
            Nested::Seq(elements) => elements.iter().map(Nested::count_values).sum(),
        }
    }
}

/// Wrap a plain value.
impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Value(value)
    }
}

// ============================================================================
// Literal Macro
// ============================================================================

/// Build a `Vec<Nested<T>>` from a bracketed literal.
///
/// Square brackets nest; everything else is a plain value. Expressions
/// wider than one token need parentheses.
///
/// ```rust
/// use arrayops::prelude::*;
///
/// let values = arrayops::nested![4, [8, [15, 16]], [23], 42];
/// assert_eq!(flatten_deep(&values), vec![4, 8, 15, 16, 23, 42]);
/// ```
#[macro_export]
macro_rules! nested {
    (@elem [ $($inner:tt)* ]) => {
        $crate::__private::Nested::Seq($crate::nested![ $($inner)* ])
    };
    (@elem $value:expr) => {
        $crate::__private::Nested::Value($value)
    };
    () => {
        $crate::__private::Vec::new()
    };
    ($($elem:tt),+ $(,)?) => {
        $crate::__private::Vec::from([ $($crate::nested!(@elem $elem)),+ ])
    };
}
