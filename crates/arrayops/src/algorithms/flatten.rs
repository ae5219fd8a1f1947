//! Depth-bounded flattening of nested sequences.
//!
//! ## Purpose
//!
//! This module expands nested sub-sequences into a single flat sequence,
//! recursively, up to a caller-chosen [`Depth`].
//!
//! ## Design notes
//!
//! * **Pure**: The input is cloned into the output and never mutated.
//! * **Order**: Elements are spliced into the output in encounter order;
//!   a sub-sequence's elements land exactly where the sub-sequence stood.
//! * **Termination**: `Nested` values own their children, so the recursion
//!   is bounded by the actual nesting of the input. Stack use grows with
//!   nesting depth; pathologically deep inputs can overflow the stack,
//!   which is an accepted limitation rather than a guarded error.
//!
//! ## Invariants
//!
//! * `flatten(seq, Depth::Levels(0))` is element-wise equal to `seq`.
//! * `flatten(seq, Depth::Unbounded)` contains no `Seq` elements.
//! * The number of `Value` leaves is preserved at every depth.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::depth::Depth;
use crate::primitives::nested::Nested;

// ============================================================================
// Flatten
// ============================================================================

/// A new sequence with nested sub-sequences expanded up to `depth` levels.
///
/// A sub-sequence is expanded only while remaining depth is at least one;
/// anything deeper is carried over as-is. `Depth::Levels(0)` therefore
/// yields a shallow copy, and `Depth::Unbounded` eliminates all nesting.
pub fn flatten<T>(seq: &[Nested<T>], depth: Depth) -> Vec<Nested<T>>
where
    T: Clone,
{
    let mut out = Vec::with_capacity(seq.len());
    splice(seq, depth, &mut out);
    out
}

/// A fully flattened sequence, unwrapped to plain values.
///
/// Equivalent to `flatten(seq, Depth::Unbounded)` followed by unwrapping
/// every leaf, without building the intermediate sequence.
pub fn flatten_deep<T>(seq: &[Nested<T>]) -> Vec<T>
where
    T: Clone,
{
    let mut out = Vec::with_capacity(seq.len());
    collect_values(seq, &mut out);
    out
}

// ============================================================================
// Recursion
// ============================================================================

/// Append `seq` to `out`, expanding sub-sequences while depth remains.
fn splice<T>(seq: &[Nested<T>], depth: Depth, out: &mut Vec<Nested<T>>)
where
    T: Clone,
{
    for element in seq {
        match element {
            Nested::Seq(inner) if depth.allows_descent() => {
                splice(inner, depth.descend(), out);
            }
            other => out.push(other.clone()),
        }
    }
}

/// Append every `Value` leaf under `seq` to `out`, in encounter order.
fn collect_values<T>(seq: &[Nested<T>], out: &mut Vec<T>)
where
    T: Clone,
{
    for element in seq {
        match element {
            Nested::Value(value) => out.push(value.clone()),
            Nested::Seq(inner) => collect_values(inner, out),
        }
    }
}
