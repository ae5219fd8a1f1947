//! Key-bucketing of sequence elements.
//!
//! ## Purpose
//!
//! This module groups a sequence's elements into buckets keyed by a
//! caller-supplied selector.
//!
//! ## Design notes
//!
//! * **Stable buckets**: Each bucket preserves the relative order in which
//!   its members were encountered in the source sequence.
//! * **No empty buckets**: A bucket exists iff the selector produced its
//!   key for at least one element.
//! * **Map choice**: `BTreeMap` keeps the result deterministic and works
//!   without `std`. Key iteration order (sorted) is an implementation
//!   detail, not part of the contract.
//!
//! ## Invariants
//!
//! * Concatenating all buckets yields a permutation of the input in which
//!   each element appears exactly once.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

// ============================================================================
// Grouping
// ============================================================================

/// Bucket elements by the key the selector computes for each.
///
/// The selector receives each element and its index, in ascending index
/// order. A bucket is created the first time its key is seen; subsequent
/// members are appended in encounter order.
pub fn group_by<T, K, F>(seq: &[T], mut key_selector: F) -> BTreeMap<K, Vec<T>>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T, usize) -> K,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for (index, value) in seq.iter().enumerate() {
        let key = key_selector(value, index);
        groups.entry(key).or_default().push(value.clone());
    }
    groups
}
