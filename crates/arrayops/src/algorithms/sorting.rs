//! In-place bubble sort with an explicit comparator.
//!
//! ## Purpose
//!
//! This module provides the reference O(n²) comparator sort. It is the
//! one operation in the crate that mutates caller-owned state, and it is
//! deliberately not a production sort.
//!
//! ## Design notes
//!
//! * **Exact access pattern**: The scan compares position `i` against
//!   every later position `j` and swaps on `Greater`. This is the
//!   selection-like bubble variant, not textbook adjacent-pair bubble
//!   sort; the comparison count is always n(n−1)/2.
//! * **Not stable**: Equal elements never trigger a swap, but the
//!   two-index scan can still reorder them relative to each other. Callers
//!   must not rely on stability.
//! * **Comparator convention**: `Less`/`Equal` mean "leave in place",
//!   `Greater` means "swap". A comparator that violates transitivity gets
//!   unspecified (but deterministic) results.
//!
//! ## Invariants
//!
//! * The multiset of elements is preserved exactly.
//! * The slice is sorted in place; the returned borrow is the argument.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Bubble Sort
// ============================================================================

/// Sort the slice in place and return the same borrow.
///
/// For each `i` from `0` to `len − 2` and each `j` from `i + 1` to
/// `len − 1`, the elements at `i` and `j` are compared and swapped when
/// the comparator returns [`Ordering::Greater`].
pub fn bubble_sort<'a, T, F>(arr: &'a mut [T], mut comparator: F) -> &'a mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();
    if n < 2 {
        return arr;
    }

    for i in 0..n - 1 {
        for j in i + 1..n {
            if comparator(&arr[i], &arr[j]) == Ordering::Greater {
                arr.swap(i, j);
            }
        }
    }

    arr
}

/// Non-destructive variant: copy, then [`bubble_sort`] the copy.
///
/// A thin wrapper; the in-place sort is the primitive.
pub fn bubble_sorted<T, F>(seq: &[T], comparator: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = seq.to_vec();
    bubble_sort(&mut out, comparator);
    out
}
