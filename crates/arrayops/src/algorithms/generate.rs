//! Generative sequence construction.
//!
//! ## Purpose
//!
//! This module builds a sequence of a requested length by calling a
//! generator once per index.
//!
//! ## Design notes
//!
//! * **Exactly once**: The generator is invoked exactly once per index, in
//!   strictly ascending order; a zero length never invokes it.
//! * **Boundary validation**: [`try_from_len`] accepts a raw signed length
//!   and rejects values that are negative or do not fit `usize`, instead
//!   of silently coercing.
//!
//! ## Non-goals
//!
//! * No memoization across calls; repeated indices across separate calls
//!   are independent invocations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::ArrayError;

// ============================================================================
// Construction
// ============================================================================

/// A sequence of `length` elements where element `i` equals `generator(i)`.
pub fn from_fn<T, F>(length: usize, mut generator: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    let mut out = Vec::with_capacity(length);
    for index in 0..length {
        out.push(generator(index));
    }
    out
}

/// [`from_fn`] for lengths arriving as raw signed integers.
///
/// Fails with [`ArrayError::InvalidLength`] when `length` is negative or
/// exceeds the address space. The generator is not invoked on failure.
pub fn try_from_len<T, F>(length: i64, generator: F) -> Result<Vec<T>, ArrayError>
where
    F: FnMut(usize) -> T,
{
    match usize::try_from(length) {
        Ok(length) => Ok(from_fn(length, generator)),
        Err(_) => Err(ArrayError::InvalidLength { got: length }),
    }
}
