//! Predicate scans over sequences.
//!
//! ## Purpose
//!
//! This module provides the three forward scans driven by a caller-supplied
//! predicate: [`every`], [`some`], and [`find`].
//!
//! ## Design notes
//!
//! * **Short-circuit**: Each scan stops at the first decisive element.
//! * **Order**: Elements are visited in ascending index order; the
//!   predicate receives the element and its index.
//! * **Duality**: `some(seq, p)` equals `!every(seq, |v, i| !p(v, i))`.
//!
//! ## Invariants
//!
//! * The input sequence is never mutated.
//! * The predicate is invoked at most once per element, and never for
//!   elements past the short-circuit point.
//!
//! ## Non-goals
//!
//! * No parallel evaluation; predicate side effects observe strict
//!   iteration order.

// ============================================================================
// Scans
// ============================================================================

/// Whether the predicate holds for every element.
///
/// Returns `true` for an empty sequence (vacuous truth). Stops scanning at
/// the first element for which the predicate returns `false`.
pub fn every<T, P>(seq: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T, usize) -> bool,
{
    for (index, value) in seq.iter().enumerate() {
        if !predicate(value, index) {
            return false;
        }
    }
    true
}

/// Whether the predicate holds for at least one element.
///
/// Returns `false` for an empty sequence. Stops scanning at the first
/// element for which the predicate returns `true`.
pub fn some<T, P>(seq: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T, usize) -> bool,
{
    for (index, value) in seq.iter().enumerate() {
        if predicate(value, index) {
            return true;
        }
    }
    false
}

/// The first element for which the predicate holds, or `None`.
///
/// `None` is the not-found marker; it is distinct from any element value,
/// so a sequence may legitimately contain "empty-looking" elements (e.g.
/// `Option::None` payloads) without ambiguity.
pub fn find<T, P>(seq: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T, usize) -> bool,
{
    for (index, value) in seq.iter().enumerate() {
        if predicate(value, index) {
            return Some(value);
        }
    }
    None
}
