//! # arrayops — generic sequence operations for Rust
//!
//! A small, dependency-free library of pure operations over ordered
//! sequences: membership predicates (`every`/`some`), search (`find`),
//! depth-bounded flattening of nested sequences, generative construction
//! (`from_fn`), key-bucketing (`group_by`), and an explicit in-place
//! bubble sort.
//!
//! Every operation is a pure, synchronous transformation of its explicit
//! arguments. Nothing performs I/O, blocks, or touches shared state; the
//! only documented mutation is [`bubble_sort`](prelude::bubble_sort),
//! which sorts its slice in place.
//!
//! ## Quick Start
//!
//! ```rust
//! use arrayops::prelude::*;
//!
//! let numbers = [4, 8, 15, 16, 23, 42];
//!
//! // Predicate scans short-circuit at the first decisive element.
//! assert!(every(&numbers, |n, _| *n <= 42));
//! assert!(some(&numbers, |n, _| n % 2 != 0));
//! assert_eq!(find(&numbers, |n, _| *n > 16), Some(&23));
//!
//! // Nested sequences flatten up to a chosen depth.
//! let values = arrayops::nested![4, [8, 15, 16], 23, 42];
//! assert_eq!(flatten_deep(&values), vec![4, 8, 15, 16, 23, 42]);
//!
//! // Generative construction calls the generator once per index.
//! assert_eq!(from_fn(3, |i| i + 1), vec![1, 2, 3]);
//!
//! // Grouping buckets elements by a computed key, preserving
//! // encounter order within each bucket.
//! let groups = group_by(&numbers, |n, _| if n % 2 == 0 { "even" } else { "odd" });
//! assert_eq!(groups["even"], vec![4, 8, 16, 42]);
//! assert_eq!(groups["odd"], vec![15, 23]);
//!
//! // Bubble sort mutates in place and hands the slice back.
//! let mut numbers = numbers;
//! bubble_sort(&mut numbers, |a, b| b.cmp(a));
//! assert_eq!(numbers, [42, 23, 16, 15, 8, 4]);
//! ```
//!
//! ## Flattening with explicit depth
//!
//! [`flatten`](prelude::flatten) takes a [`Depth`](prelude::Depth): a
//! bounded number of levels, or [`Unbounded`](prelude::Depth::Unbounded)
//! to eliminate nesting completely. `Depth::default()` is one level,
//! matching the common shallow-flatten case:
//!
//! ```rust
//! use arrayops::prelude::*;
//!
//! let values = arrayops::nested![4, [8, [15, [16]]], 23, 42];
//!
//! // Two levels in: one level of nesting remains at index 3.
//! let partial = flatten(&values, Depth::Levels(2));
//! assert!(partial[3].is_seq());
//! assert_eq!(partial.len(), 6);
//!
//! // Unbounded flattening leaves only plain values.
//! let full = flatten(&values, Depth::Unbounded);
//! assert!(full.iter().all(|e| e.is_value()));
//! ```
//!
//! ## Error Handling
//!
//! The operations themselves are infallible; errors arise only at the
//! boundary where raw, possibly-negative integers are converted into
//! typed arguments. Those conversions return [`ArrayError`](prelude::ArrayError):
//!
//! ```rust
//! use arrayops::prelude::*;
//!
//! assert!(try_from_len(-1, |i| i).is_err());
//! assert!(Depth::try_from(-3_i64).is_err());
//! assert_eq!(Depth::try_from(2_i64), Ok(Depth::Levels(2)));
//! ```
//!
//! Caller-supplied closures (predicates, comparators, generators, key
//! selectors) are invoked in iteration order and never caught: a panic
//! in caller code propagates unmodified.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments with an allocator. Disable
//! default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! arrayops = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and error types.
mod primitives;

// Layer 2: Algorithms - the sequence operations.
mod algorithms;

// Public surface re-exports.
mod api;

// Standard arrayops prelude.
pub mod prelude {
    pub use crate::api::{
        bubble_sort, bubble_sorted, every, find, flatten, flatten_deep, from_fn, group_by, some,
        try_from_len, ArrayError, Depth,
        Depth::{Levels, Unbounded},
        Nested,
        Nested::{Seq, Value},
    };
}

// Support machinery for the `nested!` macro. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::primitives::nested::Nested;

    #[cfg(not(feature = "std"))]
    pub use alloc::vec::Vec;
    #[cfg(feature = "std")]
    pub use std::vec::Vec;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
