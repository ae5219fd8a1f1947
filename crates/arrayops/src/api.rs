//! Public surface for sequence operations.
//!
//! ## Purpose
//!
//! This module gathers the crate's seven operations and their argument
//! types into one flat namespace. The [`prelude`](crate::prelude)
//! re-exports everything here.
//!
//! ## Key concepts
//!
//! * **Scans**: [`every`], [`some`], [`find`].
//! * **Flattening**: [`flatten`], [`flatten_deep`], controlled by [`Depth`]
//!   over sequences of [`Nested`] elements.
//! * **Construction**: [`from_fn`], with [`try_from_len`] validating raw
//!   signed lengths.
//! * **Grouping**: [`group_by`].
//! * **Sorting**: [`bubble_sort`] (in place), [`bubble_sorted`] (copying).

// Publicly re-exported operations
pub use crate::algorithms::flatten::{flatten, flatten_deep};
pub use crate::algorithms::generate::{from_fn, try_from_len};
pub use crate::algorithms::group::group_by;
pub use crate::algorithms::scan::{every, find, some};
pub use crate::algorithms::sorting::{bubble_sort, bubble_sorted};

// Publicly re-exported types
pub use crate::primitives::depth::Depth;
pub use crate::primitives::errors::ArrayError;
pub use crate::primitives::nested::Nested;
