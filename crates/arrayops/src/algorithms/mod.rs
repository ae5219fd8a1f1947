//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer implements the sequence operations: predicate scans,
//! flattening, generative construction, grouping, and bubble sort. Each
//! operation is independent and callable in isolation.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Predicate scans: every, some, find.
pub mod scan;

/// Depth-bounded flattening of nested sequences.
pub mod flatten;

/// Generative sequence construction.
pub mod generate;

/// Key-bucketing.
pub mod group;

/// In-place bubble sort.
pub mod sorting;
