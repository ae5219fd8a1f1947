//! Flattening depth control.
//!
//! ## Purpose
//!
//! This module defines [`Depth`], the typed argument that bounds how many
//! levels of nesting a flatten pass expands.
//!
//! ## Design notes
//!
//! * **Typed sentinel**: "flatten completely" is a distinct enum variant
//!   (`Unbounded`) rather than a floating-point infinity, keeping depth in
//!   an integer domain plus one special case.
//! * **Validated**: `TryFrom<i64>` rejects negative depths at the boundary
//!   where untyped integers enter the API.
//!
//! ## Invariants
//!
//! * `Levels(0)` never permits descent; `Unbounded` always does.
//! * `descend` saturates at `Levels(0)` and is a fixed point on `Unbounded`.

// Internal dependencies
use crate::primitives::errors::ArrayError;

// ============================================================================
// Depth
// ============================================================================

/// How many levels of nesting a flatten pass may expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Expand at most this many levels. `Levels(0)` performs no expansion
    /// and leaves the sequence element-wise unchanged.
    Levels(usize),

    /// Expand every level, regardless of how deep the nesting goes.
    Unbounded,
}

/// One level of expansion, the conventional shallow flatten.
impl Default for Depth {
    fn default() -> Self {
        Depth::Levels(1)
    }
}

impl Depth {
    /// Whether at least one more level of nesting may be expanded.
    pub const fn allows_descent(self) -> bool {
        !matches!(self, Depth::Levels(0))
    }

    /// The depth remaining after expanding one level.
    pub const fn descend(self) -> Depth {
        match self {
            Depth::Levels(n) => Depth::Levels(n.saturating_sub(1)),
            Depth::Unbounded => Depth::Unbounded,
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<usize> for Depth {
    fn from(levels: usize) -> Self {
        Depth::Levels(levels)
    }
}

/// Boundary conversion for depths arriving as raw signed integers.
impl TryFrom<i64> for Depth {
    type Error = ArrayError;

    fn try_from(depth: i64) -> Result<Self, Self::Error> {
        match usize::try_from(depth) {
            Ok(levels) => Ok(Depth::Levels(levels)),
            Err(_) => Err(ArrayError::InvalidDepth { got: depth }),
        }
    }
}
