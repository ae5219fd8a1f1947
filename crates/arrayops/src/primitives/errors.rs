//! Error types for sequence operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when converting
//! raw caller-supplied integers into typed operation arguments.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value.
//! * **Narrow**: The operations themselves are infallible; only argument
//!   conversion can fail.
//! * **No-std**: Implements `Display` from `core`; `std::error::Error` is
//!   gated behind the `std` feature.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * Failures raised by caller-supplied closures are not represented here;
//!   they propagate to the caller unmodified.

#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sequence operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// Sequence length must be a non-negative integer representable as `usize`.
    InvalidLength {
        /// The length provided.
        got: i64,
    },

    /// Flattening depth must be a non-negative integer.
    InvalidDepth {
        /// The depth provided.
        got: i64,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ArrayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidLength { got } => {
                write!(f, "Invalid length: {got} (must be a non-negative integer)")
            }
            Self::InvalidDepth { got } => {
                write!(f, "Invalid depth: {got} (must be a non-negative integer)")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ArrayError {}
