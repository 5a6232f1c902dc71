//! Error types for record array operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building or
//! reading a record array, plus the configuration errors reported by the
//! summation builder.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (lengths, index).
//! * **Closed**: Arithmetic never produces an error; overflow and NaN follow the
//!   documented semantics of the numeric kind.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Shape errors**: The two input columns have different lengths.
//! 2. **Index errors**: A read or slot replacement is outside `[0, len)`.
//! 3. **Configuration errors**: A builder parameter was set twice.
//! 4. **Input errors**: An input container cannot be viewed as a contiguous slice.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not trap arithmetic overflow or NaN.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for record array operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// `xs` and `ys` must have the same number of elements.
    Shape {
        /// Number of elements in the `xs` column.
        x_len: usize,
        /// Number of elements in the `ys` column.
        y_len: usize,
    },

    /// Index is outside `[0, len)`.
    Index {
        /// The requested index.
        index: usize,
        /// Length of the array.
        len: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Shape { x_len, y_len } => {
                write!(f, "Shape mismatch: xs has {x_len} values, ys has {y_len}")
            }
            Self::Index { index, len } => {
                write!(f, "Index out of range: {index} (length is {len})")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RecordError {}
