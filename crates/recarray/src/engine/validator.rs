//! Input validation for record arrays and their configuration.
//!
//! ## Purpose
//!
//! This module provides the checks that guard construction, indexed access
//! and builder configuration. All methods return `Result<(), RecordError>`.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Shape checks are generic over the element type.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check numeric values; NaN and infinities are valid
//!   floating-point data.
//! * This module does not build or modify arrays.

// Internal dependencies
use crate::primitives::errors::RecordError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for record array inputs and configuration.
pub struct Validator;

impl Validator {
    /// Validate that both input columns have the same length.
    pub fn validate_shape<K>(xs: &[K], ys: &[K]) -> Result<(), RecordError> {
        if xs.len() != ys.len() {
            return Err(RecordError::Shape {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        Ok(())
    }

    /// Validate that `index` lies in `[0, len)`.
    pub fn validate_index(index: usize, len: usize) -> Result<(), RecordError> {
        if index >= len {
            return Err(RecordError::Index { index, len });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RecordError> {
        if let Some(param) = duplicate_param {
            return Err(RecordError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
