//! Input abstractions for building record arrays.
//!
//! ## Purpose
//!
//! This module lets the parallel builders accept columns in several formats
//! (slices, vectors, ndarray) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Provides direct slice access to the underlying data buffers.
//! * **Fail-fast validation**: Non-contiguous ndarray views are rejected
//!   before any work is done.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the input container, in order.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};

// Export dependencies from recarray crate
use recarray::internals::primitives::errors::RecordError;
use recarray::internals::primitives::kind::Kind;

/// Trait for containers that can supply one column of a record array.
pub trait RecordInput<K: Kind> {
    /// Convert the input to a contiguous slice.
    fn as_record_slice(&self) -> Result<&[K], RecordError>;
}

impl<K: Kind> RecordInput<K> for [K] {
    fn as_record_slice(&self) -> Result<&[K], RecordError> {
        Ok(self)
    }
}

impl<K: Kind> RecordInput<K> for Vec<K> {
    fn as_record_slice(&self) -> Result<&[K], RecordError> {
        Ok(self.as_slice())
    }
}

impl<K: Kind, S> RecordInput<K> for ArrayBase<S, Ix1>
where
    S: Data<Elem = K>,
{
    fn as_record_slice(&self) -> Result<&[K], RecordError> {
        self.as_slice().ok_or_else(|| {
            RecordError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
