//! Contiguous, fixed-length array of records.
//!
//! ## Purpose
//!
//! This module provides `FixedRecordArray<K>`, an ordered sequence of
//! `Record<K>` held in one heap block. Indexing is a plain offset into that
//! block; no element is boxed and no element carries a type tag.
//!
//! ## Design notes
//!
//! * **Single buffer**: Storage is a `Box<[Record<K>]>`. Building an array of
//!   `n` records allocates once (or not at all when `n == 0`).
//! * **Fixed length**: The length is set at construction and never changes.
//! * **Value slots**: The only mutation is `replace`, which overwrites a whole
//!   slot; record fields are never written in place.
//! * **Functional updates**: `map_add_scalar` returns a new contiguous array
//!   and leaves the source untouched.
//!
//! ## Invariants
//!
//! * `get(i) == Record::new(xs[i], ys[i])` for arrays built from columns.
//! * `sum()` visits elements in index order `0..len()`.
//!
//! ## Non-goals
//!
//! * Growing, shrinking or reordering an existing array.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::vec::{IntoIter, Vec};
#[cfg(feature = "std")]
use std::boxed::Box;
#[cfg(feature = "std")]
use std::vec::{IntoIter, Vec};

// External dependencies
use core::slice::Iter;

// Internal dependencies
use crate::algorithms::reduction::{SumOrder, sum_forward};
use crate::engine::validator::Validator;
use crate::primitives::errors::RecordError;
use crate::primitives::kind::Kind;
use crate::record::pair::Record;

// ============================================================================
// Fixed Record Array
// ============================================================================

/// Ordered, fixed-length sequence of records stored in one contiguous block.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedRecordArray<K> {
    records: Box<[Record<K>]>,
}

impl<K: Kind> FixedRecordArray<K> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build an array from two equal-length columns.
    ///
    /// Element `i` is `Record::new(xs[i], ys[i])`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Shape`] if `xs.len() != ys.len()`.
    pub fn build(xs: &[K], ys: &[K]) -> Result<Self, RecordError> {
        Validator::validate_shape(xs, ys)?;

        let mut records = Vec::with_capacity(xs.len());
        records.extend(xs.iter().zip(ys).map(|(&x, &y)| Record::new(x, y)));

        Ok(Self::from_records(records))
    }

    /// Take ownership of already-built records.
    ///
    /// Excess capacity in `records` is released.
    pub fn from_records(records: Vec<Record<K>>) -> Self {
        Self {
            records: records.into_boxed_slice(),
        }
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the array holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Index`] if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<Record<K>, RecordError> {
        Validator::validate_index(index, self.len())?;
        Ok(self.records[index])
    }

    /// View the backing storage.
    #[inline]
    pub fn as_slice(&self) -> &[Record<K>] {
        &self.records
    }

    /// Iterate over records in index order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Record<K>> {
        self.records.iter()
    }

    /// Split the array back into its `x` and `y` columns.
    pub fn to_columns(&self) -> (Vec<K>, Vec<K>) {
        self.records.iter().map(|r| r.into_tuple()).unzip()
    }

    // ========================================================================
    // Reduction
    // ========================================================================

    /// Sum of all records, folded left to right from `Record::zero()`.
    ///
    /// For floating kinds the result is reproducible bit-for-bit across calls
    /// on the same array; it is not guaranteed to match a sum of the same
    /// values in another order.
    #[inline]
    pub fn sum(&self) -> Record<K> {
        sum_forward(&self.records)
    }

    /// Sum of all records in the given order.
    #[inline]
    pub fn sum_with(&self, order: SumOrder) -> Record<K> {
        order.reduce(&self.records)
    }

    // ========================================================================
    // Updates
    // ========================================================================

    /// New array with `delta` added to every record.
    pub fn map_add_scalar(&self, delta: Record<K>) -> Self {
        let records: Vec<Record<K>> = self.records.iter().map(|r| r.add(delta)).collect();
        Self::from_records(records)
    }

    /// Overwrite the slot at `index` and return the record it held.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Index`] if `index >= len()`.
    pub fn replace(&mut self, index: usize, record: Record<K>) -> Result<Record<K>, RecordError> {
        Validator::validate_index(index, self.len())?;
        Ok(core::mem::replace(&mut self.records[index], record))
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<K: Kind> FromIterator<Record<K>> for FixedRecordArray<K> {
    fn from_iter<I: IntoIterator<Item = Record<K>>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

impl<K: Kind> From<Vec<Record<K>>> for FixedRecordArray<K> {
    fn from(records: Vec<Record<K>>) -> Self {
        Self::from_records(records)
    }
}

impl<K> AsRef<[Record<K>]> for FixedRecordArray<K> {
    fn as_ref(&self) -> &[Record<K>] {
        &self.records
    }
}

impl<'a, K> IntoIterator for &'a FixedRecordArray<K> {
    type Item = &'a Record<K>;
    type IntoIter = Iter<'a, Record<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<K> IntoIterator for FixedRecordArray<K> {
    type Item = Record<K>;
    type IntoIter = IntoIter<Record<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_vec().into_iter()
    }
}
