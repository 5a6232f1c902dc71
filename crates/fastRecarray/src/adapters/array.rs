//! Parallel adapter for record arrays.
//!
//! ## Purpose
//!
//! This module adds parallel construction, delta-add and summation to
//! `FixedRecordArray`, accepting columns from any [`RecordInput`].
//!
//! ## Design notes
//!
//! * **Delegation**: Shape checks reuse the base crate's validator; the work
//!   itself is delegated to the parallel engine.
//! * **Same result**: Every operation returns exactly what the sequential
//!   method of `FixedRecordArray` returns for the same input.
//!
//! ## Invariants
//!
//! * Results are backed by a single contiguous buffer.
//! * The source array is never modified.

// Export dependencies from recarray crate
use recarray::internals::engine::validator::Validator;
use recarray::internals::primitives::errors::RecordError;
use recarray::internals::primitives::kind::Kind;
use recarray::internals::record::pair::Record;
use recarray::internals::storage::array::FixedRecordArray;

// Internal dependencies
use crate::engine::executor::{build_pass_parallel, map_add_pass_parallel, sum_pass_parallel};
use crate::input::RecordInput;

// ============================================================================
// Parallel Construction
// ============================================================================

/// Build a record array from two equal-length columns in parallel.
///
/// # Errors
///
/// Returns [`RecordError::Shape`] if the columns differ in length, or
/// [`RecordError::InvalidInput`] if a column is not contiguous.
pub fn build_parallel<K, X, Y>(xs: &X, ys: &Y) -> Result<FixedRecordArray<K>, RecordError>
where
    K: Kind,
    X: RecordInput<K> + ?Sized,
    Y: RecordInput<K> + ?Sized,
{
    let xs = xs.as_record_slice()?;
    let ys = ys.as_record_slice()?;
    Validator::validate_shape(xs, ys)?;

    Ok(FixedRecordArray::from_records(build_pass_parallel(xs, ys)))
}

// ============================================================================
// Parallel Extension Trait
// ============================================================================

/// Parallel operations on `FixedRecordArray`.
pub trait ParallelRecordArray<K: Kind> {
    /// Sum of all records.
    ///
    /// Split across threads only for associative kinds; otherwise identical
    /// to the index-order `sum()`.
    fn par_sum(&self) -> Record<K>;

    /// New array with `delta` added to every record.
    fn par_map_add_scalar(&self, delta: Record<K>) -> FixedRecordArray<K>;
}

impl<K: Kind> ParallelRecordArray<K> for FixedRecordArray<K> {
    fn par_sum(&self) -> Record<K> {
        sum_pass_parallel(self.as_slice())
    }

    fn par_map_add_scalar(&self, delta: Record<K>) -> FixedRecordArray<K> {
        FixedRecordArray::from_records(map_add_pass_parallel(self.as_slice(), delta))
    }
}
