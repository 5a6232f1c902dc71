//! Parallel execution engine for record array operations.
//!
//! ## Purpose
//!
//! This module provides the parallel passes that are injected into the
//! `recarray` crate's sum executor, plus parallel construction and
//! delta-add passes that write straight into one contiguous buffer.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Associativity gate**: Sums are only split across threads for kinds whose
//!   addition is associative (the integer kinds). Floating kinds fall back to
//!   the forward fold, so their sums stay bit-identical to `FixedRecordArray::sum`.
//! * **Elementwise passes**: Build and delta-add are per-element and produce
//!   exactly the sequential result for every kind.
//! * **Integration**: Plugs into the `recarray` executor via the `SumPassFn` hook.
//!
//! ## Invariants
//!
//! * Output buffers are allocated once with exact capacity.
//! * Output order matches input order.
//!
//! ## Non-goals
//!
//! * This module does not validate input shapes (handled by the adapters).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use tracing::debug;

// Export dependencies from recarray crate
use recarray::internals::algorithms::reduction::sum_forward;
use recarray::internals::primitives::kind::Kind;
use recarray::internals::record::pair::Record;

/// Below this many records the passes run sequentially.
pub const PARALLEL_THRESHOLD: usize = 4096;

// ============================================================================
// Sum Pass
// ============================================================================

/// Sum `records`, splitting across threads when `K` is associative.
pub fn sum_pass_parallel<K: Kind>(records: &[Record<K>]) -> Record<K> {
    let split = K::ASSOCIATIVE && records.len() >= PARALLEL_THRESHOLD;
    debug!(
        kind = K::NAME,
        len = records.len(),
        parallel = split,
        "sum pass"
    );

    if !split {
        return sum_forward(records);
    }

    reduce_parallel(records)
}

#[cfg(feature = "cpu")]
fn reduce_parallel<K: Kind>(records: &[Record<K>]) -> Record<K> {
    records
        .par_iter()
        .copied()
        .reduce(Record::zero, Record::add)
}

#[cfg(not(feature = "cpu"))]
fn reduce_parallel<K: Kind>(records: &[Record<K>]) -> Record<K> {
    sum_forward(records)
}

// ============================================================================
// Elementwise Passes
// ============================================================================

/// Zip two equal-length columns into records.
///
/// The caller guarantees `xs.len() == ys.len()`.
pub fn build_pass_parallel<K: Kind>(xs: &[K], ys: &[K]) -> Vec<Record<K>> {
    debug_assert_eq!(xs.len(), ys.len(), "build_pass_parallel: column lengths differ");
    debug!(kind = K::NAME, len = xs.len(), "build pass");

    let mut records = Vec::with_capacity(xs.len());

    #[cfg(feature = "cpu")]
    if xs.len() >= PARALLEL_THRESHOLD {
        xs.par_iter()
            .zip(ys.par_iter())
            .map(|(&x, &y)| Record::new(x, y))
            .collect_into_vec(&mut records);
        return records;
    }

    records.extend(xs.iter().zip(ys).map(|(&x, &y)| Record::new(x, y)));
    records
}

/// Add `delta` to every record.
pub fn map_add_pass_parallel<K: Kind>(records: &[Record<K>], delta: Record<K>) -> Vec<Record<K>> {
    debug!(kind = K::NAME, len = records.len(), "map-add pass");

    let mut out = Vec::with_capacity(records.len());

    #[cfg(feature = "cpu")]
    if records.len() >= PARALLEL_THRESHOLD {
        records
            .par_iter()
            .map(|r| r.add(delta))
            .collect_into_vec(&mut out);
        return out;
    }

    out.extend(records.iter().map(|r| r.add(delta)));
    out
}
