//! Reduction orders for summing record sequences.
//!
//! ## Purpose
//!
//! This module implements the sequential reductions over a slice of records.
//! The forward (index-order) fold is the one `FixedRecordArray::sum` uses;
//! reverse and pairwise orders exist to check associativity of integer kinds.
//!
//! ## Design notes
//!
//! * **Deterministic**: Every order visits elements in a fixed pattern, so
//!   repeated calls produce bit-identical results for every kind.
//! * **Seeded**: Every order starts from `Record::zero()`, so empty input yields zero.
//!
//! ## Invariants
//!
//! * For integer kinds all orders agree (wrapping addition is associative).
//! * For floating kinds only `Forward` is the contract; other orders may
//!   round differently.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::kind::Kind;
use crate::record::pair::Record;

/// Below this length the pairwise reduction falls back to a forward fold.
const PAIRWISE_LEAF: usize = 8;

// ============================================================================
// Sum Order
// ============================================================================

/// Order in which records are combined during a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SumOrder {
    /// Left to right, index `0` first.
    #[default]
    Forward,

    /// Right to left, last index first.
    Reverse,

    /// Balanced binary tree over halves of the slice.
    Pairwise,
}

impl SumOrder {
    /// Reduce `records` in this order.
    #[inline]
    pub fn reduce<K: Kind>(self, records: &[Record<K>]) -> Record<K> {
        match self {
            Self::Forward => sum_forward(records),
            Self::Reverse => sum_reverse(records),
            Self::Pairwise => sum_pairwise(records),
        }
    }
}

impl Display for SumOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Forward => write!(f, "Forward"),
            Self::Reverse => write!(f, "Reverse"),
            Self::Pairwise => write!(f, "Pairwise"),
        }
    }
}

// ============================================================================
// Reductions
// ============================================================================

/// Fold left to right, seeded with zero.
pub fn sum_forward<K: Kind>(records: &[Record<K>]) -> Record<K> {
    records
        .iter()
        .fold(Record::zero(), |acc, &record| acc.add(record))
}

/// Fold right to left, seeded with zero.
pub fn sum_reverse<K: Kind>(records: &[Record<K>]) -> Record<K> {
    records
        .iter()
        .rev()
        .fold(Record::zero(), |acc, &record| acc.add(record))
}

/// Split in halves recursively and add the partial sums.
pub fn sum_pairwise<K: Kind>(records: &[Record<K>]) -> Record<K> {
    if records.len() <= PAIRWISE_LEAF {
        return sum_forward(records);
    }

    let (left, right) = records.split_at(records.len() / 2);
    sum_pairwise(left).add(sum_pairwise(right))
}
