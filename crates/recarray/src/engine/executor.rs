//! Execution engine for record sums.
//!
//! ## Purpose
//!
//! This module decides how a configured sum is carried out: with an injected
//! pass (e.g. the parallel pass provided by `fastRecarray`) or with one of the
//! sequential reduction orders.
//!
//! ## Design notes
//!
//! * **Injection**: Extension crates plug in through `SumPassFn`, the same way
//!   they would replace any other pass, without this crate depending on them.
//! * **Determinism first**: An injected pass is only used for the forward
//!   order; reverse and pairwise requests always run sequentially.
//!
//! ## Non-goals
//!
//! * This module does not spawn threads itself.
//! * This module does not validate the configuration (handled by `validator`).

// Internal dependencies
use crate::algorithms::reduction::SumOrder;
use crate::primitives::kind::Kind;
use crate::record::pair::Record;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom sum pass function.
#[doc(hidden)]
pub type SumPassFn<K> = fn(&[Record<K>]) -> Record<K>;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for a sum.
#[derive(Debug, Clone, Copy)]
pub struct SumConfig<K> {
    /// Reduction order.
    pub order: SumOrder,

    /// Whether the custom pass may be used.
    pub parallel: bool,

    /// Custom sum pass function (enables parallel execution).
    pub custom_sum_pass: Option<SumPassFn<K>>,
}

impl<K> Default for SumConfig<K> {
    fn default() -> Self {
        Self {
            order: SumOrder::default(),
            parallel: false,
            custom_sum_pass: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs a sum according to a `SumConfig`.
pub struct SumExecutor;

impl SumExecutor {
    /// Reduce `records` under `config`.
    pub fn run<K: Kind>(records: &[Record<K>], config: &SumConfig<K>) -> Record<K> {
        match (config.order, config.parallel, config.custom_sum_pass) {
            (SumOrder::Forward, true, Some(pass)) => pass(records),
            (order, _, _) => order.reduce(records),
        }
    }
}
