//! High-level API for record arrays with parallel execution support.
//!
//! ## Purpose
//!
//! This module extends the `recarray` API with a summation builder that
//! defaults to the parallel sum pass.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `recarray` builder.
//! * **Parallel-First**: Defaults to parallel execution; `.parallel(false)`
//!   restores the sequential path.
//! * **Feature-Gated**: Without the `cpu` feature the pass runs sequentially.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelSumBuilder`] via `Summation::new()`.
//! 2. Chain configuration methods (`.order()`, `.parallel()`).
//! 3. Call `.build()` to get a [`Summer`].

// Export dependencies from recarray crate
use recarray::internals::api::SumBuilder;

// Internal dependencies
use crate::engine::executor::sum_pass_parallel;

// Publicly re-exported types
pub use crate::adapters::array::{ParallelRecordArray, build_parallel};
pub use crate::input::RecordInput;
pub use recarray::internals::api::{FixedRecordArray, Kind, Record, RecordError, SumOrder, Summer};

// ============================================================================
// Parallel Sum Builder
// ============================================================================

/// Builder for record sums with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelSumBuilder<K> {
    /// Base builder from the recarray crate
    pub base: SumBuilder<K>,

    /// Parallel execution (default: true).
    parallel: Option<bool>,
}

impl<K: Kind> Default for ParallelSumBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kind> ParallelSumBuilder<K> {
    /// Create a new builder with the parallel pass installed.
    pub fn new() -> Self {
        let base = SumBuilder::new().custom_sum_pass(sum_pass_parallel::<K>);
        Self {
            base,
            parallel: None,
        }
    }

    /// Set the reduction order.
    ///
    /// Only `Forward` sums use the parallel pass.
    pub fn order(mut self, order: SumOrder) -> Self {
        self.base = self.base.order(order);
        self
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.base.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Build the summer.
    pub fn build(self) -> Result<Summer<K>, RecordError> {
        let parallel = self.parallel.unwrap_or(true);
        self.base.parallel(parallel).build()
    }
}
