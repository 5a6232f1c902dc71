//! High-level API for record arrays.
//!
//! ## Purpose
//!
//! This module is the user-facing entry point. It re-exports the record and
//! array types and provides a fluent builder for configuring how sums are
//! computed.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (forward order, sequential).
//! * **Validated**: Builder parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over the sealed `Kind` family; the kind is fixed per
//!   instantiation and never computed from data.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SumBuilder`] via `Summation::new()`.
//! 2. Chain configuration methods (`.order()`).
//! 3. Call `.build()` to get a [`Summer`], then `.sum(&array)`.

// Internal dependencies
use crate::engine::executor::{SumConfig, SumExecutor, SumPassFn};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::reduction::SumOrder;
pub use crate::primitives::errors::RecordError;
pub use crate::primitives::kind::Kind;
pub use crate::record::pair::Record;
pub use crate::storage::array::FixedRecordArray;

// ============================================================================
// Sum Builder
// ============================================================================

/// Fluent builder for configuring record sums.
#[derive(Debug, Clone)]
pub struct SumBuilder<K> {
    /// Reduction order (default: Forward).
    pub order: Option<SumOrder>,

    // ======================================
    // DEV
    // ======================================
    /// Custom sum pass function.
    #[doc(hidden)]
    pub custom_sum_pass: Option<SumPassFn<K>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<K: Kind> Default for SumBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kind> SumBuilder<K> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            order: None,
            custom_sum_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the reduction order.
    pub fn order(mut self, order: SumOrder) -> Self {
        if self.order.is_some() {
            self.duplicate_param = Some("order");
        }
        self.order = Some(order);
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom sum pass function.
    #[doc(hidden)]
    pub fn custom_sum_pass(mut self, pass: SumPassFn<K>) -> Self {
        self.custom_sum_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the summer.
    pub fn build(self) -> Result<Summer<K>, RecordError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(Summer {
            config: SumConfig {
                order: self.order.unwrap_or_default(),
                parallel: self.parallel.unwrap_or(false),
                custom_sum_pass: self.custom_sum_pass,
            },
        })
    }
}

// ============================================================================
// Summer
// ============================================================================

/// A validated sum configuration.
#[derive(Debug, Clone, Copy)]
pub struct Summer<K> {
    config: SumConfig<K>,
}

impl<K: Kind> Summer<K> {
    /// Sum every record of `array`.
    pub fn sum(&self, array: &FixedRecordArray<K>) -> Record<K> {
        SumExecutor::run(array.as_slice(), &self.config)
    }

    /// Sum a slice of records.
    pub fn sum_slice(&self, records: &[Record<K>]) -> Record<K> {
        SumExecutor::run(records, &self.config)
    }

    /// The configured reduction order.
    pub fn order(&self) -> SumOrder {
        self.config.order
    }

    /// Whether forward sums may be split across threads.
    ///
    /// Always `false` for floating kinds, whose sums keep index order even
    /// when a parallel pass is installed.
    pub fn is_parallel(&self) -> bool {
        K::ASSOCIATIVE && self.config.parallel && self.config.custom_sum_pass.is_some()
    }
}
