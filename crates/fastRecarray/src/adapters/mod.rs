//! Layer 5: Adapters
//!
//! This layer adapts the parallel engine to the `FixedRecordArray` API:
//! parallel construction from columns and parallel operations on arrays.

// Parallel adapter for record arrays.
pub mod array;
