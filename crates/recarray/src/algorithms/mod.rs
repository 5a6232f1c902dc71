//! Layer 3: Algorithms
//!
//! This layer implements the reductions over record slices. It contains the
//! arithmetic of the crate but is orchestrated by the engine layer.

// Forward, reverse and pairwise sums.
pub mod reduction;
