//! # fastRecarray (Parallel Record Arrays)
//!
//! Parallel extensions for [`recarray`](https://docs.rs/recarray): build,
//! shift and sum contiguous arrays of `(x, y)` records using all CPU cores.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastRecarray::prelude::*;
//!
//! let xs: Vec<i64> = (0..10_000).collect();
//! let ys: Vec<i64> = (0..10_000).map(|v| 2 * v).collect();
//!
//! // Columns are zipped in parallel into one contiguous buffer
//! let points = build_parallel(&xs, &ys)?;
//!
//! // Integer addition is associative, so the sum is split across threads
//! assert_eq!(points.par_sum(), points.sum());
//!
//! let shifted = points.par_map_add_scalar(Record::new(1, 1));
//! assert_eq!(shifted.get(0)?, Record::new(1, 1));
//! # Result::<(), RecordError>::Ok(())
//! ```
//!
//! ### Configured Sums
//!
//! ```rust
//! use fastRecarray::prelude::*;
//!
//! let points = FixedRecordArray::build(&[0.5_f64, 1.5], &[2.0, 4.0])?;
//!
//! let summer = Summation::new()
//!     .parallel(true)       // Default in fastRecarray
//!     .build()?;
//!
//! // Floating kinds keep index order, so this matches `sum()` bit-for-bit
//! assert!(summer.sum(&points).bit_eq(&points.sum()));
//! # Result::<(), RecordError>::Ok(())
//! ```
//!
//! ## Determinism
//!
//! Only kinds with associative addition (`i32`, `i64`) are summed out of
//! order. `f32` and `f64` sums always fold left to right, so the parallel
//! sum of a floating array equals its sequential sum exactly.
//!
//! ## ndarray Integration
//!
//! ```rust
//! use fastRecarray::prelude::*;
//! use ndarray::Array1;
//!
//! let xs = Array1::from_vec(vec![1.0_f64, 2.0, 3.0]);
//! let ys = Array1::from_vec(vec![4.0_f64, 5.0, 6.0]);
//!
//! let points = build_parallel(&xs, &ys)?;
//! assert_eq!(points.len(), 3);
//! # Result::<(), RecordError>::Ok(())
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![allow(non_snake_case)]

// Layer 4: Engine - parallel passes.
mod engine;

// Layer 5: Adapters - parallel operations on record arrays.
mod adapters;

// High-level API with parallel execution.
mod api;

// Input data handling.
mod input;

// Standard fastRecarray prelude.
pub mod prelude {
    pub use crate::api::{
        FixedRecordArray, Kind, ParallelRecordArray, ParallelSumBuilder as Summation, Record,
        RecordError, RecordInput, SumOrder,
        SumOrder::{Forward, Pairwise, Reverse},
        Summer, build_parallel,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
