//! # recarray (Contiguous Arrays of Fixed-Shape Numeric Records)
//!
//! A small library for storing `(x, y)` records of a single numeric kind in
//! one contiguous buffer, with no per-element boxing and no type tags.
//!
//! ## What is a record array?
//!
//! A `FixedRecordArray<K>` is an ordered, fixed-length sequence of
//! `Record<K>` values. The numeric kind `K` (`i32`, `i64`, `f32` or `f64`) is
//! fixed at compile time, so every instantiation has exactly one concrete
//! layout: a record is two `K` fields side by side, and the array is a single
//! block of records. One generic definition yields a family of layouts.
//!
//! ## Quick Start
//!
//! ```rust
//! use recarray::prelude::*;
//!
//! let points = FixedRecordArray::build(&[1_i64, 2, 3], &[4, 5, 6])?;
//!
//! assert_eq!(points.len(), 3);
//! assert_eq!(points.get(1)?, Record::new(2, 5));
//! assert_eq!(points.sum(), Record::new(6, 15));
//!
//! let shifted = points.map_add_scalar(Record::new(10, 10));
//! assert_eq!(shifted.get(0)?, Record::new(11, 14));
//!
//! println!("{}", shifted);
//! # Result::<(), RecordError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Kind:    i64
//!   Records: 3
//!   Sum:     (36, 45)
//!
//! Records:
//!    Index                X                Y
//! ------------------------------------------
//!        0               11               14
//!        1               12               15
//!        2               13               16
//! ```
//!
//! ### Configured Sums
//!
//! ```rust
//! use recarray::prelude::*;
//!
//! let points = FixedRecordArray::build(&[0.1_f64, 0.2, 0.3], &[1.0, 2.0, 3.0])?;
//!
//! let summer = Summation::new()
//!     .order(Pairwise)      // Balanced tree instead of index order
//!     .build()?;
//!
//! let total = summer.sum(&points);
//! println!("{}", total);
//! # Result::<(), RecordError>::Ok(())
//! ```
//!
//! ## Arithmetic Semantics
//!
//! | Kind        | Addition                         | Overflow / NaN               |
//! |-------------|----------------------------------|------------------------------|
//! | `i32`/`i64` | two's-complement wrapping        | wraps, never panics          |
//! | `f32`/`f64` | IEEE-754 round-to-nearest-even   | saturates to ±∞, NaN spreads |
//!
//! `sum()` always folds in index order, so floating-point sums are
//! reproducible bit-for-bit across calls on the same array.
//!
//! ## Result and Error Handling
//!
//! Only two operations can fail:
//!
//! - **`build`** returns `RecordError::Shape` when the columns differ in length.
//! - **`get`** returns `RecordError::Index` when the index is out of range.
//!
//! ```rust
//! use recarray::prelude::*;
//!
//! match FixedRecordArray::build(&[1.0_f32, 2.0], &[3.0]) {
//!     Ok(points) => println!("{}", points),
//!     Err(e) => eprintln!("Build failed: {}", e),
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! recarray = { version = "0.1", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - numeric kinds and errors.
mod primitives;

// Layer 2: Record - the fixed-shape element type.
mod record;

// Layer 3: Algorithms - reduction orders.
mod algorithms;

// Layer 4: Engine - validation and sum dispatch.
mod engine;

// Layer 5: Storage - the contiguous record array.
mod storage;

// High-level API for record arrays.
mod api;

// Standard recarray prelude.
pub mod prelude {
    pub use crate::api::{
        FixedRecordArray, Kind, Record, RecordError, SumBuilder as Summation, SumOrder,
        SumOrder::Forward, SumOrder::Pairwise, SumOrder::Reverse, Summer,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod record {
        pub use crate::record::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod storage {
        pub use crate::storage::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
