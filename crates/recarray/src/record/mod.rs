//! Layer 2: Record
//!
//! # Purpose
//!
//! This layer provides the fixed-shape element type stored by record arrays.
//! It depends only on the numeric kinds defined in the primitives layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Storage
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Record ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Immutable `(x, y)` record.
pub mod pair;
