//! Layer 5: Storage
//!
//! # Purpose
//!
//! This layer owns the contiguous record buffer and exposes construction,
//! indexed access, reduction and functional updates over it.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Storage ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Record
//!   ↓
//! Layer 1: Primitives
//! ```

/// `FixedRecordArray` and its operations.
pub mod array;

/// `Display` for record arrays.
pub mod output;
