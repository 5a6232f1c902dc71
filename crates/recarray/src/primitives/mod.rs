//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the numeric kinds and shared error types used
//! throughout the crate. It has zero internal dependencies within the crate.
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
//! Layer 2: Record
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Sealed numeric kinds.
pub mod kind;

/// Shared error types.
pub mod errors;
