//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates inputs and configuration and dispatches sums to
//! either an injected pass or a sequential reduction.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Storage
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Record
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sum dispatch.
pub mod executor;

/// Validation utilities.
pub mod validator;
