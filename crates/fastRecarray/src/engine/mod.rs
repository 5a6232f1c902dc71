//! Layer 4: Engine
//!
//! This layer provides the parallel execution engine for record arrays.
//! It distributes elementwise work and associative sums across CPU cores.

// Parallel execution engine using CPU threads
pub mod executor;
