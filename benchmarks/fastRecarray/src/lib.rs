//! Benchmark-only package; see `src/bench.rs`.
