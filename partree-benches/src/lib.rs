//! Benchmark support crate for partree.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks of the partial-tree Kruskal driver.

pub mod error;
pub mod params;
pub mod source;
