//! Benchmark parameter types.

use std::fmt;

use partree_core::RootStrategy;

/// Parameters for one spanning tree benchmark case.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the synthetic graph.
    pub vertex_count: usize,
    /// Root table used by the run.
    pub strategy: RootStrategy,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},roots={}", self.vertex_count, self.strategy.as_str())
    }
}
