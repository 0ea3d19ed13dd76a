//! Benchmark setup error type.

use partree_core::{GraphError, MstError};

use crate::source::SyntheticError;

/// Errors that may occur while preparing a benchmark input.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The synthetic graph configuration was rejected.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The graph builder rejected a generated vertex or edge.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A warm-up spanning tree run failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
}
