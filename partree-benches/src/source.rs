//! Seeded synthetic graphs for benchmarking.
//!
//! A random recursive tree guarantees connectivity; extra edges drawn with
//! replacement then raise the average degree, which also yields parallel
//! edges and self-loops for the driver to discard.

use partree_core::{Graph, GraphBuilder, VertexId};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Extra edges per vertex on top of the spanning skeleton.
    pub extra_degree: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected weighted graph from `config`.
///
/// # Errors
///
/// Returns [`crate::error::BenchSetupError::Synthetic`] when `vertex_count`
/// is zero and [`crate::error::BenchSetupError::Graph`] if the builder
/// rejects a generated edge.
///
/// # Examples
///
/// ```
/// use partree_benches::source::{SyntheticConfig, generate_graph};
///
/// let config = SyntheticConfig { vertex_count: 10, extra_degree: 2, seed: 7 };
/// let graph = generate_graph(&config).expect("valid config");
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 9 + 20);
/// ```
pub fn generate_graph(config: &SyntheticConfig) -> Result<Graph, crate::error::BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices.into());
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut builder = GraphBuilder::new();
    for index in 0..config.vertex_count {
        builder.add_vertex(format!("v{index}"))?;
    }

    for vertex in 1..config.vertex_count {
        let anchor = rng.gen_range(0..vertex);
        builder.add_edge(
            VertexId::new(anchor),
            VertexId::new(vertex),
            rng.gen_range(0.1_f32..100.0),
        )?;
    }

    let extra = config.vertex_count.saturating_mul(config.extra_degree);
    for _ in 0..extra {
        let left = rng.gen_range(0..config.vertex_count);
        let right = rng.gen_range(0..config.vertex_count);
        builder.add_edge(
            VertexId::new(left),
            VertexId::new(right),
            rng.gen_range(0.1_f32..100.0),
        )?;
    }

    Ok(builder.build())
}
