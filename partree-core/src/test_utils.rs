//! Shared test utilities for `partree-core`.

use partree_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{Graph, GraphBuilder, VertexId};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `PARTREE_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph with vertices named `v0..v{node_count}` and the given
/// `(left, right, weight)` edges.
///
/// # Panics
/// Panics when an edge is rejected by [`GraphBuilder::add_edge`].
#[must_use]
pub(crate) fn graph_from_edges(node_count: usize, edges: &[(usize, usize, f32)]) -> Graph {
    let mut builder = GraphBuilder::new();
    for index in 0..node_count {
        builder
            .add_vertex(format!("v{index}"))
            .expect("generated names are unique");
    }
    for &(left, right, weight) in edges {
        builder
            .add_edge(VertexId::new(left), VertexId::new(right), weight)
            .expect("test edges must be valid");
    }
    builder.build()
}

/// Builds a graph from named vertices and `(left, right, weight)` edges.
///
/// # Panics
/// Panics when an edge names an unknown vertex.
#[must_use]
pub(crate) fn named_graph(names: &[&str], edges: &[(&str, &str, f32)]) -> Graph {
    let mut builder = GraphBuilder::new();
    for name in names {
        builder.add_vertex(*name).expect("names must be unique");
    }
    for &(left, right, weight) in edges {
        let left = builder.vertex_id(left).expect("left vertex exists");
        let right = builder.vertex_id(right).expect("right vertex exists");
        builder
            .add_edge(left, right, weight)
            .expect("test edges must be valid");
    }
    builder.build()
}
