//! Fixture types shared by the graph generators and property runners.

use crate::{Graph, test_utils::graph_from_edges};

/// Shape of the generated graph and the weights it carries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Distinct weights drawn from a continuous range.
    Unique,
    /// Weights drawn from a pool of one to three values, so most arcs tie.
    ManyIdentical,
    /// A random spanning path plus a few extra edges, including self-loops
    /// and parallel edges.
    Sparse,
    /// Close to a complete graph.
    Dense,
    /// Two to five components with no edges between them.
    Disconnected,
}

/// Generated input for one property case.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices, named `v0..v{node_count}`.
    pub node_count: usize,
    /// Undirected `(left, right, weight)` edges in insertion order.
    pub edges: Vec<(usize, usize, f32)>,
    /// Generator that produced the fixture.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds the adjacency-list graph described by the fixture.
    pub(super) fn graph(&self) -> Graph {
        graph_from_edges(self.node_count, &self.edges)
    }

    /// Short description appended to property failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, nodes={}, edges={}",
            self.distribution,
            self.node_count,
            self.edges.len()
        )
    }
}
