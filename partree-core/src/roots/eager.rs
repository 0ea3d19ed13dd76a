//! Flat root map with eager rewriting on merge.

use crate::graph::VertexId;

use super::RootTable;

/// Vertex → root map where every member points straight at its tree root.
#[derive(Clone, Debug)]
pub struct EagerRoots {
    roots: Vec<VertexId>,
}

impl EagerRoots {
    /// Creates a table where each of the `vertex_count` vertices is its own
    /// root.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            roots: (0..vertex_count).map(VertexId::new).collect(),
        }
    }
}

impl RootTable for EagerRoots {
    fn find(&mut self, vertex: VertexId) -> VertexId {
        self.roots.get(vertex.index()).copied().unwrap_or(vertex)
    }

    fn len(&self) -> usize {
        self.roots.len()
    }

    fn union(&mut self, survivor: &[VertexId], absorbed: &[VertexId]) {
        let Some(&anchor) = survivor.first() else {
            return;
        };
        let root = self.find(anchor);
        for vertex in absorbed {
            if let Some(slot) = self.roots.get_mut(vertex.index()) {
                *slot = root;
            }
        }
    }
}
