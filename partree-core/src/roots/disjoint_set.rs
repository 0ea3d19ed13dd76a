//! Union-find (disjoint set union) root table.
//!
//! Only one member of each tree is needed to link two sets, so merges cost
//! near-constant time regardless of tree size.

use crate::graph::VertexId;

use super::RootTable;

/// Union-find with path compression and union by rank.
#[derive(Clone, Debug)]
pub struct DisjointSetRoots {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSetRoots {
    /// Creates `vertex_count` singleton sets.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            parent: (0..vertex_count).collect(),
            rank: vec![0; vertex_count],
        }
    }

    fn find_index(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    fn link(&mut self, left: usize, right: usize) {
        let mut left = self.find_index(left);
        let mut right = self.find_index(right);
        if left == right {
            return;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
    }

    fn contains(&self, vertex: VertexId) -> bool {
        vertex.index() < self.parent.len()
    }
}

impl RootTable for DisjointSetRoots {
    fn find(&mut self, vertex: VertexId) -> VertexId {
        if !self.contains(vertex) {
            return vertex;
        }
        VertexId::new(self.find_index(vertex.index()))
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn union(&mut self, survivor: &[VertexId], absorbed: &[VertexId]) {
        let (Some(&left), Some(&right)) = (survivor.first(), absorbed.first()) else {
            return;
        };
        if self.contains(left) && self.contains(right) {
            self.link(left.index(), right.index());
        }
    }
}
