//! A connected component under construction.

use crate::{arc::Arc, graph::VertexId, heap::ArcHeap, roots::RootTable};

/// A partial spanning tree: its designated root vertex, its members and the
/// heap of arcs leaving (or formerly leaving) it.
///
/// Every arc in the heap has at least one endpoint inside the tree. Arcs whose
/// endpoints have both been absorbed are dead and are skipped lazily when
/// popped.
#[derive(Clone, Debug)]
pub struct PartialTree {
    root: VertexId,
    vertices: Vec<VertexId>,
    arcs: ArcHeap,
}

impl PartialTree {
    /// Creates a single-vertex tree rooted at `root` with no arcs.
    ///
    /// # Examples
    /// ```
    /// use partree_core::{PartialTree, VertexId};
    ///
    /// let tree = PartialTree::new(VertexId::new(2));
    /// assert_eq!(tree.root(), VertexId::new(2));
    /// assert_eq!(tree.len(), 1);
    /// assert!(tree.arcs().is_empty());
    /// ```
    #[must_use]
    pub fn new(root: VertexId) -> Self {
        Self {
            root,
            vertices: vec![root],
            arcs: ArcHeap::new(),
        }
    }

    /// Returns the designated root vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn root(&self) -> VertexId { self.root }

    /// Returns the member vertices in absorption order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[VertexId] { &self.vertices }

    /// Returns the number of member vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a tree holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the candidate arc heap.
    #[must_use]
    #[rustfmt::skip]
    pub const fn arcs(&self) -> &ArcHeap { &self.arcs }

    /// Returns the candidate arc heap for insertion or extraction.
    #[rustfmt::skip]
    pub const fn arcs_mut(&mut self) -> &mut ArcHeap { &mut self.arcs }

    /// Pops arcs until one leaves the tree, discarding dead arcs on the way.
    ///
    /// Returns the arc together with the number of dead arcs discarded, or
    /// `None` when the heap is exhausted.
    pub fn next_external_arc(&mut self, roots: &mut impl RootTable) -> (Option<Arc>, usize) {
        let mut discarded = 0_usize;
        while let Some(arc) = self.arcs.delete_min() {
            if !roots.same_root(arc.v1(), arc.v2()) {
                return (Some(arc), discarded);
            }
            discarded = discarded.saturating_add(1);
        }
        (None, discarded)
    }

    /// Absorbs `other` into this tree.
    ///
    /// The arc heaps are merged without re-sorting, the member lists are
    /// concatenated and `roots` is updated so every vertex of `other` now
    /// resolves to this tree.
    pub fn merge(&mut self, other: Self, roots: &mut impl RootTable) {
        roots.union(&self.vertices, &other.vertices);
        self.arcs.merge(other.arcs);
        self.vertices.extend(other.vertices);
    }

    /// Returns `true` when `vertex` belongs to this tree according to `roots`.
    pub fn contains(&self, vertex: VertexId, roots: &mut impl RootTable) -> bool {
        roots.same_root(self.root, vertex)
    }
}
