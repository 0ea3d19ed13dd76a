//! Min-heap of candidate arcs owned by each partial tree.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::arc::Arc;

/// Priority queue yielding the lightest [`Arc`] first.
///
/// # Examples
/// ```
/// use partree_core::{Arc, ArcHeap, VertexId};
///
/// let mut heap = ArcHeap::new();
/// heap.insert(Arc::new(VertexId::new(0), VertexId::new(1), 3.0, 0));
/// heap.insert(Arc::new(VertexId::new(0), VertexId::new(2), 1.0, 1));
/// assert_eq!(heap.delete_min().map(|arc| arc.weight()), Some(1.0));
/// assert_eq!(heap.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ArcHeap {
    arcs: BinaryHeap<Reverse<Arc>>,
}

impl ArcHeap {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an arc.
    pub fn insert(&mut self, arc: Arc) {
        self.arcs.push(Reverse(arc));
    }

    /// Removes and returns the lightest arc, or `None` once exhausted.
    pub fn delete_min(&mut self) -> Option<Arc> {
        self.arcs.pop().map(|Reverse(arc)| arc)
    }

    /// Returns the lightest arc without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<&Arc> {
        self.arcs.peek().map(|Reverse(arc)| arc)
    }

    /// Moves every arc of `other` into this heap.
    ///
    /// The smaller heap is pushed into the larger one, so the heap property is
    /// preserved without re-sorting.
    pub fn merge(&mut self, mut other: Self) {
        self.arcs.append(&mut other.arcs);
    }

    /// Returns the number of queued arcs, dead arcs included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Returns `true` when no arcs remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

impl Extend<Arc> for ArcHeap {
    fn extend<I: IntoIterator<Item = Arc>>(&mut self, iter: I) {
        self.arcs.extend(iter.into_iter().map(Reverse));
    }
}
