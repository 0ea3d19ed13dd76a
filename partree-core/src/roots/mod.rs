//! Root tables answering "are these two vertices in the same partial tree?".
//!
//! The spanning tree driver owns exactly one table for the duration of a run.
//! Two strategies are provided:
//!
//! - [`EagerRoots`] keeps a flat vertex → root map and rewrites the root of
//!   every absorbed vertex when two trees merge, so `find` is one lookup.
//! - [`DisjointSetRoots`] is a classic union-find with path compression and
//!   union by rank.
//!
//! Both answer every root check identically, so the chosen strategy never
//! changes which arcs are selected.

mod disjoint_set;
mod eager;

pub use self::{disjoint_set::DisjointSetRoots, eager::EagerRoots};

use crate::graph::VertexId;

/// Cycle-detection state shared by all partial trees of a run.
pub trait RootTable {
    /// Returns the representative root of `vertex`.
    ///
    /// Vertices outside the table are their own singleton roots.
    fn find(&mut self, vertex: VertexId) -> VertexId;

    /// Records that the tree holding `absorbed` has merged into the tree
    /// holding `survivor`.
    ///
    /// Both slices list the full member set of their tree. Empty slices are
    /// ignored.
    fn union(&mut self, survivor: &[VertexId], absorbed: &[VertexId]);

    /// Returns the number of vertices the table tracks.
    fn len(&self) -> usize;

    /// Returns `true` when the table tracks no vertices.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when `left` and `right` share a root.
    fn same_root(&mut self, left: VertexId, right: VertexId) -> bool {
        self.find(left) == self.find(right)
    }
}

/// Selects the [`RootTable`] implementation used by a run.
///
/// # Examples
/// ```
/// use partree_core::RootStrategy;
///
/// assert_eq!(RootStrategy::default(), RootStrategy::Eager);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum RootStrategy {
    /// Flat root map rewritten eagerly on every merge.
    #[default]
    Eager,
    /// Union-find with path compression and union by rank.
    DisjointSet,
}

impl RootStrategy {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::DisjointSet => "disjoint_set",
        }
    }
}
