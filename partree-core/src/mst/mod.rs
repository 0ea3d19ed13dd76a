//! Minimum spanning tree construction by partial-tree merging.
//!
//! [`initialize`] seeds one single-vertex [`PartialTree`] per graph vertex and
//! queues them in a [`PartialTreeList`]. [`execute`] then repeatedly takes the
//! front tree, pops its cheapest arc that leaves the tree, pulls the tree on
//! the other side out of the ring, merges the two and re-appends the result
//! until one tree is left.

use std::collections::HashMap;

use tracing::{Span, debug, field, instrument, trace, warn};

use crate::{
    arc::Arc,
    builder::{DisconnectedPolicy, PartialTreeKruskal},
    error::MstError,
    graph::{Graph, VertexId},
    list::PartialTreeList,
    roots::RootTable,
    tree::PartialTree,
};

/// Counters collected while executing a run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MstStats {
    merges: usize,
    dead_arcs: usize,
}

impl MstStats {
    /// Returns the number of tree merges performed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn merges(&self) -> usize { self.merges }

    /// Returns the number of cycle-forming arcs discarded from tree heaps.
    #[must_use]
    #[rustfmt::skip]
    pub const fn dead_arcs(&self) -> usize { self.dead_arcs }
}

/// The arcs selected by a run.
///
/// When the input graph is connected the arcs form a minimum spanning tree;
/// under [`DisconnectedPolicy::Forest`] they form a minimum spanning forest
/// with one tree per component.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree {
    arcs: Vec<Arc>,
    component_count: usize,
    stats: MstStats,
}

impl SpanningTree {
    /// Returns the selected arcs in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn arcs(&self) -> &[Arc] { &self.arcs }

    /// Consumes the result and returns the selected arcs.
    #[must_use]
    pub fn into_arcs(self) -> Vec<Arc> {
        self.arcs
    }

    /// Returns the number of connected components spanned.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the arcs span a single component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the summed arc weight, accumulated as `f64`.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.arcs.iter().map(|arc| f64::from(arc.weight())).sum()
    }

    /// Returns the counters collected during the run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn stats(&self) -> MstStats { self.stats }
}

/// Returns `true` when `v1` and `v2` already share a root, meaning an arc
/// between them would close a cycle.
pub fn root_check(roots: &mut impl RootTable, v1: VertexId, v2: VertexId) -> bool {
    roots.same_root(v1, v2)
}

/// Builds the initial list: one tree per vertex, in id order, each seeded with
/// an arc for every entry of the vertex's adjacency list.
///
/// # Examples
/// ```
/// use partree_core::{GraphBuilder, initialize};
///
/// let mut builder = GraphBuilder::new();
/// let a = builder.add_vertex("A")?;
/// let b = builder.add_vertex("B")?;
/// builder.add_vertex("C")?;
/// builder.add_edge(a, b, 1.0)?;
/// let list = initialize(&builder.build());
///
/// let heap_sizes: Vec<usize> = list.iter().map(|tree| tree.arcs().len()).collect();
/// assert_eq!(heap_sizes, vec![1, 1, 0]);
/// # Ok::<(), partree_core::GraphError>(())
/// ```
#[instrument(
    name = "mst.initialize",
    skip(graph),
    fields(vertices = graph.vertex_count(), arcs = field::Empty),
)]
#[must_use]
pub fn initialize(graph: &Graph) -> PartialTreeList {
    let mut list = PartialTreeList::with_capacity(graph.vertex_count());
    let mut sequence = 0_u64;
    for vertex in graph.vertices() {
        let mut tree = PartialTree::new(vertex.id());
        for neighbor in vertex.neighbors() {
            tree.arcs_mut().insert(Arc::new(
                vertex.id(),
                neighbor.vertex(),
                neighbor.weight(),
                sequence,
            ));
            sequence = sequence.saturating_add(1);
        }
        list.append(tree);
    }
    Span::current().record("arcs", sequence);
    list
}

/// Drains `list` by merging trees pairwise through their cheapest outgoing
/// arcs.
///
/// `roots` must track every vertex held by the trees and agree with the list:
/// members of one tree share a root and distinct trees have distinct roots.
/// It is normally a fresh table sized to the graph.
///
/// # Errors
/// Returns [`MstError::EmptyGraph`] when `list` is empty,
/// [`MstError::UndersizedRootTable`] or [`MstError::StaleRootTable`] when
/// `roots` does not match the trees of `list`,
/// [`MstError::DisconnectedGraph`] when a tree runs out of arcs under
/// [`DisconnectedPolicy::Fail`], and [`MstError::List`] when the list loses
/// track of a tree.
#[instrument(
    name = "mst.execute",
    err,
    skip(list, roots, policy),
    fields(
        trees = list.len(),
        policy = policy.as_str(),
        arcs = field::Empty,
        components = field::Empty,
        merges = field::Empty,
    ),
)]
pub fn execute<R: RootTable>(
    mut list: PartialTreeList,
    roots: &mut R,
    policy: DisconnectedPolicy,
) -> Result<SpanningTree, MstError> {
    if list.is_empty() {
        return Err(MstError::EmptyGraph);
    }
    validate_roots(&list, roots)?;

    let mut arcs = Vec::with_capacity(list.len().saturating_sub(1));
    let mut stats = MstStats::default();
    let mut finished = 0_usize;

    while list.len() > 1 {
        let mut tree = list.remove_front()?;
        let (candidate, discarded) = tree.next_external_arc(roots);
        record_dead_arcs(&mut stats, discarded);

        let Some(arc) = candidate else {
            match policy {
                DisconnectedPolicy::Fail => {
                    warn!(
                        component_size = tree.len(),
                        remaining_trees = list.len(),
                        "partial tree exhausted its arcs; graph is disconnected"
                    );
                    return Err(MstError::DisconnectedGraph {
                        component_size: tree.len(),
                        remaining_trees: list.len(),
                    });
                }
                DisconnectedPolicy::Forest => {
                    debug!(
                        root = %tree.root(),
                        component_size = tree.len(),
                        "component complete"
                    );
                    finished = finished.saturating_add(1);
                    continue;
                }
            }
        };

        let outside = if tree.contains(arc.v1(), roots) {
            arc.v2()
        } else {
            arc.v1()
        };
        let other = list.remove_tree_containing(outside, roots)?;
        trace!(
            arc = %arc,
            root = %tree.root(),
            absorbed_root = %other.root(),
            absorbed_size = other.len(),
            "merging partial trees"
        );
        tree.merge(other, roots);
        record_merge(&mut stats);
        arcs.push(arc);
        list.append(tree);
    }

    let component_count = finished.saturating_add(list.len());
    let span = Span::current();
    span.record("arcs", arcs.len());
    span.record("components", component_count);
    span.record("merges", stats.merges);
    debug!(
        arcs = arcs.len(),
        components = component_count,
        dead_arcs = stats.dead_arcs,
        "spanning tree complete"
    );

    Ok(SpanningTree {
        arcs,
        component_count,
        stats,
    })
}

/// Computes the minimum spanning tree of `graph` with the default
/// configuration.
///
/// # Errors
/// Returns [`MstError::EmptyGraph`] for a graph without vertices and
/// [`MstError::DisconnectedGraph`] when the graph is not connected.
pub fn minimum_spanning_tree(graph: &Graph) -> Result<SpanningTree, MstError> {
    PartialTreeKruskal::default().run(graph)
}

/// Checks that `roots` covers every vertex of `list` and partitions them
/// exactly as the list's trees do.
fn validate_roots(list: &PartialTreeList, roots: &mut impl RootTable) -> Result<(), MstError> {
    let capacity = roots.len();
    let mut owners: HashMap<VertexId, VertexId> = HashMap::with_capacity(list.len());
    for tree in list {
        if let Some(&vertex) = tree
            .vertices()
            .iter()
            .find(|vertex| vertex.index() >= capacity)
        {
            return Err(MstError::UndersizedRootTable { vertex, capacity });
        }

        let root = tree.root();
        let expected = roots.find(root);
        for &member in tree.vertices() {
            if roots.find(member) != expected {
                return Err(MstError::StaleRootTable {
                    vertex: member,
                    other: root,
                });
            }
        }
        if let Some(other) = owners.insert(expected, root) {
            return Err(MstError::StaleRootTable {
                vertex: root,
                other,
            });
        }
    }
    Ok(())
}

fn record_dead_arcs(stats: &mut MstStats, discarded: usize) {
    if discarded == 0 {
        return;
    }
    stats.dead_arcs = stats.dead_arcs.saturating_add(discarded);
    trace!(discarded, "discarded dead arcs");
    #[cfg(feature = "metrics")]
    metrics::counter!("partree_dead_arcs_total").increment(discarded as u64);
}

fn record_merge(stats: &mut MstStats) {
    stats.merges = stats.merges.saturating_add(1);
    #[cfg(feature = "metrics")]
    metrics::counter!("partree_merges_total").increment(1);
}


#[cfg(test)]
mod property;
