//! Partree core library.
//!
//! Computes minimum spanning trees with a Kruskal variant that grows explicit
//! partial trees. Every vertex starts as its own [`PartialTree`] holding a
//! min-heap of incident arcs; the trees live in a circular
//! [`PartialTreeList`] and are merged pairwise through their cheapest
//! non-cycle-forming arc until a single tree remains.
//!
//! # Examples
//! ```
//! use partree_core::{GraphBuilder, minimum_spanning_tree};
//!
//! let mut builder = GraphBuilder::new();
//! let a = builder.add_vertex("A")?;
//! let b = builder.add_vertex("B")?;
//! let c = builder.add_vertex("C")?;
//! builder.add_edge(a, b, 1.0)?;
//! builder.add_edge(b, c, 2.0)?;
//! builder.add_edge(a, c, 3.0)?;
//! let graph = builder.build();
//!
//! let tree = minimum_spanning_tree(&graph)?;
//! assert_eq!(tree.arcs().len(), 2);
//! assert_eq!(tree.total_weight(), 3.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod arc;
mod builder;
mod error;
mod graph;
mod heap;
mod list;
mod mst;
mod roots;
mod tree;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    arc::Arc,
    builder::{DisconnectedPolicy, PartialTreeKruskal, SpanningTreeBuilder},
    error::{GraphError, GraphErrorCode, ListError, ListErrorCode, MstError, MstErrorCode},
    graph::{Graph, GraphBuilder, Neighbor, Vertex, VertexId},
    heap::ArcHeap,
    list::{Iter, PartialTreeList},
    mst::{MstStats, SpanningTree, execute, initialize, minimum_spanning_tree, root_check},
    roots::{DisjointSetRoots, EagerRoots, RootStrategy, RootTable},
    tree::PartialTree,
};
