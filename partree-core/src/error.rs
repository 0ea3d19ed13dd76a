//! Error types for the partree core library.
//!
//! Each error enum carries a stable machine-readable code so callers can log
//! or match failures without depending on display strings.

use std::fmt;

use thiserror::Error;

use crate::graph::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::PartialTreeList`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ListError {
    /// A tree was requested from a list holding none.
    #[error("partial tree list is empty")]
    EmptyCollection,
    /// No tree in the list shares a root with the requested vertex.
    #[error("no partial tree contains vertex {vertex}")]
    NoMatchingTree {
        /// Vertex whose tree was requested.
        vertex: VertexId,
    },
    /// The list iterator was asked to mutate the list.
    #[error("operation `{operation}` is not supported by the list iterator")]
    UnsupportedOperation {
        /// Name of the rejected operation.
        operation: &'static str,
    },
    /// A ring link pointed at a vacant slot, indicating a logic error.
    #[error("partial tree list invariant violated: {invariant} (slot {slot})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// Arena slot that violated the invariant.
        slot: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ListError`] variants.
    enum ListErrorCode for ListError {
        /// A tree was requested from a list holding none.
        EmptyCollection => EmptyCollection => "LIST_EMPTY_COLLECTION",
        /// No tree in the list shares a root with the requested vertex.
        NoMatchingTree => NoMatchingTree { .. } => "LIST_NO_MATCHING_TREE",
        /// The list iterator was asked to mutate the list.
        UnsupportedOperation => UnsupportedOperation { .. } => "LIST_UNSUPPORTED_OPERATION",
        /// A ring link pointed at a vacant slot.
        InvariantViolation => InvariantViolation { .. } => "LIST_INVARIANT_VIOLATION",
    }
}

/// Errors returned while computing a minimum spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The caller requested an MST for a graph without vertices.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// A partial tree ran out of candidate arcs before the list collapsed to
    /// a single tree.
    #[error(
        "graph is disconnected: a component of {component_size} vertices has no outgoing arcs \
         ({remaining_trees} other trees remain)"
    )]
    DisconnectedGraph {
        /// Number of vertices in the exhausted partial tree.
        component_size: usize,
        /// Trees still waiting in the list when the exhaustion was detected.
        remaining_trees: usize,
    },
    /// The root table passed to the driver does not cover a vertex held by
    /// the partial tree list.
    #[error("root table covers {capacity} vertices but the list holds vertex {vertex}")]
    UndersizedRootTable {
        /// First vertex found outside the table.
        vertex: VertexId,
        /// Number of vertices the table tracks.
        capacity: usize,
    },
    /// The root table already joins vertices that the list keeps in separate
    /// partial trees, or separates members of one tree.
    #[error(
        "root table disagrees with the partial tree list about vertices {vertex} and {other}"
    )]
    StaleRootTable {
        /// Vertex whose root contradicts the list.
        vertex: VertexId,
        /// Vertex it was compared against.
        other: VertexId,
    },
    /// A partial tree list operation failed.
    #[error(transparent)]
    List(#[from] ListError),
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The caller requested an MST for a graph without vertices.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// A partial tree ran out of candidate arcs.
        DisconnectedGraph => DisconnectedGraph { .. } => "MST_DISCONNECTED_GRAPH",
        /// The root table is smaller than the vertex set.
        UndersizedRootTable => UndersizedRootTable { .. } => "MST_UNDERSIZED_ROOT_TABLE",
        /// The root table was not fresh for the list.
        StaleRootTable => StaleRootTable { .. } => "MST_STALE_ROOT_TABLE",
        /// A partial tree list operation failed.
        ListFailure => List(..) => "MST_LIST_FAILURE",
    }
}

impl MstError {
    /// Retrieve the inner [`ListErrorCode`] when the error originated in the
    /// partial tree list.
    #[must_use]
    pub const fn list_code(&self) -> Option<ListErrorCode> {
        match self {
            Self::List(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Errors raised while assembling a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A vertex with the same name already exists.
    #[error("vertex `{name}` already exists")]
    DuplicateVertex {
        /// The repeated vertex name.
        name: String,
    },
    /// An edge referenced a vertex id that is not part of the graph.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// The unknown vertex id.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge carried a non-finite weight.
    #[error("edge ({left}, {right}) has non-finite weight {weight}")]
    NonFiniteWeight {
        /// The first endpoint as provided.
        left: VertexId,
        /// The second endpoint as provided.
        right: VertexId,
        /// The rejected weight.
        weight: f32,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex with the same name already exists.
        DuplicateVertex => DuplicateVertex { .. } => "GRAPH_DUPLICATE_VERTEX",
        /// An edge referenced a vertex id that is not part of the graph.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
        /// An edge carried a non-finite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
    }
}
