//! Builder utilities for configuring spanning tree runs.
//!
//! Exposes the root-table strategy and disconnected-graph policy used when a
//! [`PartialTreeKruskal`] runner is constructed.

use tracing::instrument;

use crate::{
    error::MstError,
    graph::Graph,
    mst::{SpanningTree, execute, initialize},
    roots::{DisjointSetRoots, EagerRoots, RootStrategy},
};

/// Indicates how a run reacts when a partial tree exhausts its arcs while
/// other trees remain.
///
/// # Examples
/// ```
/// use partree_core::DisconnectedPolicy;
///
/// assert_eq!(DisconnectedPolicy::default(), DisconnectedPolicy::Fail);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DisconnectedPolicy {
    /// Abort with [`MstError::DisconnectedGraph`].
    #[default]
    Fail,
    /// Set the exhausted tree aside as a finished component and continue,
    /// producing a minimum spanning forest.
    Forest,
}

impl DisconnectedPolicy {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Forest => "forest",
        }
    }
}

/// Configures and constructs [`PartialTreeKruskal`] runners.
///
/// # Examples
/// ```
/// use partree_core::{DisconnectedPolicy, RootStrategy, SpanningTreeBuilder};
///
/// let runner = SpanningTreeBuilder::new()
///     .with_root_strategy(RootStrategy::DisjointSet)
///     .with_disconnected_policy(DisconnectedPolicy::Forest)
///     .build();
/// assert_eq!(runner.root_strategy(), RootStrategy::DisjointSet);
/// assert_eq!(runner.disconnected_policy(), DisconnectedPolicy::Forest);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SpanningTreeBuilder {
    root_strategy: RootStrategy,
    disconnected_policy: DisconnectedPolicy,
}

impl SpanningTreeBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use partree_core::{DisconnectedPolicy, RootStrategy, SpanningTreeBuilder};
    ///
    /// let builder = SpanningTreeBuilder::new();
    /// assert_eq!(builder.root_strategy(), RootStrategy::Eager);
    /// assert_eq!(builder.disconnected_policy(), DisconnectedPolicy::Fail);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root table used for cycle detection.
    #[must_use]
    pub const fn with_root_strategy(mut self, strategy: RootStrategy) -> Self {
        self.root_strategy = strategy;
        self
    }

    /// Returns the configured root strategy.
    #[must_use]
    pub const fn root_strategy(&self) -> RootStrategy {
        self.root_strategy
    }

    /// Sets the behaviour for disconnected graphs.
    #[must_use]
    pub const fn with_disconnected_policy(mut self, policy: DisconnectedPolicy) -> Self {
        self.disconnected_policy = policy;
        self
    }

    /// Returns the configured disconnected-graph policy.
    #[must_use]
    pub const fn disconnected_policy(&self) -> DisconnectedPolicy {
        self.disconnected_policy
    }

    /// Constructs a runner with the current configuration.
    #[must_use]
    pub const fn build(self) -> PartialTreeKruskal {
        PartialTreeKruskal {
            root_strategy: self.root_strategy,
            disconnected_policy: self.disconnected_policy,
        }
    }
}

/// Entry point for computing spanning trees with a fixed configuration.
///
/// # Examples
/// ```
/// use partree_core::{DisconnectedPolicy, GraphBuilder, SpanningTreeBuilder};
///
/// let mut builder = GraphBuilder::new();
/// let a = builder.add_vertex("A")?;
/// let b = builder.add_vertex("B")?;
/// builder.add_vertex("C")?;
/// builder.add_edge(a, b, 1.0)?;
/// let graph = builder.build();
///
/// let forest = SpanningTreeBuilder::new()
///     .with_disconnected_policy(DisconnectedPolicy::Forest)
///     .build()
///     .run(&graph)?;
/// assert_eq!(forest.arcs().len(), 1);
/// assert_eq!(forest.component_count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PartialTreeKruskal {
    root_strategy: RootStrategy,
    disconnected_policy: DisconnectedPolicy,
}

impl Default for PartialTreeKruskal {
    fn default() -> Self {
        SpanningTreeBuilder::new().build()
    }
}

impl PartialTreeKruskal {
    /// Returns the root strategy used by this runner.
    #[must_use]
    pub const fn root_strategy(&self) -> RootStrategy {
        self.root_strategy
    }

    /// Returns the disconnected-graph policy used by this runner.
    #[must_use]
    pub const fn disconnected_policy(&self) -> DisconnectedPolicy {
        self.disconnected_policy
    }

    /// Initializes the partial tree list for `graph` and executes the merge
    /// loop.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyGraph`] when `graph` has no vertices and
    /// [`MstError::DisconnectedGraph`] when it is disconnected and the policy
    /// is [`DisconnectedPolicy::Fail`].
    #[instrument(
        name = "mst.run",
        err,
        skip(self, graph),
        fields(
            root_strategy = self.root_strategy.as_str(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
        ),
    )]
    pub fn run(&self, graph: &Graph) -> Result<SpanningTree, MstError> {
        if graph.is_empty() {
            return Err(MstError::EmptyGraph);
        }

        let list = initialize(graph);
        let vertex_count = graph.vertex_count();
        match self.root_strategy {
            RootStrategy::Eager => execute(
                list,
                &mut EagerRoots::new(vertex_count),
                self.disconnected_policy,
            ),
            RootStrategy::DisjointSet => execute(
                list,
                &mut DisjointSetRoots::new(vertex_count),
                self.disconnected_policy,
            ),
        }
    }
}
