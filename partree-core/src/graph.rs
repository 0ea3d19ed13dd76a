//! Undirected weighted graph consumed by the spanning tree engine.
//!
//! The graph is a plain adjacency-list collaborator: vertices are addressed by
//! dense [`VertexId`]s and each vertex stores its `(neighbour, weight)` pairs.
//! Every undirected edge is recorded once at each endpoint.

use std::{collections::HashMap, fmt};

use crate::error::GraphError;

/// Dense identifier of a vertex within a [`Graph`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(usize);

impl VertexId {
    /// Wraps a raw vertex index.
    ///
    /// # Examples
    /// ```
    /// use partree_core::VertexId;
    ///
    /// assert_eq!(VertexId::new(4).index(), 4);
    /// ```
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw vertex index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0 }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of a vertex adjacency list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    vertex: VertexId,
    weight: f32,
}

impl Neighbor {
    /// Returns the adjacent vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> VertexId { self.vertex }

    /// Returns the weight of the connecting edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f32 { self.weight }
}

/// A named vertex and its adjacency list.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    id: VertexId,
    name: String,
    neighbors: Vec<Neighbor>,
}

impl Vertex {
    /// Returns the vertex identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> VertexId { self.id }

    /// Returns the vertex name.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    /// Returns the adjacency list in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn neighbors(&self) -> &[Neighbor] { &self.neighbors }
}

/// Immutable undirected weighted graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    vertices: Vec<Vertex>,
    names: HashMap<String, VertexId>,
    edge_count: usize,
}

impl Graph {
    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of undirected edges added to the graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns `true` when the graph holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns every vertex in id order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[Vertex] { &self.vertices }

    /// Looks up a vertex by id.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Looks up a vertex by name.
    #[must_use]
    pub fn vertex_by_name(&self, name: &str) -> Option<&Vertex> {
        self.names.get(name).and_then(|&id| self.vertex(id))
    }

    /// Returns the adjacency list of `id`, or an empty slice for unknown ids.
    #[must_use]
    pub fn neighbors(&self, id: VertexId) -> &[Neighbor] {
        self.vertex(id).map(Vertex::neighbors).unwrap_or_default()
    }
}

/// Incrementally assembles a [`Graph`].
///
/// # Examples
/// ```
/// use partree_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// let a = builder.add_vertex("A")?;
/// let b = builder.add_vertex("B")?;
/// builder.add_edge(a, b, 4.0)?;
/// let graph = builder.build();
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.neighbors(b)[0].vertex(), a);
/// # Ok::<(), partree_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    vertices: Vec<Vertex>,
    names: HashMap<String, VertexId>,
    edge_count: usize,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex and returns its identifier.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] when `name` is already taken.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<VertexId, GraphError> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(GraphError::DuplicateVertex { name });
        }
        let id = VertexId::new(self.vertices.len());
        self.names.insert(name.clone(), id);
        self.vertices.push(Vertex {
            id,
            name,
            neighbors: Vec::new(),
        });
        Ok(id)
    }

    /// Adds an undirected edge between `left` and `right`.
    ///
    /// Self-loops and parallel edges are accepted; the spanning tree engine
    /// discards them as cycle-forming arcs.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when either endpoint is unknown and
    /// [`GraphError::NonFiniteWeight`] when `weight` is NaN or infinite.
    pub fn add_edge(
        &mut self,
        left: VertexId,
        right: VertexId,
        weight: f32,
    ) -> Result<(), GraphError> {
        let vertex_count = self.vertices.len();
        for vertex in [left, right] {
            if vertex.index() >= vertex_count {
                return Err(GraphError::InvalidVertex {
                    vertex,
                    vertex_count,
                });
            }
        }
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                left,
                right,
                weight,
            });
        }

        self.push_neighbor(left, right, weight);
        if left != right {
            self.push_neighbor(right, left, weight);
        }
        self.edge_count = self.edge_count.saturating_add(1);
        Ok(())
    }

    /// Returns the id assigned to `name`, if any.
    #[must_use]
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.names.get(name).copied()
    }

    /// Finalises the graph.
    #[must_use]
    pub fn build(self) -> Graph {
        Graph {
            vertices: self.vertices,
            names: self.names,
            edge_count: self.edge_count,
        }
    }

    fn push_neighbor(&mut self, from: VertexId, to: VertexId, weight: f32) {
        if let Some(vertex) = self.vertices.get_mut(from.index()) {
            vertex.neighbors.push(Neighbor { vertex: to, weight });
        }
    }
}
