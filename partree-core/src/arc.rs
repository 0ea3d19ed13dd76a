//! Weighted candidate edges exchanged between partial trees.

use std::{cmp::Ordering, fmt};

use crate::graph::VertexId;

/// A weighted arc between two vertices.
///
/// The endpoints are stored in the order the arc was discovered (`v1` is the
/// vertex whose adjacency list produced it) but the arc is semantically
/// undirected. Arcs order by weight and then by `sequence`, the insertion
/// order assigned during initialization, so equal weights resolve
/// deterministically.
#[derive(Clone, Copy, Debug)]
pub struct Arc {
    v1: VertexId,
    v2: VertexId,
    weight: f32,
    sequence: u64,
}

impl Arc {
    /// Creates an arc.
    ///
    /// # Examples
    /// ```
    /// use partree_core::{Arc, VertexId};
    ///
    /// let arc = Arc::new(VertexId::new(0), VertexId::new(1), 2.0, 0);
    /// assert_eq!(arc.weight(), 2.0);
    /// assert!(arc.connects(VertexId::new(1), VertexId::new(0)));
    /// ```
    #[must_use]
    pub const fn new(v1: VertexId, v2: VertexId, weight: f32, sequence: u64) -> Self {
        Self {
            v1,
            v2,
            weight,
            sequence,
        }
    }

    /// Returns the endpoint whose adjacency list produced the arc.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v1(&self) -> VertexId { self.v1 }

    /// Returns the opposite endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v2(&self) -> VertexId { self.v2 }

    /// Returns the arc weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f32 { self.weight }

    /// Returns the deterministic tie-break sequence.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sequence(&self) -> u64 { self.sequence }

    /// Returns the endpoints as `(min, max)` regardless of discovery order.
    #[must_use]
    pub fn canonical(&self) -> (VertexId, VertexId) {
        if self.v1 <= self.v2 {
            (self.v1, self.v2)
        } else {
            (self.v2, self.v1)
        }
    }

    /// Returns `true` when the arc joins `a` and `b` in either direction.
    #[must_use]
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.v1 == a && self.v2 == b) || (self.v1 == b && self.v2 == a)
    }
}

impl PartialEq for Arc {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Arc {}

impl Ord for Arc {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
            .then_with(|| self.v1.cmp(&other.v1))
            .then_with(|| self.v2.cmp(&other.v2))
    }
}

impl PartialOrd for Arc {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} {}}}", self.v1, self.v2, self.weight)
    }
}
