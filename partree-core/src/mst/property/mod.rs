//! Property-based tests for partial-tree merging.
//!
//! Checks the driver against a sequential Kruskal oracle, validates the
//! structural invariants of the selected arcs, and confirms that both root
//! strategies select identical arcs across graph shapes with varied weight
//! distributions.

mod equivalence;
mod helpers;
mod strategies;
mod structural;
mod types;
