//! Structural invariants of the selected arcs.
//!
//! For every generated graph the forest produced under
//! [`DisconnectedPolicy::Forest`] must:
//!
//! - reference only vertices of the graph and never join a vertex to itself,
//! - carry finite weights,
//! - contain no cycle,
//! - hold exactly `n - c` arcs for `c` components, and
//! - span the graph whenever the input is connected.
//!
//! Disconnected inputs must be rejected under [`DisconnectedPolicy::Fail`].

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Arc, DisconnectedPolicy, MstError, RootStrategy};

use super::helpers::{find_root, run_forest, run_with};
use super::oracle::count_components;
use super::types::MstFixture;

/// Runs the structural checks for `fixture` with the eager root table.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = run_forest(fixture, RootStrategy::Eager)?;
    let arcs = forest.arcs();

    validate_arcs(arcs, |arc| {
        (arc.v1().index() >= fixture.node_count || arc.v2().index() >= fixture.node_count)
            .then(|| format!("arc {arc} leaves the graph"))
    })?;
    validate_arcs(arcs, |arc| {
        (arc.v1() == arc.v2()).then(|| format!("arc {arc} is a self-loop"))
    })?;
    validate_arcs(arcs, |arc| {
        (!arc.weight().is_finite()).then(|| format!("arc {arc} has a non-finite weight"))
    })?;
    validate_acyclicity(fixture.node_count, arcs)?;

    let expected = fixture
        .node_count
        .saturating_sub(forest.component_count());
    if arcs.len() != expected {
        return Err(TestCaseError::fail(format!(
            "{} arcs, expected n - c = {expected} ({})",
            arcs.len(),
            fixture.describe()
        )));
    }

    let input_components = count_components(fixture.node_count, &fixture.edges);
    if forest.component_count() != input_components {
        return Err(TestCaseError::fail(format!(
            "forest has {} components, input has {input_components} ({})",
            forest.component_count(),
            fixture.describe()
        )));
    }

    validate_fail_policy(fixture, input_components)
}

fn validate_arcs<F>(arcs: &[Arc], mut check: F) -> TestCaseResult
where
    F: FnMut(&Arc) -> Option<String>,
{
    match arcs.iter().find_map(&mut check) {
        Some(message) => Err(TestCaseError::fail(message)),
        None => Ok(()),
    }
}

fn validate_acyclicity(node_count: usize, arcs: &[Arc]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..node_count).collect();
    for (position, arc) in arcs.iter().enumerate() {
        let left = find_root(&mut parent, arc.v1().index());
        let right = find_root(&mut parent, arc.v2().index());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "arc {position} ({arc}) closes a cycle"
            )));
        }
        parent[right] = left;
    }
    Ok(())
}

/// A connected input must succeed under the failing policy, and a
/// disconnected one must report [`MstError::DisconnectedGraph`].
fn validate_fail_policy(fixture: &MstFixture, input_components: usize) -> TestCaseResult {
    let result = run_with(fixture, RootStrategy::Eager, DisconnectedPolicy::Fail);
    match (input_components, result) {
        (1, Ok(tree)) if tree.is_tree() => Ok(()),
        (1, outcome) => Err(TestCaseError::fail(format!(
            "connected input did not yield a tree: {outcome:?} ({})",
            fixture.describe()
        ))),
        (_, Err(MstError::DisconnectedGraph { .. })) => Ok(()),
        (components, outcome) => Err(TestCaseError::fail(format!(
            "input with {components} components was not rejected: {outcome:?} ({})",
            fixture.describe()
        ))),
    }
}
