//! Shared helpers for the property modules.

use proptest::test_runner::TestCaseError;

use crate::{DisconnectedPolicy, MstError, RootStrategy, SpanningTree, SpanningTreeBuilder};

use super::types::MstFixture;

/// Path-halving find over a plain parent vector.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Runs the fixture under the forest policy, which accepts every generated
/// shape, converting failures into test case errors.
pub(super) fn run_forest(
    fixture: &MstFixture,
    strategy: RootStrategy,
) -> Result<SpanningTree, TestCaseError> {
    run_with(fixture, strategy, DisconnectedPolicy::Forest).map_err(|err| {
        TestCaseError::fail(format!(
            "{} run failed: {err} ({})",
            strategy.as_str(),
            fixture.describe()
        ))
    })
}

/// Runs the fixture with an explicit configuration.
pub(super) fn run_with(
    fixture: &MstFixture,
    strategy: RootStrategy,
    policy: DisconnectedPolicy,
) -> Result<SpanningTree, MstError> {
    SpanningTreeBuilder::new()
        .with_root_strategy(strategy)
        .with_disconnected_policy(policy)
        .build()
        .run(&fixture.graph())
}
