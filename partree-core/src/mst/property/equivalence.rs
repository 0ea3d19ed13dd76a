//! Agreement with the sequential Kruskal oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::RootStrategy;

use super::helpers::run_forest;
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Checks total weight, arc count and component count against the oracle.
///
/// Weights are compared after `f64` accumulation, where the sum of a fixed
/// multiset of `f32` values does not depend on order at these sizes.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = run_forest(fixture, RootStrategy::Eager)?;
    let oracle = sequential_kruskal(fixture.node_count, &fixture.edges);

    let weight = forest.total_weight();
    if (weight - oracle.total_weight).abs() > f64::EPSILON {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: partree={weight}, oracle={} ({})",
            oracle.total_weight,
            fixture.describe()
        )));
    }

    if forest.arcs().len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "arc count mismatch: partree={}, oracle={} ({})",
            forest.arcs().len(),
            oracle.edge_count,
            fixture.describe()
        )));
    }

    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: partree={}, oracle={} ({})",
            forest.component_count(),
            oracle.component_count,
            fixture.describe()
        )));
    }

    Ok(())
}
