//! Graph generators for the property suites.
//!
//! Each generator is driven by a seeded [`SmallRng`] so that a failing
//! proptest case or a pinned rstest seed reproduces the same graph.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

const MIN_NODES: usize = 8;
const MAX_NODES: usize = 48;
/// Dense graphs stay small to bound the quadratic edge count.
const DENSE_MAX_NODES: usize = 24;

/// Samples a distribution and a seed, then generates the fixture.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for an explicitly chosen distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (node_count, edges) = match distribution {
        WeightDistribution::Unique => random_pairs(rng, MAX_NODES, (0.2, 0.6), continuous_weight),
        WeightDistribution::ManyIdentical => {
            let pool: Vec<f32> = (0..rng.gen_range(1..=3))
                .map(|_| f32::from(rng.gen_range(1_u8..=10)))
                .collect();
            random_pairs(rng, MAX_NODES, (0.3, 0.7), move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => sparse(rng),
        WeightDistribution::Dense => {
            random_pairs(rng, DENSE_MAX_NODES, (0.7, 0.95), continuous_weight)
        }
        WeightDistribution::Disconnected => disconnected(rng),
    };
    MstFixture {
        node_count,
        edges,
        distribution,
    }
}

fn continuous_weight(rng: &mut SmallRng) -> f32 {
    rng.gen_range(0.1_f32..100.0)
}

/// Adds each unordered pair independently with a sampled probability.
///
/// Falls back to a single `0 - 1` edge when no pair was drawn.
fn random_pairs(
    rng: &mut SmallRng,
    max_nodes: usize,
    (low, high): (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> f32,
) -> (usize, Vec<(usize, usize, f32)>) {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let probability: f64 = rng.gen_range(low..=high);
    let mut edges = Vec::new();
    for left in 0..node_count {
        for right in (left + 1)..node_count {
            if rng.gen_bool(probability) {
                edges.push((left, right, weight(rng)));
            }
        }
    }
    if edges.is_empty() {
        edges.push((0, 1, weight(rng)));
    }
    (node_count, edges)
}

/// Walks a random permutation to guarantee connectivity, then adds roughly
/// `n / 2` to `n` extra edges drawn with replacement.
///
/// Extra edges may repeat an existing pair or join a vertex to itself, which
/// exercises dead-arc discarding.
fn sparse(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, f32)>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..node_count).collect();
    for index in (1..order.len()).rev() {
        let swap = rng.gen_range(0..=index);
        order.swap(index, swap);
    }

    let mut edges: Vec<(usize, usize, f32)> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], continuous_weight(rng)))
        .collect();

    for _ in 0..rng.gen_range(node_count / 2..=node_count) {
        let left = rng.gen_range(0..node_count);
        let right = rng.gen_range(0..node_count);
        edges.push((left, right, continuous_weight(rng)));
    }
    (node_count, edges)
}

/// Builds two to five components of three to twelve vertices each, with
/// every component connected through a random path.
fn disconnected(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, f32)>) {
    let mut node_count = 0;
    let mut edges = Vec::new();
    for _ in 0..rng.gen_range(2..=5) {
        let size = rng.gen_range(3..=12);
        let offset = node_count;
        for vertex in (offset + 1)..(offset + size) {
            let anchor = rng.gen_range(offset..vertex);
            edges.push((anchor, vertex, continuous_weight(rng)));
        }
        let probability: f64 = rng.gen_range(0.1..=0.5);
        for left in offset..(offset + size) {
            for right in (left + 1)..(offset + size) {
                if rng.gen_bool(probability) {
                    edges.push((left, right, continuous_weight(rng)));
                }
            }
        }
        node_count += size;
    }
    (node_count, edges)
}

// Weighted so tie-heavy graphs are drawn more often.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            1 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
