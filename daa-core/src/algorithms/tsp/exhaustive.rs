#[cfg(test)]
#[path = "../../../tests/unit/algorithms/tsp/exhaustive_test.rs"]
mod exhaustive_test;

use super::*;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A search tree node ordered as a min-heap entry: lower key first, older node first on ties.
struct Node {
    key: Cost,
    order: usize,
    state: SearchState,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key.cmp(&self.key).then_with(|| other.order.cmp(&self.order))
    }
}

/// Explores the whole search tree best-first. Inner nodes are keyed by their reduced-matrix
/// bound, complete paths by their real tour cost, so the first complete path taken from the
/// queue is an optimal tour.
pub(crate) fn explore(matrix: &CostMatrix, source: usize, telemetry: &Telemetry) -> Result<Tour, AlgorithmError> {
    let root = SearchState::new(matrix, source);
    let root_bound = root.bound;

    telemetry.log(|| format!("root reduction gives lower bound {root_bound}"));

    let mut queue = BinaryHeap::new();
    let mut created = 0_usize;
    let mut expanded = 0_usize;
    let mut deepest = 1_usize;

    queue.push(Node { key: root_bound, order: created, state: root });

    while let Some(Node { key, state, .. }) = queue.pop() {
        if state.is_complete() {
            telemetry.log(|| format!("optimal tour {:?} found after expanding {expanded} nodes", state.path));

            return Ok(Tour { cost: key, path: state.path, root_bound });
        }

        expanded += 1;
        deepest = deepest.max(state.path.len());

        for child in state.children() {
            let key = if child.is_complete() {
                match matrix.tour_cost(child.path.as_slice()) {
                    Weight::Finite(cost) => cost,
                    Weight::Infinite => continue,
                }
            } else {
                child.bound
            };

            created += 1;
            queue.push(Node { key, order: created, state: child });
        }
    }

    telemetry.log(|| format!("search tree exhausted after expanding {expanded} nodes"));

    Err(AlgorithmError::DisconnectedInstance { step: deepest })
}
