#[cfg(test)]
#[path = "../../../tests/unit/algorithms/tsp/descent_test.rs"]
mod descent_test;

use super::*;

/// Builds a tour by a single line of best-first commits: at every step the child with the lowest
/// bound wins (the lowest vertex index on ties) and the siblings are dropped. There is no
/// backtracking, so the result follows the bounding heuristic but is not guaranteed optimal.
///
/// Children differ from the classic textbook descent in two ways:
/// * the masked back edge is `[next][source]`, which would close a premature sub-tour, and not
///   `[next][parent]`;
/// * a child starts from its parent's reduced matrix and adds the reduced edge cost, instead of
///   re-masking the whole path on the root-reduced matrix and adding the raw edge weight.
///
/// Every reduction is then counted once, so on a feasible instance the returned cost is exactly
/// the weight of the returned tour. The textbook variant counts some reductions twice, its cost
/// may exceed the tour weight and its path may differ.
pub(crate) fn descend(matrix: &CostMatrix, source: usize, telemetry: &Telemetry) -> Result<Tour, AlgorithmError> {
    let mut state = SearchState::new(matrix, source);
    let root_bound = state.bound;

    telemetry.log(|| format!("root reduction gives lower bound {root_bound}"));

    while !state.is_complete() {
        let step = state.path.len();

        state = state.children().min_by_key(|child| child.bound).ok_or(AlgorithmError::DisconnectedInstance { step })?;

        telemetry.log(|| format!("step {step}: committed vertex {} with bound {}", state.parent, state.bound));
    }

    if !state.can_close(matrix) {
        return Err(AlgorithmError::DisconnectedInstance { step: state.path.len() });
    }

    Ok(Tour { cost: state.bound, path: state.path, root_bound })
}
