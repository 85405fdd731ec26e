#[cfg(test)]
#[path = "../../../tests/unit/algorithms/tsp/brute_force_test.rs"]
mod brute_force_test;

use super::*;

/// A max amount of vertices accepted by the brute force enumeration.
pub const MAX_BRUTE_FORCE_SIZE: usize = 10;

/// Finds an optimal tour by enumerating every order of the remaining vertices. Among equally
/// cheap tours the lexicographically smallest path wins. Intended as a reference for small
/// instances only.
pub fn solve_brute_force(matrix: &CostMatrix, source: usize) -> Result<Tour, AlgorithmError> {
    let size = matrix.size();

    if source >= size {
        return Err(AlgorithmError::invalid_input(format!("source vertex {source} is not in [0, {size})")));
    }

    if size > MAX_BRUTE_FORCE_SIZE {
        return Err(AlgorithmError::invalid_input(format!(
            "brute force supports up to {MAX_BRUTE_FORCE_SIZE} vertices, got {size}"
        )));
    }

    let mut visited = vec![false; size];
    visited[source] = true;

    let mut search = Enumeration { matrix, path: vec![source], visited, best: None };
    search.enumerate(0);

    search
        .best
        .map(|(cost, path)| Tour { cost, path, root_bound: root_bound(matrix) })
        .ok_or(AlgorithmError::DisconnectedInstance { step: 1 })
}

struct Enumeration<'a> {
    matrix: &'a CostMatrix,
    path: Vec<usize>,
    visited: Vec<bool>,
    best: Option<(Cost, Vec<usize>)>,
}

impl Enumeration<'_> {
    fn enumerate(&mut self, cost: Cost) {
        let size = self.matrix.size();
        let last = self.path[self.path.len() - 1];

        if self.best.as_ref().is_some_and(|(best, _)| cost >= *best) {
            return;
        }

        if self.path.len() == size {
            let total = if size == 1 { Weight::Finite(cost) } else { self.matrix.get(last, self.path[0]) + cost };

            if let Weight::Finite(total) = total {
                if self.best.as_ref().is_none_or(|(best, _)| total < *best) {
                    self.best = Some((total, self.path.clone()));
                }
            }

            return;
        }

        for next in 0..size {
            if self.visited[next] {
                continue;
            }

            if let Weight::Finite(edge) = self.matrix.get(last, next) {
                self.visited[next] = true;
                self.path.push(next);

                self.enumerate(cost + edge);

                self.path.pop();
                self.visited[next] = false;
            }
        }
    }
}
