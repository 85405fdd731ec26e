#[cfg(test)]
#[path = "../../../tests/unit/algorithms/tsp/state_test.rs"]
mod state_test;

use crate::models::{Cost, CostMatrix, Weight};

/// A frame of the branch-and-bound search: a partial path which starts at the source and the
/// reduced matrix of the remaining choices. Branching copies the matrix, so frames never share
/// cells.
#[derive(Clone, Debug)]
pub(crate) struct SearchState {
    pub visited: Vec<bool>,
    pub path: Vec<usize>,
    pub parent: usize,
    pub bound: Cost,
    pub matrix: CostMatrix,
}

impl SearchState {
    /// Creates the root frame: reduces a copy of the matrix, its contribution is the first bound.
    pub fn new(matrix: &CostMatrix, source: usize) -> Self {
        let mut matrix = matrix.clone();
        let bound = matrix.reduce();

        let mut visited = vec![false; matrix.size()];
        visited[source] = true;

        Self { visited, path: vec![source], parent: source, bound, matrix }
    }

    /// Returns the vertex where the path starts.
    pub fn source(&self) -> usize {
        self.path[0]
    }

    /// Returns true when every vertex is on the path.
    pub fn is_complete(&self) -> bool {
        self.path.len() == self.visited.len()
    }

    /// Returns frames for every unvisited vertex reachable from the parent, in ascending vertex
    /// order.
    pub fn children(&self) -> impl Iterator<Item = SearchState> + '_ {
        (0..self.visited.len()).filter(|&vertex| !self.visited[vertex]).filter_map(|vertex| self.branch(vertex))
    }

    /// Commits the edge from the parent to `next` on a copy of this frame. The row of the parent,
    /// the column of `next` and the way back from `next` to the source are closed, the rest is
    /// reduced again. The bound grows by the reduced edge cost and the new reduction.
    pub fn branch(&self, next: usize) -> Option<SearchState> {
        let parent = self.parent;

        let edge = match self.matrix.get(parent, next) {
            Weight::Finite(edge) if !self.visited[next] => edge,
            _ => return None,
        };

        let mut matrix = self.matrix.clone();
        matrix.mask_row(parent);
        matrix.mask_column(next);
        matrix.mask_cell(next, self.source());
        let reduction = matrix.reduce();

        let mut visited = self.visited.clone();
        visited[next] = true;

        let mut path = self.path.clone();
        path.push(next);

        Some(SearchState { visited, path, parent: next, bound: self.bound + edge + reduction, matrix })
    }

    /// Checks whether the complete path can return to the source in the original matrix.
    pub fn can_close(&self, original: &CostMatrix) -> bool {
        self.path.len() == 1 || original.get(self.parent, self.source()).is_finite()
    }
}
