//! Traveling Salesman Problem solved with the reduced cost matrix method.
//!
//! A reduction subtracts row and column minima from the cost matrix, the subtracted sum is a
//! lower bound of any tour. Committing an edge closes the row of its start, the column of its end
//! and the early way back to the source, then reduces again. Two ways of using these bounds are
//! offered by [`TspStrategy`]: a single best-first descent and an exhaustive best-first search.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/tsp/tsp_test.rs"]
mod tsp_test;

mod brute_force;
pub use self::brute_force::{MAX_BRUTE_FORCE_SIZE, solve_brute_force};

mod descent;
mod exhaustive;

mod state;
pub(crate) use self::state::SearchState;

use crate::models::{Cost, CostMatrix, Weight};
use crate::utils::{AlgorithmError, Telemetry};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A Hamiltonian cycle: the path starts at the source, visits every vertex once and implicitly
/// returns to the source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    /// A total cost of the tour.
    pub cost: Cost,
    /// Vertices in visiting order, the closing return to the source is not included.
    pub path: Vec<usize>,
    /// A lower bound given by the reduction of the full matrix.
    pub root_bound: Cost,
}

impl Tour {
    /// Returns the path with the source appended at the end.
    pub fn closed_path(&self) -> Vec<usize> {
        self.path.iter().chain(self.path.first()).copied().collect()
    }
}

/// Specifies how the search tree is explored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TspStrategy {
    /// Commits to the cheapest child at every step and never reconsiders: a bound guided
    /// construction, not guaranteed to be optimal.
    #[default]
    Descent,
    /// A best-first branch-and-bound over the whole tree, returns an optimal tour.
    Exhaustive,
    /// Enumerates all permutations, see [`MAX_BRUTE_FORCE_SIZE`].
    BruteForce,
}

impl Display for TspStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TspStrategy::Descent => "descent",
            TspStrategy::Exhaustive => "exhaustive",
            TspStrategy::BruteForce => "brute-force",
        };

        write!(f, "{name}")
    }
}

impl FromStr for TspStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "descent" => Ok(TspStrategy::Descent),
            "exhaustive" => Ok(TspStrategy::Exhaustive),
            "brute-force" => Ok(TspStrategy::BruteForce),
            _ => Err(format!("unknown tsp strategy: '{value}'")),
        }
    }
}

/// Solves TSP with the reduced cost matrix branch-and-bound.
#[derive(Clone, Default)]
pub struct TspBranchAndBound {
    strategy: TspStrategy,
    telemetry: Telemetry,
}

impl TspBranchAndBound {
    /// Creates a new instance of `TspBranchAndBound`.
    pub fn new(strategy: TspStrategy, telemetry: Telemetry) -> Self {
        Self { strategy, telemetry }
    }

    /// Returns used strategy.
    pub fn strategy(&self) -> TspStrategy {
        self.strategy
    }

    /// Finds a tour which starts and ends at the `source` vertex.
    pub fn solve(&self, matrix: &CostMatrix, source: usize) -> Result<Tour, AlgorithmError> {
        let size = matrix.size();

        if source >= size {
            return Err(AlgorithmError::invalid_input(format!("source vertex {source} is not in [0, {size})")));
        }

        self.telemetry.log(|| format!("solving {size} vertices from {source} using {} strategy", self.strategy));

        let tour = match self.strategy {
            TspStrategy::Descent => descent::descend(matrix, source, &self.telemetry),
            TspStrategy::Exhaustive => exhaustive::explore(matrix, source, &self.telemetry),
            TspStrategy::BruteForce => solve_brute_force(matrix, source),
        }?;

        self.telemetry.log(|| format!("tour cost is {}", tour.cost));

        Ok(tour)
    }
}

/// Solves TSP using the default descent strategy without telemetry.
pub fn solve_tsp(matrix: &CostMatrix, source: usize) -> Result<Tour, AlgorithmError> {
    TspBranchAndBound::default().solve(matrix, source)
}

/// Returns a lower bound of any tour: the reduction of the full matrix.
pub fn root_bound(matrix: &CostMatrix) -> Cost {
    matrix.clone().reduce()
}
