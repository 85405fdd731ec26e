//! Single-source shortest paths on a directed graph with integer, possibly negative, weights.

mod bellman_ford;
pub use self::bellman_ford::{ShortestPathEngine, bellman_ford};

use crate::models::Weight;
use crate::utils::AlgorithmError;
use serde::Serialize;

/// Specifies whether the distance map can be trusted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConvergenceStatus {
    /// Distances are final, no edge admits a further improvement.
    Converged,
    /// A negative cycle is reachable from the source, distance values are meaningless.
    NegativeCycleDetected {
        /// Vertices of one negative cycle in travel order, empty if it cannot be recovered.
        cycle: Vec<usize>,
    },
}

impl ConvergenceStatus {
    /// Returns a numeric status code: `1` when converged, `0` when a negative cycle exists.
    pub fn code(&self) -> u8 {
        match self {
            ConvergenceStatus::Converged => 1,
            ConvergenceStatus::NegativeCycleDetected { .. } => 0,
        }
    }
}

/// A distance map: distance and parent of every vertex indexed by vertex index.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<Weight>,
    parents: Vec<Option<usize>>,
    status: ConvergenceStatus,
}

impl ShortestPaths {
    /// Returns an index of the source vertex.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the status of the computation.
    pub fn status(&self) -> &ConvergenceStatus {
        &self.status
    }

    /// Returns true when no negative cycle was found.
    pub fn is_converged(&self) -> bool {
        self.status == ConvergenceStatus::Converged
    }

    /// Returns distances of all vertices.
    pub fn distances(&self) -> &[Weight] {
        self.distances.as_slice()
    }

    /// Returns parents of all vertices.
    pub fn parents(&self) -> &[Option<usize>] {
        self.parents.as_slice()
    }

    /// Returns a distance to the vertex, `None` if there is no such vertex.
    pub fn distance(&self, vertex: usize) -> Option<Weight> {
        self.distances.get(vertex).copied()
    }

    /// Returns a parent of the vertex on its shortest path.
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied().flatten()
    }

    /// Consumes the map and returns it back only if it is valid.
    pub fn into_converged(self) -> Result<Self, AlgorithmError> {
        if self.is_converged() { Ok(self) } else { Err(AlgorithmError::NegativeCycleDetected) }
    }

    /// Follows parent links from the destination back to the source. The route starts with the
    /// destination and ends with the source.
    pub fn backtrack(&self, destination: usize) -> Result<Vec<usize>, AlgorithmError> {
        if !self.is_converged() {
            return Err(AlgorithmError::NegativeCycleDetected);
        }

        if destination >= self.distances.len() {
            return Err(AlgorithmError::invalid_input(format!("unknown vertex: {destination}")));
        }

        let mut route = vec![destination];
        let mut current = destination;

        while current != self.source {
            match self.parents[current] {
                Some(parent) if route.len() <= self.distances.len() => {
                    route.push(parent);
                    current = parent;
                }
                _ => return Err(AlgorithmError::Unreachable { vertex: destination }),
            }
        }

        Ok(route)
    }
}
