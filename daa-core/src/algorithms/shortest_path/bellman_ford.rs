#[cfg(test)]
#[path = "../../../tests/unit/algorithms/shortest_path/bellman_ford_test.rs"]
mod bellman_ford_test;

use super::*;
use crate::models::{Edge, Graph, Weight};
use crate::utils::{AlgorithmError, Telemetry};

/// Solves the single-source shortest path problem with Bellman-Ford algorithm. Negative edge
/// weights are allowed, a negative cycle reachable from the source is detected and reported in
/// the result status.
#[derive(Clone, Default)]
pub struct ShortestPathEngine {
    telemetry: Telemetry,
}

impl ShortestPathEngine {
    /// Creates a new instance of `ShortestPathEngine`.
    pub fn new(telemetry: Telemetry) -> Self {
        Self { telemetry }
    }

    /// Computes distances and parents of every vertex from the `source` one.
    pub fn solve(&self, graph: &Graph, source: usize) -> Result<ShortestPaths, AlgorithmError> {
        let size = graph.size();

        if source >= size {
            return Err(AlgorithmError::invalid_input(format!("source vertex {source} is not in [0, {size})")));
        }

        let mut distances = vec![Weight::Infinite; size];
        let mut parents = vec![None; size];
        distances[source] = Weight::Finite(0);

        for round in 1..size {
            let relaxed = graph.edges().iter().try_fold(0, |relaxed, edge| {
                relax(edge, &mut distances, &mut parents).map(|is_relaxed| relaxed + usize::from(is_relaxed))
            })?;
            self.telemetry.log(|| format!("round {round} of {}: relaxed {relaxed} edges", size - 1));
        }

        let mut has_negative_cycle = false;
        for edge in graph.edges() {
            if relaxed_distance(edge, &distances)?.is_some() {
                has_negative_cycle = true;
                break;
            }
        }

        let status = if has_negative_cycle {
            let cycle = find_negative_cycle(graph, distances.clone(), parents.clone())?.unwrap_or_default();
            self.telemetry.log(|| format!("negative cycle detected: {cycle:?}"));

            ConvergenceStatus::NegativeCycleDetected { cycle }
        } else {
            self.telemetry.log(|| "converged".to_string());

            ConvergenceStatus::Converged
        };

        Ok(ShortestPaths { source, distances, parents, status })
    }
}

/// Runs Bellman-Ford algorithm without any telemetry.
pub fn bellman_ford(graph: &Graph, source: usize) -> Result<ShortestPaths, AlgorithmError> {
    ShortestPathEngine::default().solve(graph, source)
}

/// Returns a distance to the edge destination through the edge, if it is shorter than the known
/// one. A distance out of `Cost` range is reported as an invalid input.
fn relaxed_distance(edge: &Edge, distances: &[Weight]) -> Result<Option<Weight>, AlgorithmError> {
    let candidate = distances[edge.source].checked_add(edge.weight).ok_or_else(|| {
        AlgorithmError::invalid_input(format!(
            "distance overflow when relaxing edge from {} to {}",
            edge.source, edge.destination
        ))
    })?;

    Ok(Some(candidate).filter(|candidate| candidate.is_finite() && *candidate < distances[edge.destination]))
}

fn relax(edge: &Edge, distances: &mut [Weight], parents: &mut [Option<usize>]) -> Result<bool, AlgorithmError> {
    Ok(match relaxed_distance(edge, distances)? {
        Some(distance) => {
            distances[edge.destination] = distance;
            parents[edge.destination] = Some(edge.source);
            true
        }
        None => false,
    })
}

/// Runs one more relaxation pass on the copies: the vertex relaxed last has a negative cycle
/// among its ancestors, going `size` parents back is guaranteed to land on it.
fn find_negative_cycle(
    graph: &Graph,
    mut distances: Vec<Weight>,
    mut parents: Vec<Option<usize>>,
) -> Result<Option<Vec<usize>>, AlgorithmError> {
    let mut last = None;
    for edge in graph.edges() {
        if relax(edge, &mut distances, &mut parents)? {
            last = Some(edge.destination);
        }
    }

    Ok(last.and_then(|last| walk_back_cycle(&parents, last, graph.size())))
}

fn walk_back_cycle(parents: &[Option<usize>], last: usize, size: usize) -> Option<Vec<usize>> {
    let start = (0..size).try_fold(last, |vertex, _| parents[vertex])?;

    let mut cycle = vec![start];
    let mut vertex = parents[start]?;
    while vertex != start {
        if cycle.len() > size {
            return None;
        }

        cycle.push(vertex);
        vertex = parents[vertex]?;
    }
    cycle.reverse();

    Some(cycle)
}
