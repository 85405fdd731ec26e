#[cfg(test)]
#[path = "../../tests/unit/shortest_path/report_test.rs"]
mod report_test;

use daa_core::algorithms::shortest_path::{ConvergenceStatus, ShortestPaths};
use daa_core::models::{Cost, Graph};
use serde::Serialize;

/// Shortest paths described with vertex names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortestPathReport {
    /// A source vertex name.
    pub source: String,
    /// `1` when distances are valid, `0` when a negative cycle was detected.
    pub status: u8,
    /// Vertices of a detected negative cycle in travel order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<Vec<String>>,
    /// Vertices with their distances and routes, empty when a negative cycle was detected.
    pub vertices: Vec<VertexReport>,
}

/// A single vertex of the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexReport {
    /// A vertex name.
    pub name: String,
    /// A distance from the source, `None` when it is unreachable.
    pub distance: Option<Cost>,
    /// A parent vertex name on the shortest path.
    pub parent: Option<String>,
    /// A route from the vertex back to the source, `None` when it is unreachable.
    pub route: Option<Vec<String>>,
}

impl ShortestPathReport {
    /// Creates a report from the result and the graph it was computed for.
    pub fn new(paths: &ShortestPaths, graph: &Graph) -> Self {
        let name = |index: usize| graph.vertex_name(index).unwrap_or_default().to_string();

        let (cycle, vertices) = match paths.status() {
            ConvergenceStatus::Converged => {
                let vertices = (0..graph.size())
                    .map(|vertex| VertexReport {
                        name: name(vertex),
                        distance: paths.distance(vertex).and_then(|distance| distance.finite()),
                        parent: paths.parent(vertex).map(name),
                        route: paths.backtrack(vertex).ok().map(|route| route.into_iter().map(name).collect()),
                    })
                    .collect();

                (None, vertices)
            }
            ConvergenceStatus::NegativeCycleDetected { cycle } => {
                (Some(cycle.iter().copied().map(name).collect()), Vec::default())
            }
        };

        Self { source: name(paths.source()), status: paths.status().code(), cycle, vertices }
    }
}
