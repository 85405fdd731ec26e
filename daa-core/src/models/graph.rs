#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use crate::models::Cost;
use crate::utils::AlgorithmError;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// A directed weighted edge between two vertices addressed by their indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// An index of the vertex where the edge starts.
    pub source: usize,
    /// An index of the vertex where the edge ends.
    pub destination: usize,
    /// An edge weight, can be negative.
    pub weight: Cost,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(source: usize, destination: usize, weight: Cost) -> Self {
        Self { source, destination, weight }
    }
}

/// A directed weighted graph: an arena of uniquely named vertices with stable indices and a fixed
/// list of edges. It is immutable once built.
#[derive(Clone, Debug)]
pub struct Graph {
    vertices: Vec<String>,
    index: FxHashMap<String, usize>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph from vertex names and index based edges.
    pub fn new(vertices: Vec<String>, edges: Vec<Edge>) -> Result<Self, AlgorithmError> {
        let index = create_index(&vertices)?;

        if let Some(edge) = edges.iter().find(|edge| edge.source >= vertices.len() || edge.destination >= vertices.len())
        {
            return Err(AlgorithmError::invalid_input(format!(
                "edge ({}, {}) references a vertex outside of [0, {})",
                edge.source,
                edge.destination,
                vertices.len()
            )));
        }

        Ok(Self { vertices, index, edges })
    }

    /// Returns amount of vertices.
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Returns vertex names in index order.
    pub fn vertices(&self) -> &[String] {
        self.vertices.as_slice()
    }

    /// Returns edges in the order they were added.
    pub fn edges(&self) -> &[Edge] {
        self.edges.as_slice()
    }

    /// Returns an index of the vertex with given name.
    pub fn vertex_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns a name of the vertex with given index.
    pub fn vertex_name(&self, index: usize) -> Option<&str> {
        self.vertices.get(index).map(|name| name.as_str())
    }
}

/// Builds a graph from named vertices and edges which reference them by name.
#[derive(Default)]
pub struct GraphBuilder {
    vertices: Vec<String>,
    index: FxHashMap<String, usize>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, name: &str) -> Result<usize, AlgorithmError> {
        if self.index.contains_key(name) {
            return Err(AlgorithmError::invalid_input(format!("duplicate vertex name: '{name}'")));
        }

        let idx = self.vertices.len();
        self.vertices.push(name.to_string());
        self.index.insert(name.to_string(), idx);

        Ok(idx)
    }

    /// Adds a directed edge between two already added vertices.
    pub fn add_edge(&mut self, source: &str, destination: &str, weight: Cost) -> Result<&mut Self, AlgorithmError> {
        let source = self.lookup(source)?;
        let destination = self.lookup(destination)?;

        self.edges.push(Edge::new(source, destination, weight));

        Ok(self)
    }

    /// Builds the graph.
    pub fn build(self) -> Graph {
        Graph { vertices: self.vertices, index: self.index, edges: self.edges }
    }

    fn lookup(&self, name: &str) -> Result<usize, AlgorithmError> {
        self.index.get(name).copied().ok_or_else(|| AlgorithmError::invalid_input(format!("unknown vertex: '{name}'")))
    }
}

fn create_index(vertices: &[String]) -> Result<FxHashMap<String, usize>, AlgorithmError> {
    vertices.iter().enumerate().try_fold(FxHashMap::default(), |mut index, (idx, name)| {
        if index.insert(name.clone(), idx).is_some() {
            return Err(AlgorithmError::invalid_input(format!("duplicate vertex name: '{name}'")));
        }

        Ok(index)
    })
}
