#[cfg(test)]
#[path = "../../tests/unit/shortest_path/reader_test.rs"]
mod reader_test;

use crate::common::TokenReader;
use daa_core::models::{Cost, Graph, GraphBuilder};
use daa_core::prelude::GenericError;
use std::io::{BufReader, Read};

/// A graph with a zero-based index of the source vertex.
#[derive(Clone, Debug)]
pub struct ShortestPathInstance {
    /// A graph.
    pub graph: Graph,
    /// A zero-based index of the source vertex, the first vertex by default.
    pub source: usize,
}

impl ShortestPathInstance {
    /// Returns an instance with the source vertex given by name.
    pub fn with_source(self, name: &str) -> Result<Self, GenericError> {
        let source =
            self.graph.vertex_index(name).ok_or_else(|| GenericError::from(format!("unknown source vertex: '{name}'")))?;

        Ok(Self { source, ..self })
    }
}

/// A trait to read a shortest path problem: vertex and edge counts, vertex names and edges given
/// as `source destination weight` triples with vertex names.
pub trait ShortestPathProblem {
    /// Reads a shortest path problem.
    fn read_shortest_path(self) -> Result<ShortestPathInstance, GenericError>;
}

impl<R: Read> ShortestPathProblem for BufReader<R> {
    fn read_shortest_path(self) -> Result<ShortestPathInstance, GenericError> {
        read_shortest_path_instance(TokenReader::new(self)?)
    }
}

impl ShortestPathProblem for String {
    fn read_shortest_path(self) -> Result<ShortestPathInstance, GenericError> {
        BufReader::new(self.as_bytes()).read_shortest_path()
    }
}

fn read_shortest_path_instance(mut reader: TokenReader) -> Result<ShortestPathInstance, GenericError> {
    let vertices = reader.next_value::<usize>("vertex count")?;
    let edges = reader.next_value::<usize>("edge count")?;

    if vertices == 0 {
        return Err("vertex count should be positive".into());
    }

    let mut builder = GraphBuilder::default();

    for _ in 0..vertices {
        let name = reader.next_token("vertex name")?;
        builder.add_vertex(name.as_str())?;
    }

    for _ in 0..edges {
        let source = reader.next_token("edge source")?;
        let destination = reader.next_token("edge destination")?;
        let weight = reader.next_value::<Cost>("edge weight")?;

        builder.add_edge(source.as_str(), destination.as_str(), weight)?;
    }

    reader.expect_end()?;

    Ok(ShortestPathInstance { graph: builder.build(), source: 0 })
}
