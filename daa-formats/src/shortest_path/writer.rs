#[cfg(test)]
#[path = "../../tests/unit/shortest_path/writer_test.rs"]
mod writer_test;

use super::ShortestPathReport;
use daa_core::models::Graph;
use daa_core::prelude::GenericError;
use std::io::{BufWriter, Write};

/// A trait to write shortest paths in the text format.
pub trait ShortestPathSolution<W: Write> {
    /// Writes the status, the distance table and a route to every vertex except the source.
    fn write_shortest_path(&self, writer: &mut BufWriter<W>) -> Result<(), GenericError>;
}

impl<W: Write> ShortestPathSolution<W> for ShortestPathReport {
    fn write_shortest_path(&self, writer: &mut BufWriter<W>) -> Result<(), GenericError> {
        write!(writer, "\n{}", self.status)?;

        if let Some(cycle) = self.cycle.as_ref().filter(|cycle| !cycle.is_empty()) {
            write!(writer, "\n\ncycle: {}", cycle.join(" => "))?;
        }

        if !self.vertices.is_empty() {
            let row = |values: Vec<String>| values.into_iter().map(|value| format!("\t{value}")).collect::<String>();

            write!(
                writer,
                "\n\nvertices:{}\ndistances:{}\nparents:{}",
                row(self.vertices.iter().map(|vertex| vertex.name.clone()).collect()),
                row(self
                    .vertices
                    .iter()
                    .map(|vertex| vertex.distance.map_or("∞".to_string(), |distance| distance.to_string()))
                    .collect()),
                row(self.vertices.iter().map(|vertex| vertex.parent.clone().unwrap_or("-".to_string())).collect()),
            )?;
        }

        for vertex in self.vertices.iter().filter(|vertex| vertex.name != self.source) {
            write!(writer, "\n\nPath: {} => {}", self.source, vertex.name)?;

            match (vertex.distance, vertex.route.as_ref()) {
                (Some(distance), Some(route)) => write!(writer, "\nCost: {distance}\nRoute: {}", route.join(" <= "))?,
                _ => write!(writer, "\nCost: ∞\nRoute: unreachable")?,
            }
        }

        writeln!(writer)?;

        Ok(())
    }
}

/// Writes the graph in the text format.
pub fn write_graph<W: Write>(graph: &Graph, writer: &mut BufWriter<W>) -> Result<(), GenericError> {
    writeln!(writer, "{} {}", graph.size(), graph.edges().len())?;
    writeln!(writer, "{}", graph.vertices().join(" "))?;

    for edge in graph.edges() {
        let source = graph.vertex_name(edge.source).unwrap_or_default();
        let destination = graph.vertex_name(edge.destination).unwrap_or_default();

        writeln!(writer, "{source} {destination} {}", edge.weight)?;
    }

    Ok(())
}
