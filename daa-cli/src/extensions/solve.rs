//! Solves problems read from their text formats and writes results.

#[cfg(test)]
#[path = "../../tests/unit/extensions/solve_test.rs"]
mod solve_test;

use super::config::OutputFormat;
use daa_core::prelude::*;
use daa_formats::common::write_json;
use daa_formats::min_max::{MinMaxProblem, MinMaxReport, MinMaxSolution};
use daa_formats::shortest_path::{ShortestPathProblem, ShortestPathReport, ShortestPathSolution};
use daa_formats::storage::{StorageProblem, StorageReport, StorageSolution};
use daa_formats::tsp::{TspProblem, TspSolution};
use std::io::{BufReader, BufWriter, Read, Write};

/// Reads TSP instance, solves it with given strategy and writes the tour.
pub fn solve_tsp_problem<R: Read, W: Write>(
    reader: BufReader<R>,
    strategy: TspStrategy,
    telemetry: Telemetry,
    format: OutputFormat,
    writer: &mut BufWriter<W>,
) -> Result<(), GenericError> {
    let instance = reader.read_tsp()?;
    let tour = TspBranchAndBound::new(strategy, telemetry).solve(&instance.matrix, instance.source)?;

    match format {
        OutputFormat::Text => tour.write_tsp(writer),
        OutputFormat::Json => write_json(&tour, writer),
    }
}

/// Reads a graph, finds shortest paths from the source vertex and writes them. When `source` is
/// not set, the first vertex is used.
pub fn solve_shortest_path_problem<R: Read, W: Write>(
    reader: BufReader<R>,
    source: Option<&str>,
    telemetry: Telemetry,
    format: OutputFormat,
    writer: &mut BufWriter<W>,
) -> Result<(), GenericError> {
    let instance = reader.read_shortest_path()?;
    let instance = match source {
        Some(source) => instance.with_source(source)?,
        None => instance,
    };

    let paths = ShortestPathEngine::new(telemetry).solve(&instance.graph, instance.source)?;
    let report = ShortestPathReport::new(&paths, &instance.graph);

    match format {
        OutputFormat::Text => report.write_shortest_path(writer),
        OutputFormat::Json => write_json(&report, writer),
    }
}

/// Reads values and writes their min and max.
pub fn solve_min_max_problem<R: Read, W: Write>(
    reader: BufReader<R>,
    format: OutputFormat,
    writer: &mut BufWriter<W>,
) -> Result<(), GenericError> {
    let values = reader.read_min_max()?;
    let report = MinMaxReport::from(min_max(values.as_slice())?);

    match format {
        OutputFormat::Text => report.write_min_max(writer),
        OutputFormat::Json => write_json(&report, writer),
    }
}

/// Reads programs, places them on tapes and writes the placement.
pub fn solve_storage_problem<R: Read, W: Write>(
    reader: BufReader<R>,
    format: OutputFormat,
    writer: &mut BufWriter<W>,
) -> Result<(), GenericError> {
    let instance = reader.read_storage()?;
    let report = StorageReport::new(&instance)?;

    match format {
        OutputFormat::Text => report.write_storage(writer),
        OutputFormat::Json => write_json(&report, writer),
    }
}
