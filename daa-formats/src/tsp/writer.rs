#[cfg(test)]
#[path = "../../tests/unit/tsp/writer_test.rs"]
mod writer_test;

use super::TspInstance;
use crate::common::MISSING_TOKEN;
use daa_core::algorithms::tsp::Tour;
use daa_core::models::Weight;
use daa_core::prelude::GenericError;
use std::io::{BufWriter, Write};

/// A trait to write a TSP tour.
pub trait TspSolution<W: Write> {
    /// Writes the tour cost and the closed route with 1-based vertex names.
    fn write_tsp(&self, writer: &mut BufWriter<W>) -> Result<(), GenericError>;
}

impl<W: Write> TspSolution<W> for Tour {
    fn write_tsp(&self, writer: &mut BufWriter<W>) -> Result<(), GenericError> {
        let route = self.closed_path().iter().map(|vertex| (vertex + 1).to_string()).collect::<Vec<_>>().join(" => ");

        write!(writer, "\n{}\n\n{route}\n", self.cost)?;

        Ok(())
    }
}

/// Writes the instance in the off-diagonal text format.
pub fn write_tsp_instance<W: Write>(instance: &TspInstance, writer: &mut BufWriter<W>) -> Result<(), GenericError> {
    let matrix = &instance.matrix;
    let size = matrix.size();

    writeln!(writer, "{size}")?;

    for row in 0..size {
        let weights = (0..size)
            .filter(|&column| column != row)
            .map(|column| match matrix.get(row, column) {
                Weight::Finite(value) => value.to_string(),
                Weight::Infinite => MISSING_TOKEN.to_string(),
            })
            .collect::<Vec<_>>();

        if !weights.is_empty() {
            writeln!(writer, "{}", weights.join(" "))?;
        }
    }

    writeln!(writer, "{}", instance.source + 1)?;

    Ok(())
}
