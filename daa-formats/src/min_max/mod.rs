//! Contains functionality to read values for the min max search and write the result.

#[cfg(test)]
#[path = "../../tests/unit/min_max/min_max_test.rs"]
mod min_max_test;

use crate::common::TokenReader;
use daa_core::models::Cost;
use daa_core::prelude::GenericError;
use serde::Serialize;
use std::io::{BufReader, BufWriter, Read, Write};

/// A trait to read values: their count followed by the values.
pub trait MinMaxProblem {
    /// Reads values.
    fn read_min_max(self) -> Result<Vec<Cost>, GenericError>;
}

impl<R: Read> MinMaxProblem for BufReader<R> {
    fn read_min_max(self) -> Result<Vec<Cost>, GenericError> {
        let mut reader = TokenReader::new(self)?;

        let count = reader.next_value::<usize>("value count")?;
        let values = (0..count).map(|_| reader.next_value::<Cost>("value")).collect::<Result<Vec<_>, _>>()?;

        reader.expect_end()?;

        Ok(values)
    }
}

impl MinMaxProblem for String {
    fn read_min_max(self) -> Result<Vec<Cost>, GenericError> {
        BufReader::new(self.as_bytes()).read_min_max()
    }
}

/// The minimum and the maximum of the values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MinMaxReport {
    /// A minimum value.
    pub min: Cost,
    /// A maximum value.
    pub max: Cost,
}

/// A trait to write the min max result in the text format.
pub trait MinMaxSolution<W: Write> {
    /// Writes the result as `min max`.
    fn write_min_max(&self, writer: &mut BufWriter<W>) -> Result<(), GenericError>;
}

impl<W: Write> MinMaxSolution<W> for MinMaxReport {
    fn write_min_max(&self, writer: &mut BufWriter<W>) -> Result<(), GenericError> {
        writeln!(writer, "{} {}", self.min, self.max)?;

        Ok(())
    }
}

impl From<(Cost, Cost)> for MinMaxReport {
    fn from((min, max): (Cost, Cost)) -> Self {
        Self { min, max }
    }
}
