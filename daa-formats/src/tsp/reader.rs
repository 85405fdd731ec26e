#[cfg(test)]
#[path = "../../tests/unit/tsp/reader_test.rs"]
mod reader_test;

use crate::common::TokenReader;
use daa_core::models::{CostMatrix, Weight};
use daa_core::prelude::GenericError;
use std::io::{BufReader, Read};

/// A TSP instance: a cost matrix and a zero-based index of the source vertex.
#[derive(Clone, Debug)]
pub struct TspInstance {
    /// A cost matrix.
    pub matrix: CostMatrix,
    /// A zero-based index of the source vertex.
    pub source: usize,
}

/// A trait to read a TSP instance. The input is the amount of vertices `n`, then the matrix given
/// row by row either without its diagonal (`n * (n - 1)` values) or in full (`n * n` values, the
/// diagonal is ignored), then a 1-based source vertex. A `-` value marks a missing edge.
pub trait TspProblem {
    /// Reads a TSP instance.
    fn read_tsp(self) -> Result<TspInstance, GenericError>;
}

impl<R: Read> TspProblem for BufReader<R> {
    fn read_tsp(self) -> Result<TspInstance, GenericError> {
        read_tsp_instance(TokenReader::new(self)?)
    }
}

impl TspProblem for String {
    fn read_tsp(self) -> Result<TspInstance, GenericError> {
        BufReader::new(self.as_bytes()).read_tsp()
    }
}

fn read_tsp_instance(mut reader: TokenReader) -> Result<TspInstance, GenericError> {
    let size = reader.next_value::<usize>("vertex count")?;
    if size == 0 {
        return Err("vertex count should be positive".into());
    }

    let (full, off_diagonal) = size
        .checked_mul(size)
        .and_then(|full| full.checked_add(1))
        .map(|full| (full, full - size))
        .ok_or_else(|| GenericError::from(format!("vertex count {size} is too large")))?;

    let has_diagonal = match reader.remaining() {
        remaining if remaining == full => true,
        remaining if remaining == off_diagonal => false,
        remaining => {
            return Err(format!(
                "expecting {} or {} weights followed by a source vertex, got {remaining} values",
                off_diagonal - 1,
                full - 1
            )
            .into());
        }
    };

    let rows = (0..size)
        .map(|row| {
            (0..size)
                .map(|column| match (row == column, has_diagonal) {
                    (true, true) => reader.next_token("diagonal weight").map(|_| Weight::Infinite),
                    (true, false) => Ok(Weight::Infinite),
                    (false, _) => reader.next_weight("weight"),
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let source = reader.next_value::<usize>("source vertex")?;
    if source == 0 || source > size {
        return Err(format!("source vertex should be in [1, {size}], got {source}").into());
    }

    reader.expect_end()?;

    let matrix = CostMatrix::new(rows)?;

    Ok(TspInstance { matrix, source: source - 1 })
}
