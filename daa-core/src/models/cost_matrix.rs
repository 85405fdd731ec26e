#[cfg(test)]
#[path = "../../tests/unit/models/cost_matrix_test.rs"]
mod cost_matrix_test;

use crate::models::{Cost, Weight};
use crate::utils::AlgorithmError;

/// A square matrix of travel costs between vertices. The diagonal is always infinite (no
/// self travel), other cells are non-negative or infinite when there is no edge. Symmetry is
/// not assumed. The sum of all finite cells fits into `Cost`, so does every bound and tour cost
/// derived from the matrix.
///
/// Cloning produces an independent copy, so sibling search branches never share cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostMatrix {
    size: usize,
    data: Vec<Weight>,
}

impl CostMatrix {
    /// Creates a matrix from its rows, validating its shape and values.
    pub fn new(rows: Vec<Vec<Weight>>) -> Result<Self, AlgorithmError> {
        let size = rows.len();

        if size == 0 {
            return Err(AlgorithmError::invalid_input("invalid matrix: no vertices"));
        }

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(AlgorithmError::invalid_input(format!(
                "invalid matrix: row {idx} has {} values, expected {size}",
                row.len()
            )));
        }

        let data = rows.into_iter().flatten().collect::<Vec<_>>();

        for (idx, weight) in data.iter().enumerate() {
            let (row, column) = (idx / size, idx % size);

            match weight {
                Weight::Finite(_) if row == column => {
                    return Err(AlgorithmError::invalid_input(format!(
                        "invalid matrix: diagonal cell [{row}][{column}] is not infinite"
                    )));
                }
                Weight::Finite(value) if *value < 0 => {
                    return Err(AlgorithmError::invalid_input(format!(
                        "invalid matrix: cell [{row}][{column}] has negative cost {value}"
                    )));
                }
                _ => {}
            }
        }

        if data.iter().filter_map(Weight::finite).try_fold(0 as Cost, Cost::checked_add).is_none() {
            return Err(AlgorithmError::invalid_input(format!("invalid matrix: total cost exceeds {}", Cost::MAX)));
        }

        Ok(Self { size, data })
    }

    /// Creates a matrix from finite costs, values on the diagonal are ignored.
    pub fn from_costs(rows: Vec<Vec<Cost>>) -> Result<Self, AlgorithmError> {
        Self::new(
            rows.into_iter()
                .enumerate()
                .map(|(row, values)| {
                    values
                        .into_iter()
                        .enumerate()
                        .map(|(column, value)| if row == column { Weight::Infinite } else { Weight::Finite(value) })
                        .collect()
                })
                .collect(),
        )
    }

    /// Returns amount of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns a weight of the edge from `row` to `column`.
    pub fn get(&self, row: usize, column: usize) -> Weight {
        self.data[row * self.size + column]
    }

    /// Returns the row as a slice.
    pub fn row(&self, row: usize) -> &[Weight] {
        &self.data[row * self.size..(row + 1) * self.size]
    }

    /// Sets the whole row to infinity.
    pub fn mask_row(&mut self, row: usize) {
        self.data[row * self.size..(row + 1) * self.size].iter_mut().for_each(|weight| *weight = Weight::Infinite);
    }

    /// Sets the whole column to infinity.
    pub fn mask_column(&mut self, column: usize) {
        self.data.iter_mut().skip(column).step_by(self.size).for_each(|weight| *weight = Weight::Infinite);
    }

    /// Sets a single cell to infinity.
    pub fn mask_cell(&mut self, row: usize, column: usize) {
        self.data[row * self.size + column] = Weight::Infinite;
    }

    /// Reduces the matrix in place: subtracts the minimum finite value from every row, then from
    /// every column. Infinite cells stay infinite, a row or a column without finite cells is
    /// skipped. Returns the sum of all subtracted minima, a lower bound of any tour through the
    /// remaining cells.
    pub fn reduce(&mut self) -> Cost {
        let size = self.size;

        let rows: Cost = (0..size).map(|row| self.reduce_cells(|column| row * size + column)).sum();
        let columns: Cost = (0..size).map(|column| self.reduce_cells(|row| row * size + column)).sum();

        rows + columns
    }

    /// Returns the cost of the closed tour which visits vertices in the given order and returns to
    /// the first one.
    pub fn tour_cost(&self, path: &[usize]) -> Weight {
        path.iter()
            .zip(path.iter().skip(1).chain(path.first()))
            .filter(|(from, to)| from != to)
            .fold(Weight::Finite(0), |acc, (&from, &to)| acc + self.get(from, to))
    }

    fn reduce_cells<F: Fn(usize) -> usize>(&mut self, cell_index: F) -> Cost {
        let min = (0..self.size).filter_map(|idx| self.data[cell_index(idx)].finite()).min();

        match min {
            Some(min) if min != 0 => {
                (0..self.size).for_each(|idx| {
                    let cell = &mut self.data[cell_index(idx)];
                    if let Weight::Finite(value) = cell {
                        *value -= min;
                    }
                });
                min
            }
            _ => 0,
        }
    }
}
