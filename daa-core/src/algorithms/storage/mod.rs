//! Placement of programs on sequential access tapes so that the mean retrieval time is small.
//!
//! Reading a program from a tape requires reading every program stored before it, so the
//! retrieval time of a program is the sum of lengths up to and including it. Storing shorter
//! programs first minimizes the mean of these sums.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/storage/storage_test.rs"]
mod storage_test;

use crate::algorithms::sorting::merge_sort_by_key;
use crate::models::Cost;
use crate::utils::AlgorithmError;
use serde::Serialize;

/// A program with its identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Program {
    /// A program name.
    pub name: String,
    /// A program length.
    pub length: Cost,
}

impl Program {
    /// Creates a new instance of `Program`.
    pub fn new(name: &str, length: Cost) -> Self {
        Self { name: name.to_string(), length }
    }
}

/// Returns the mean retrieval time of the programs read one after another in the given order.
/// The total is divided by the amount of programs using integer division.
pub fn mean_retrieval_time(programs: &[Program]) -> Result<Cost, AlgorithmError> {
    if programs.is_empty() {
        return Err(AlgorithmError::invalid_input("cannot get mean retrieval time of no programs"));
    }

    programs
        .iter()
        .try_fold((0 as Cost, 0 as Cost), |(prefix, total), program| {
            let prefix = prefix.checked_add(program.length)?;
            Some((prefix, total.checked_add(prefix)?))
        })
        .map(|(_, total)| total / programs.len() as Cost)
        .ok_or_else(|| AlgorithmError::invalid_input(format!("total retrieval time exceeds {}", Cost::MAX)))
}

/// Programs distributed over tapes: the program `k` of the placement order is stored on the tape
/// `k % tape_count` at the position `k / tape_count`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TapeStorage {
    order: Vec<Program>,
    tapes: Vec<Vec<Program>>,
}

impl TapeStorage {
    /// Sorts programs by their length (keeping the input order of equal lengths) and stores
    /// them round robin.
    pub fn optimal(programs: &[Program], tape_count: usize) -> Result<Self, AlgorithmError> {
        let mut order = programs.to_vec();
        merge_sort_by_key(order.as_mut_slice(), |program| program.length);

        Self::store(order, tape_count)
    }

    /// Returns programs in placement order.
    pub fn order(&self) -> &[Program] {
        self.order.as_slice()
    }

    /// Returns tapes with their programs from the start of a tape.
    pub fn tapes(&self) -> &[Vec<Program>] {
        self.tapes.as_slice()
    }

    /// Returns amount of tapes.
    pub fn tape_count(&self) -> usize {
        self.tapes.len()
    }

    /// Returns programs grouped by their position on tapes: the row `i` holds the `i`-th program
    /// of every tape which has one.
    pub fn rows(&self) -> Vec<Vec<&Program>> {
        self.order.chunks(self.tape_count()).map(|row| row.iter().collect()).collect()
    }

    /// Returns the mean retrieval time of every tape read separately, `None` for an empty tape.
    pub fn tape_retrieval_times(&self) -> Result<Vec<Option<Cost>>, AlgorithmError> {
        self.tapes
            .iter()
            .map(|tape| if tape.is_empty() { Ok(None) } else { mean_retrieval_time(tape.as_slice()).map(Some) })
            .collect()
    }

    fn store(order: Vec<Program>, tape_count: usize) -> Result<Self, AlgorithmError> {
        if tape_count == 0 {
            return Err(AlgorithmError::invalid_input("cannot store programs without tapes"));
        }

        let tapes = order.iter().enumerate().fold(vec![Vec::new(); tape_count], |mut tapes, (idx, program)| {
            tapes[idx % tape_count].push(program.clone());
            tapes
        });

        Ok(Self { order, tapes })
    }
}
