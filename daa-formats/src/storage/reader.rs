#[cfg(test)]
#[path = "../../tests/unit/storage/reader_test.rs"]
mod reader_test;

use crate::common::TokenReader;
use daa_core::algorithms::storage::Program;
use daa_core::models::Cost;
use daa_core::prelude::GenericError;
use std::io::{BufReader, Read};

/// Programs with the amount of tapes to store them on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageInstance {
    /// Programs in input order.
    pub programs: Vec<Program>,
    /// Amount of tapes.
    pub tape_count: usize,
}

/// A trait to read a storage problem: program and tape counts followed by `name length` pairs.
pub trait StorageProblem {
    /// Reads a storage problem.
    fn read_storage(self) -> Result<StorageInstance, GenericError>;
}

impl<R: Read> StorageProblem for BufReader<R> {
    fn read_storage(self) -> Result<StorageInstance, GenericError> {
        let mut reader = TokenReader::new(self)?;

        let count = reader.next_value::<usize>("program count")?;
        let tape_count = reader.next_value::<usize>("tape count")?;

        let programs = (0..count)
            .map(|_| {
                let name = reader.next_token("program name")?;
                let length = reader.next_value::<Cost>("program length")?;

                Ok(Program { name, length })
            })
            .collect::<Result<Vec<_>, GenericError>>()?;

        reader.expect_end()?;

        Ok(StorageInstance { programs, tape_count })
    }
}

impl StorageProblem for String {
    fn read_storage(self) -> Result<StorageInstance, GenericError> {
        BufReader::new(self.as_bytes()).read_storage()
    }
}
