#[cfg(test)]
#[path = "../../tests/unit/storage/writer_test.rs"]
mod writer_test;

use super::StorageInstance;
use daa_core::algorithms::storage::{Program, TapeStorage, mean_retrieval_time};
use daa_core::models::Cost;
use daa_core::prelude::GenericError;
use serde::Serialize;
use std::io::{BufWriter, Write};

/// Programs placed optimally on tapes together with the mean retrieval time of the input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageReport {
    /// The mean retrieval time when programs are read in input order.
    pub mean_retrieval_time: Cost,
    /// Programs in input order.
    pub programs: Vec<Program>,
    /// Programs placed on tapes.
    pub storage: TapeStorage,
    /// The mean retrieval time of every tape read on its own, empty tapes have none.
    pub tape_retrieval_times: Vec<Option<Cost>>,
}

impl StorageReport {
    /// Places programs of the instance optimally.
    pub fn new(instance: &StorageInstance) -> Result<Self, GenericError> {
        let programs = instance.programs.as_slice();
        let storage = TapeStorage::optimal(programs, instance.tape_count)?;

        Ok(Self {
            mean_retrieval_time: mean_retrieval_time(programs)?,
            programs: programs.to_vec(),
            tape_retrieval_times: storage.tape_retrieval_times()?,
            storage,
        })
    }
}

/// A trait to write the storage report in the text format.
pub trait StorageSolution<W: Write> {
    /// Writes the mean retrieval time, programs in input order, programs in placement order and
    /// the tape table.
    fn write_storage(&self, writer: &mut BufWriter<W>) -> Result<(), GenericError>;
}

impl<W: Write> StorageSolution<W> for StorageReport {
    fn write_storage(&self, writer: &mut BufWriter<W>) -> Result<(), GenericError> {
        let programs = |programs: &[Program]| {
            programs.iter().map(|program| format!("{{{},{}}}", program.name, program.length)).collect::<Vec<_>>().join(" ")
        };

        write!(writer, "\n{}", self.mean_retrieval_time)?;
        write!(writer, "\n\n{}", programs(self.programs.as_slice()))?;
        write!(writer, "\n\n{}", programs(self.storage.order()))?;

        write!(writer, "\n\ntp")?;
        (1..=self.storage.tape_count()).try_for_each(|tape| write!(writer, "\t{tape}"))?;

        for row in self.storage.rows() {
            let names = row.iter().map(|program| program.name.as_str()).collect::<Vec<_>>().join("\t");
            write!(writer, "\n\t{names}")?;
        }

        writeln!(writer)?;

        Ok(())
    }
}
