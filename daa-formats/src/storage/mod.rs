//! Contains functionality to read programs stored on tapes and write their optimal placement.

mod reader;
pub use self::reader::{StorageInstance, StorageProblem};

mod writer;
pub use self::writer::{StorageReport, StorageSolution};
