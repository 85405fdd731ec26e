//! Contains functionality to read a directed graph with a source vertex and write the shortest
//! paths found from it.

mod reader;
pub use self::reader::{ShortestPathInstance, ShortestPathProblem};

mod report;
pub use self::report::{ShortestPathReport, VertexReport};

mod writer;
pub use self::writer::{ShortestPathSolution, write_graph};
