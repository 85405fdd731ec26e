//! Contains functionality to read a TSP instance and write its tour.

mod reader;
pub use self::reader::{TspInstance, TspProblem};

mod writer;
pub use self::writer::{TspSolution, write_tsp_instance};
