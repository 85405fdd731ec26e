//! This module reimports commonly used types.

pub use crate::algorithms::search::min_max;
pub use crate::algorithms::shortest_path::{ConvergenceStatus, ShortestPathEngine, ShortestPaths, bellman_ford};
pub use crate::algorithms::sorting::merge_sort_by_key;
pub use crate::algorithms::storage::{Program, TapeStorage, mean_retrieval_time};
pub use crate::algorithms::tsp::{Tour, TspBranchAndBound, TspStrategy, root_bound, solve_brute_force, solve_tsp};

pub use crate::models::{Cost, CostMatrix, Edge, Graph, GraphBuilder, Weight};

pub use crate::utils::{AlgorithmError, GenericError, InfoLogger, Telemetry, TelemetryMode};
