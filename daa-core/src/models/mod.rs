//! A collection of models to represent graphs, cost matrices and weights.

mod cost_matrix;
pub use self::cost_matrix::CostMatrix;

mod graph;
pub use self::graph::{Edge, Graph, GraphBuilder};

mod weight;
pub use self::weight::{Cost, Weight};
