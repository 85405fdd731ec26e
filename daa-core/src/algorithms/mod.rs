//! A collection of classic algorithms which operate on the models of this crate only.

pub mod search;
pub mod shortest_path;
pub mod sorting;
pub mod storage;
pub mod tsp;
