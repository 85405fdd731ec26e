//! Core crate contains the engines of a few classic algorithms:
//!
//! - **TSP branch-and-bound** on a reduced cost matrix, as a bound guided descent or as an
//!   exhaustive best-first search
//! - **Bellman-Ford** shortest paths with negative cycle detection
//! - divide-and-conquer **min/max**, **merge sort** and **optimal tape storage**
//!
//! Engines are pure: they take a fully materialized graph or matrix, own their working copies
//! and return a fresh result. Reading and writing of the problem formats lives in other crates.
//!
//! # Examples
//!
//! ```
//! use daa_core::prelude::*;
//!
//! let matrix = CostMatrix::from_costs(vec![
//!     vec![0, 20, 30, 10, 11],
//!     vec![15, 0, 16, 4, 2],
//!     vec![3, 5, 0, 2, 4],
//!     vec![19, 6, 18, 0, 3],
//!     vec![16, 4, 7, 16, 0],
//! ])?;
//!
//! let tour = solve_tsp(&matrix, 0)?;
//!
//! assert_eq!(tour.cost, 28);
//! assert_eq!(tour.path, vec![0, 3, 1, 4, 2]);
//! # Ok::<(), AlgorithmError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod utils;
