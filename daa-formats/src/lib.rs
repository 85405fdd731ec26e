//! Formats crate contains logic to read problems of the classroom algorithms from their plain text
//! formats and to write results back as text or JSON.
//!
//!
//! # Supported formats
//!
//! - **tsp**: vertex count, cost matrix without its diagonal (or a full one) and a 1-based source
//! - **shortest path**: vertex and edge counts, vertex names and `source destination weight` edges
//! - **min max**: value count and values
//! - **storage**: program and tape counts and `name length` programs
//!
//! Every reader is whitespace token based, so line breaks are not significant.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/known_problems_test.rs"]
mod known_problems_test;

pub use daa_core as core;

pub mod common;
pub mod min_max;
pub mod shortest_path;
pub mod storage;
pub mod tsp;
