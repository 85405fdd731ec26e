//! A command line interface to the classroom algorithms: TSP branch-and-bound, Bellman-Ford
//! shortest paths, min/max search and optimal tape storage.
//!
//! The binary reads problems in their plain text formats, see `daa-formats` crate, and writes
//! results as text or JSON. This library exposes the pieces the binary is built from.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

pub use daa_core as core;
pub use daa_formats as formats;

pub mod extensions;
