#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::hash::{Hash, Hasher};
use thiserror::Error;

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

impl std::fmt::Display for GenericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<Box<dyn std::error::Error>> for GenericError {
    fn from(value: Box<dyn std::error::Error>) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<AlgorithmError> for GenericError {
    fn from(value: AlgorithmError) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

impl Hash for GenericError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Failures reported by the algorithmic engines. Every engine is deterministic, so the same input
/// always fails the same way.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AlgorithmError {
    /// Malformed graph or matrix shape, unknown vertex, empty input and similar.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A negative weight cycle is reachable from the source, so distances are undefined.
    #[error("negative cycle detected")]
    NegativeCycleDetected,

    /// A route was requested to a vertex which cannot be reached from the source.
    #[error("vertex {vertex} is unreachable from the source")]
    Unreachable {
        /// An index of the requested vertex.
        vertex: usize,
    },

    /// The tour cannot be extended: every remaining candidate is at infinite cost.
    #[error("instance is disconnected: no feasible extension at step {step}")]
    DisconnectedInstance {
        /// Amount of vertices committed to the path when the search got stuck.
        step: usize,
    },
}

impl AlgorithmError {
    /// Creates an `InvalidInput` error from anything convertible into a message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
