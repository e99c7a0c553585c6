//! Error types for algotrace.
//!
//! The algorithm engines themselves never fail: they either return a
//! well-formed trace or their input violated a construction precondition.
//! Errors only surface at the edges: validating graph constructors, hash
//! table inserts and runner configuration.

use thiserror::Error;

/// Errors raised by the validating graph and network constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint is not a valid vertex index.
    #[error("Vertex index {index} out of range for graph with {vexnum} vertices")]
    VertexOutOfRange { index: usize, vexnum: usize },

    /// The label array does not match the declared vertex count.
    #[error("Expected {expected} vertex labels, got {actual}")]
    LabelCountMismatch { expected: usize, actual: usize },
}

impl GraphError {
    /// Create an out-of-range error.
    pub fn out_of_range(index: usize, vexnum: usize) -> Self {
        Self::VertexOutOfRange { index, vexnum }
    }
}

/// Errors raised while building a hash table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Every slot of a linear-probing table is occupied.
    #[error("Table full: cannot place key {key} in {slots} slots")]
    TableFull { key: i64, slots: usize },

    /// The hash modulus must be in `1..=slots`.
    #[error("Invalid modulus {modulus} for table with {slots} slots")]
    InvalidModulus { modulus: usize, slots: usize },
}

/// Errors raised while reading runner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be parsed.
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: String, value: String },

    /// The requested algorithm name is not known.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl ConfigError {
    /// Create an invalid value error.
    pub fn invalid(var: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            var: var.into(),
            value: value.into(),
        }
    }
}
