//! Error types for input preparation

use ripsprep_core::RipsError;
use std::path::PathBuf;

/// Errors that abort a preparation run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Named input could not be opened
    #[error("couldn't open file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from an opened source failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the core definitions (binary headers, short reads)
    #[error("{0}")]
    Core(#[from] RipsError),

    /// Token that is neither a number nor a non-finite spelling
    #[error("line {line}: invalid numeric token {token:?}")]
    InvalidToken { line: usize, token: String },

    /// Point whose dimension differs from the first point
    #[error("line {line}: point has dimension {found}, expected {expected}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Edge-list line without two vertex indices and a weight
    #[error("line {line}: malformed edge, expected `i j weight`")]
    MalformedEdge { line: usize },

    /// Full matrix whose upper half disagrees with its lower half
    #[error("distance matrix is not symmetric at ({row}, {col})")]
    Asymmetric { row: usize, col: usize },

    /// Configuration could not be loaded
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for preparation operations
pub type Result<T> = std::result::Result<T, Error>;
