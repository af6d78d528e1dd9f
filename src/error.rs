//! Error types for the network engine.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors surfaced by [`Network`](crate::Network) operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// A vector's length does not match the fixed topology
    #[error("Dimension mismatch for {vector}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Which argument was rejected (`"inputs"`, `"target"`, ...)
        vector: &'static str,
        /// Length required by the topology
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// `query`/`train` called before `initialize`
    #[error("Network weights are not initialized")]
    NotInitialized,

    /// A layer size of zero
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    /// Learning rate that is not strictly positive and finite
    #[error("Invalid learning rate: {0}")]
    InvalidLearningRate(f64),

    /// Initialization bound that is negative or not finite
    #[error("Invalid initialization limit: {0}")]
    InvalidInitLimit(f64),
}
