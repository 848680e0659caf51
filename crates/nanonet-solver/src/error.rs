//! Error types for nanonet-solver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The ground-eliminated system is not invertible, typically because
    /// the network is disconnected between a source and ground or the
    /// ground/source configuration is degenerate.
    #[error("singular matrix")]
    SingularMatrix,

    #[error("invalid matrix dimensions: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Config(#[from] nanonet_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
