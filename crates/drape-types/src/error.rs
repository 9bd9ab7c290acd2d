//! Error types for the Drape workspace.
//!
//! All crates return `DrapeResult<T>` from fallible operations.
//! Degenerate geometry during a substep is not an error; the solver
//! reports it through its step outcome instead.

use thiserror::Error;

/// Unified error type for the Drape workspace.
#[derive(Debug, Error)]
pub enum DrapeError {
    /// Grid dimensions or spacings cannot produce a valid cloth.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, DrapeError>`.
pub type DrapeResult<T> = Result<T, DrapeError>;
