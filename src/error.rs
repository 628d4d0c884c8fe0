//! Error types for genoscore

use thiserror::Error;

/// Errors that can occur during genoscore operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The request body could not be decoded.
    #[error("{0}")]
    MalformedRequest(#[from] serde_json::Error),

    /// Configuration could not be loaded or failed validation.
    #[error("{0}")]
    Config(String),
}
