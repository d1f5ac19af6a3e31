//! Error types for building, running, and configuring a network.

use thiserror::Error;

/// Errors returned by the public network API.
///
/// Build and forward failures are fatal to the call that raised them: no
/// partial graph is returned and no node state is touched.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Invalid network configuration: {message}")]
    Config { message: String },

    #[error("Shape mismatch: expected {expected} inputs, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Unknown activation: {0}")]
    UnknownActivation(String),

    #[error("Unknown regularization: {0}")]
    UnknownRegularization(String),

    #[error("Unknown input feature: {0}")]
    UnknownInputFeature(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NetworkError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        NetworkError::Config { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, NetworkError>;
