//! Error types for the transport adapter

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsumerError {
    /// Connection, timeout or TLS failure reported by the HTTP client
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Invalid arguments for '{operation}': {message}")]
    InvalidArgument { operation: String, message: String },
}
