//! Error types for the `adk-ragie` crate.

use thiserror::Error;

/// Errors that can occur while retrieving from Ragie.
#[derive(Debug, Error)]
pub enum RagieError {
    /// The retriever could not be configured (e.g. no API key was found).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The Ragie service answered with a non-success status.
    #[error("Ragie API returned {status}: {message}")]
    RemoteError {
        /// The HTTP status code returned by the service.
        status: u16,
        /// The service's error detail, or the raw response body.
        message: String,
    },

    /// The request never produced a response (connection, TLS, DNS...).
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The service answered successfully but the body was not a valid retrieval.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// A convenience result type for Ragie operations.
pub type Result<T> = std::result::Result<T, RagieError>;
