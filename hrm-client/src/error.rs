//! Client error types

use thiserror::Error;

/// Client error type
///
/// Non-2xx responses are mapped by status class; the attached string
/// is the server-provided error message when one could be parsed.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rejected input (400) or business-rule refusal (422)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate resource (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Server-side failure
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
