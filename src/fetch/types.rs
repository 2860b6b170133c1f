//! Fetch error definitions.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while fetching the standard routes.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS or body transfer failed.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The body was not a valid standard routes payload.
    #[error("Malformed response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The API key or header name cannot be sent as an HTTP header.
    #[error("Invalid API key header: {0}")]
    InvalidHeader(String),
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
