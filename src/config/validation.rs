//! Configuration validation.
//!
//! # Responsibilities
//! - Check the endpoint is an absolute http(s) URL
//! - Reject missing or placeholder API keys
//! - Validate header name and timeout range
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ToolConfig → Result<(), Vec<ValidationError>>

use reqwest::header::HeaderName;
use thiserror::Error;
use url::Url;

use crate::config::schema::{ToolConfig, PLACEHOLDER_API_KEY};

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("source.url '{url}' is invalid: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("source.api_key is empty (use --key or WMATA_API_KEY)")]
    MissingApiKey,

    #[error("source.api_key is still the {} placeholder", PLACEHOLDER_API_KEY)]
    PlaceholderApiKey,

    #[error("source.api_key_header '{0}' is not a valid header name")]
    InvalidHeaderName(String),

    #[error("source.timeout_secs must be greater than 0")]
    ZeroTimeout,
}

/// Validate a configuration that is about to be used for a fetch.
pub fn validate_config(config: &ToolConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let source = &config.source;

    match Url::parse(&source.url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidUrl {
            url: source.url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidUrl {
            url: source.url.clone(),
            reason: e.to_string(),
        }),
    }

    let key = source.api_key.trim();
    if key.is_empty() {
        errors.push(ValidationError::MissingApiKey);
    } else if key == PLACEHOLDER_API_KEY {
        errors.push(ValidationError::PlaceholderApiKey);
    }

    if HeaderName::from_bytes(source.api_key_header.as_bytes()).is_err() {
        errors.push(ValidationError::InvalidHeaderName(source.api_key_header.clone()));
    }

    if source.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
