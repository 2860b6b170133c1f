//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Endpoint serving the standard routes payload.
pub const DEFAULT_URL: &str = "https://api.wmata.com/TrainPositions/StandardRoutes?contentType=json";

/// Header carrying the API key.
pub const DEFAULT_API_KEY_HEADER: &str = "api_key";

/// Placeholder shipped in sample configs; never a real key.
pub const PLACEHOLDER_API_KEY: &str = "MY_API_KEY";

/// Root configuration for the tool.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ToolConfig {
    /// Where the routes are fetched from.
    pub source: SourceConfig,

    /// Where the report goes.
    pub output: OutputConfig,
}

/// Upstream API settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Full endpoint URL, query string included.
    pub url: String,

    /// API key sent with the request.
    pub api_key: String,

    /// Name of the header carrying the key.
    pub api_key_header: String,

    /// Request timeout in seconds. None waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            api_key: String::new(),
            api_key_header: DEFAULT_API_KEY_HEADER.to_string(),
            timeout_secs: None,
        }
    }
}

/// Report destination.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// File to write the JSON to. None writes to stdout.
    pub path: Option<PathBuf>,
}
