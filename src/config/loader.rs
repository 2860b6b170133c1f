//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ToolConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from a TOML file, or defaults when no path is given.
///
/// The result is not validated yet; CLI overrides are applied first.
pub fn load_config(path: Option<&Path>) -> Result<ToolConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(ToolConfig::default());
    };

    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ToolConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    tracing::debug!(path = %path.display(), "Configuration file loaded");
    Ok(config)
}

/// Run semantic validation, handing the config back on success.
pub fn validated(config: ToolConfig) -> Result<ToolConfig, ConfigError> {
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
