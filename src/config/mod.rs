//! Configuration management.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI flags / environment overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → ToolConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty or partial file is valid
//! - Validation separates syntactic (serde) from semantic checks
//! - Validation runs after overrides so flags are checked too

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{OutputConfig, SourceConfig, ToolConfig};
pub use validation::{validate_config, ValidationError};
