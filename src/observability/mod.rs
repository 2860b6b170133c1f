//! Observability.
//!
//! # Data Flow
//! ```text
//! fetch / routes / report
//!     → tracing events with structured fields
//!     → logging.rs subscriber (stderr)
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr; stdout is reserved for the JSON report
//! - Level controlled by RUST_LOG, `--verbose` raises the default

pub mod logging;
