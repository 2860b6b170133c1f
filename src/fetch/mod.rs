//! Standard routes fetching.
//!
//! # Data Flow
//! ```text
//! SourceConfig (URL, API key, header name)
//!     → client.rs (one authenticated GET)
//!     → status check, body → StandardRoutes
//! ```
//!
//! # Constraints
//! - Exactly one request per run, no retries
//! - Never log the API key

pub mod client;
pub mod types;

pub use client::StandardRoutesClient;
pub use types::{FetchError, FetchResult};
