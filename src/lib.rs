//! Standard route generator library.
//!
//! Fetches the transit API's standard routes, sorts each route's track
//! circuits by sequence number, reports duplicate circuit IDs and writes the
//! result out as JSON for the static `StandardRoutes.json` file.

pub mod config;
pub mod fetch;
pub mod observability;
pub mod report;
pub mod routes;

pub use config::schema::ToolConfig;
pub use fetch::StandardRoutesClient;
pub use routes::{normalize, DuplicateCircuit, RouteSummary, StandardRoute, StandardRoutes, TrackCircuit};
