//! Standard route data and its normalization.
//!
//! # Data Flow
//! ```text
//! API response / StandardRoutes.json
//!     → types.rs (serde model, wire names preserved)
//!     → validator.rs (count circuit IDs, sort by SeqNum, warn on duplicates)
//!     → report (pretty JSON)
//! ```
//!
//! # Design Decisions
//! - Duplicates are reported, never removed
//! - Sorting is stable so SeqNum ties keep their received order
//! - Warnings are both logged and returned for callers to inspect

pub mod types;
pub mod validator;

pub use types::{CircuitId, StandardRoute, StandardRoutes, TrackCircuit};
pub use validator::{normalize, normalize_route, DuplicateCircuit, RouteSummary};
