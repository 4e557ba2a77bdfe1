//! Route aggregation, search, and favorites for the gil transit app.
//!
//! The route-search backend computes the actual paths; this crate turns its
//! per-objective results into display-ready, deduplicated route cards and
//! manages the locally persisted favorites list.

pub mod favorites;
pub mod route;
pub mod search;

// Re-export the station directory from the transit crate
pub use gil_transit as transit;
