//! # gil-transit
//!
//! Station directory and search for the gil transit navigation app.
//!
//! ## Features
//!
//! - **Static directory**: the full station listing held in memory, loaded
//!   once from a JSON dataset
//! - **Autocomplete**: normalized matching with prefix-over-substring
//!   ranking and per-station line grouping
//! - **Typed identifiers**: cheap `Arc<str>` newtypes for stations, routes,
//!   and favorites
//!
//! ## Example
//!
//! ```
//! use gil_transit::prelude::*;
//!
//! let directory = StationDirectory::from_rows(vec![
//!     StationRow::new("1", "강남역", "2호선"),
//!     StationRow::new("2", "강남역", "신분당선"),
//!     StationRow::new("3", "잠실역", "2호선"),
//! ]);
//!
//! // "강남" and "강남역" normalize to the same query.
//! let suggestions = directory.suggest_default("강남역");
//! assert_eq!(suggestions.len(), 1);
//! assert_eq!(suggestions[0].name, "강남역");
//! assert_eq!(suggestions[0].lines, vec!["2호선", "신분당선"]);
//! ```

pub mod directory;
pub mod identifiers;
pub mod models;
pub mod search;

// Re-exports for convenience
pub mod prelude {
    pub use crate::directory::StationDirectory;
    pub use crate::identifiers::*;
    pub use crate::models::{Station, StationRow, TransitError};
    pub use crate::search::{normalize, rank_stations, StationSuggestion, DEFAULT_SUGGESTION_LIMIT};
}

pub use prelude::*;
