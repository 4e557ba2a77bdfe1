//! Station directory data model.

pub mod types;

pub use types::{Result, Station, StationRow, TransitError};
