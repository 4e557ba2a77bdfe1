//! Core data types for the station directory.

use serde::{Deserialize, Serialize};

use crate::identifiers::StationIdentifier;

/// One record of the station directory dataset.
///
/// The directory lists a station once per line it serves, so the same
/// `name` may appear on several rows with different `line` values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRow {
    pub id: StationIdentifier,
    pub name: String,
    pub line: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
}

impl StationRow {
    pub fn new(id: impl Into<StationIdentifier>, name: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            line: line.into(),
            station_code: None,
            external_code: None,
        }
    }
}

/// Grouped view of a station: one name with every line serving it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    /// Deduplicated, deterministically sorted line labels.
    pub lines: Vec<String>,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, TransitError>;
