//! In-memory station directory backed by a static dataset.
//!
//! The dataset is a JSON array of [`StationRow`] records, one per
//! (station, line) pair, as produced by the `seoul-stations` importer.

use std::collections::BTreeSet;

use crate::models::{Result, Station, StationRow, TransitError};
use crate::search::{rank_stations, StationSuggestion, DEFAULT_SUGGESTION_LIMIT};

#[derive(Clone, Debug, Default)]
pub struct StationDirectory {
    rows: Vec<StationRow>,
}

impl StationDirectory {
    pub fn from_rows(rows: Vec<StationRow>) -> Self {
        Self { rows }
    }

    /// Parse a directory from its JSON dataset.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let rows: Vec<StationRow> = serde_json::from_slice(bytes)
            .map_err(|e| TransitError::InvalidData(format!("station dataset: {e}")))?;
        Ok(Self::from_rows(rows))
    }

    pub fn rows(&self) -> &[StationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Exact-name lookup, grouping every line serving the station.
    pub fn station(&self, name: &str) -> Option<Station> {
        let lines: BTreeSet<String> = self
            .rows
            .iter()
            .filter(|row| row.name == name)
            .map(|row| row.line.clone())
            .collect();

        if lines.is_empty() {
            return None;
        }

        Some(Station {
            name: name.to_owned(),
            lines: lines.into_iter().collect(),
        })
    }

    /// Ranked, grouped autocomplete suggestions for a user query.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<StationSuggestion> {
        rank_stations(&self.rows, query, limit)
    }

    /// [`Self::suggest`] with the default cap.
    pub fn suggest_default(&self, query: &str) -> Vec<StationSuggestion> {
        self.suggest(query, DEFAULT_SUGGESTION_LIMIT)
    }
}
