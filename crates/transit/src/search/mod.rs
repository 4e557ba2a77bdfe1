//! Station-name normalization and autocomplete ranking.
//!
//! Matches user input against the station directory: prefix matches rank
//! above substring matches, shorter names above longer ones, and rows that
//! share a station name collapse into one suggestion carrying every line.

use std::collections::HashMap;

use crate::models::StationRow;

/// Default cap on the number of returned suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 20;

/// A grouped autocomplete suggestion: one station name with every line
/// label the directory lists for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationSuggestion {
    pub name: String,
    /// Deduplicated, sorted line labels.
    pub lines: Vec<String>,
}

/// Normalize a station name or query for matching.
///
/// Trims, lowercases, removes all internal whitespace, and strips one
/// trailing "역" or "station" suffix so that "강남역" and "강남" compare equal.
pub fn normalize(input: &str) -> String {
    let flat: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    if let Some(stripped) = flat.strip_suffix('역') {
        stripped.to_owned()
    } else if let Some(stripped) = flat.strip_suffix("station") {
        stripped.to_owned()
    } else {
        flat
    }
}

/// Score a directory name against a normalized query.
///
/// Prefix match scores 0; a substring match at byte offset `i` scores
/// `10 + i`, so every prefix match ranks ahead of every substring match.
/// Non-matches return `None`.
fn match_score(name: &str, query: &str) -> Option<usize> {
    match normalize(name).find(query) {
        Some(0) => Some(0),
        Some(idx) => Some(10 + idx),
        None => None,
    }
}

/// Rank directory rows against a query and group them by station name.
///
/// Uses the same merge-by-key-then-accumulate pattern as route aggregation:
/// the first row seen for a name creates the suggestion, later rows only
/// contribute their line label (and may improve the group's score).
pub fn rank_stations(rows: &[StationRow], query: &str, limit: usize) -> Vec<StationSuggestion> {
    let query = normalize(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(&StationRow, usize)> = rows
        .iter()
        .filter_map(|row| match_score(&row.name, &query).map(|score| (row, score)))
        .collect();

    scored.sort_by(|a, b| {
        a.1.cmp(&b.1)
            .then_with(|| a.0.name.chars().count().cmp(&b.0.name.chars().count()))
    });

    let mut groups: Vec<(String, usize, Vec<String>)> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for (row, score) in scored {
        match index_by_name.get(row.name.as_str()) {
            Some(&i) => {
                let group = &mut groups[i];
                if score < group.1 {
                    group.1 = score;
                }
                if !row.line.is_empty() && !group.2.contains(&row.line) {
                    group.2.push(row.line.clone());
                }
            }
            None => {
                index_by_name.insert(row.name.clone(), groups.len());
                let lines = if row.line.is_empty() {
                    Vec::new()
                } else {
                    vec![row.line.clone()]
                };
                groups.push((row.name.clone(), score, lines));
            }
        }
    }

    groups.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    groups.truncate(limit);

    groups
        .into_iter()
        .map(|(name, _, mut lines)| {
            lines.sort();
            StationSuggestion { name, lines }
        })
        .collect()
}
