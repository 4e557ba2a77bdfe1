//! Normalization of the Seoul open-data station listing into directory rows.

use std::collections::HashSet;

use anyhow::{Context, Result};
use gil_transit::StationRow;
use serde_json::Value;

const SERVICE: &str = "SearchSTNBySubwayLineInfo";

// Field names drift between dataset revisions; absorb the known variants.
const NAME_KEYS: &[&str] = &["STATION_NM", "statnNm", "STATION_NAME"];
const LINE_KEYS: &[&str] = &["LINE_NUM", "subwayNm", "LINE_NAME"];
const CODE_KEYS: &[&str] = &["STATION_CD", "statnId"];
const EXTERNAL_KEYS: &[&str] = &["FR_CODE", "frCode"];

fn pick<'a>(row: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|k| row.get(*k).and_then(Value::as_str))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Unify line labels: anything carrying digits becomes "N호선" ("2", "02",
/// "2호선" all map to "2호선"); everything else ("신분당선", "경의중앙선")
/// passes through trimmed.
pub fn normalize_line(raw: &str) -> Option<String> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    match s.find(|c: char| c.is_ascii_digit()) {
        Some(i) => {
            let digits: String = s[i..].chars().take_while(|c| c.is_ascii_digit()).collect();
            let n: u32 = digits.parse().ok()?;
            Some(format!("{n}호선"))
        }
        None => Some(s.to_owned()),
    }
}

/// Extract directory rows from a raw API response: skip rows without a
/// usable name or line, drop duplicate (name, line) pairs, sort by name
/// then line.
pub fn rows_from_response(response: &Value) -> Result<Vec<StationRow>> {
    let root = response
        .get(SERVICE)
        .with_context(|| format!("response carries no {SERVICE} object (check key/URL)"))?;
    let raw_rows = root
        .get("row")
        .and_then(Value::as_array)
        .context("response carries no rows (check key quota/service status)")?;

    let mut rows = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for raw in raw_rows {
        let Some(name) = pick(raw, NAME_KEYS) else {
            continue;
        };
        let Some(line) = pick(raw, LINE_KEYS).and_then(normalize_line) else {
            continue;
        };

        if !seen.insert((name.to_owned(), line.clone())) {
            continue;
        }

        let mut row = StationRow::new(
            pick(raw, CODE_KEYS).unwrap_or(name),
            name,
            line,
        );
        row.station_code = pick(raw, CODE_KEYS).map(str::to_owned);
        row.external_code = pick(raw, EXTERNAL_KEYS).map(str::to_owned);
        rows.push(row);
    }

    rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.line.cmp(&b.line)));
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_line_variants() {
        assert_eq!(normalize_line("2호선").as_deref(), Some("2호선"));
        assert_eq!(normalize_line("2").as_deref(), Some("2호선"));
        assert_eq!(normalize_line("02").as_deref(), Some("2호선"));
        assert_eq!(normalize_line("신분당선").as_deref(), Some("신분당선"));
        assert_eq!(normalize_line("  "), None);
    }

    #[test]
    fn test_rows_are_deduplicated_and_sorted() {
        let response = json!({
            "SearchSTNBySubwayLineInfo": {
                "row": [
                    { "STATION_NM": "잠실", "LINE_NUM": "02호선", "STATION_CD": "0216" },
                    { "STATION_NM": "강남", "LINE_NUM": "2호선", "STATION_CD": "0222", "FR_CODE": "222" },
                    { "STATION_NM": "잠실", "LINE_NUM": "2", "STATION_CD": "0216" },
                    { "STATION_NM": "잠실", "LINE_NUM": "8호선" },
                    { "STATION_NM": "", "LINE_NUM": "2호선" },
                    { "LINE_NUM": "2호선" }
                ]
            }
        });

        let rows = rows_from_response(&response).unwrap();
        let pairs: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.name.as_str(), r.line.as_str()))
            .collect();

        assert_eq!(
            pairs,
            vec![("강남", "2호선"), ("잠실", "2호선"), ("잠실", "8호선")]
        );
        assert_eq!(rows[0].external_code.as_deref(), Some("222"));
    }

    #[test]
    fn test_missing_service_object_is_an_error() {
        assert!(rows_from_response(&json!({ "RESULT": {} })).is_err());
    }
}
