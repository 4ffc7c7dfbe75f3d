//! Normalization of raw payloads into [`PlayerRecord`]s
//!
//! Both payload shapes go through here exactly once: the nested JSON
//! objects of `/api/search` and the flat CSV rows of `/api/export`.
//! Every lookup has an empty default, so the mapping never fails on a
//! missing key.

use std::collections::HashMap;
use log::{debug, warn};
use serde_json::Value as JsonValue;

use crate::core::record::{PlayerRecord, Ratings, SearchResult};

/// CSV column names used by the export endpoint
pub mod columns {
    pub const NAME: &str = "name";
    pub const MEMBER_ID: &str = "memberId";
    pub const STATE: &str = "state";
    pub const RATING_REGULAR: &str = "rating_regular";
    pub const RATING_QUICK: &str = "rating_quick";
    pub const RATING_BLITZ: &str = "rating_blitz";
    pub const EXPIRATION_DATE: &str = "expiration_date";
}

/// Collapse embedded line breaks to single spaces and trim
///
/// Applied to every display field, not only names: a stray newline
/// anywhere would split a table row over several lines.
pub fn clean_text(raw: &str) -> String {
    raw.replace("\r\n", " ")
        .replace(|c: char| c == '\n' || c == '\r', " ")
        .trim()
        .to_string()
}

/// Trim a field, mapping blank text to `None`
fn non_blank(raw: &str) -> Option<String> {
    let cleaned = clean_text(raw);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Text of a scalar JSON value; objects, arrays and null have none
fn scalar_text(value: Option<&JsonValue>) -> Option<String> {
    match value? {
        JsonValue::String(s) => non_blank(s),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}

/// Map one JSON player object into a record
///
/// A non-object value yields a record with every field empty.
pub fn record_from_json(value: &JsonValue) -> PlayerRecord {
    let name = scalar_text(value.get("name")).unwrap_or_default();

    let member_id = scalar_text(value.get("memberId"))
        .or_else(|| scalar_text(value.get("uscf_id")))
        .unwrap_or_default();

    let ratings = match value.get("ratings").and_then(JsonValue::as_object) {
        Some(map) => Ratings {
            regular: scalar_text(map.get("regular")),
            quick: scalar_text(map.get("quick")),
            blitz: scalar_text(map.get("blitz")),
        },
        None => Ratings::default(),
    };

    PlayerRecord::new(
        name,
        member_id,
        scalar_text(value.get("state")),
        ratings,
        scalar_text(value.get("expiration_date")),
    )
}

/// Map a decoded `/api/search` body into a [`SearchResult`]
///
/// Returns `None` when the top level is not a JSON object. A missing
/// `players` array gives an empty result and a missing `count` falls
/// back to the number of players.
pub fn search_result_from_json(body: &JsonValue) -> Option<SearchResult> {
    let object = body.as_object()?;

    let players: Vec<PlayerRecord> = object
        .get("players")
        .and_then(JsonValue::as_array)
        .map(|items| items.iter().map(record_from_json).collect())
        .unwrap_or_default();

    let count = object
        .get("count")
        .and_then(JsonValue::as_u64)
        .map(|c| c as usize)
        .unwrap_or(players.len());

    debug!("Normalized {} JSON players (announced count {})", players.len(), count);

    Some(SearchResult { count, players })
}

/// A CSV row with columns addressed by header name
struct CsvRow<'a> {
    index: &'a HashMap<String, usize>,
    record: &'a csv::StringRecord,
}

impl CsvRow<'_> {
    fn get(&self, column: &str) -> &str {
        self.index
            .get(column)
            .and_then(|&i| self.record.get(i))
            .unwrap_or("")
    }

    fn to_record(&self) -> PlayerRecord {
        PlayerRecord::new(
            clean_text(self.get(columns::NAME)),
            clean_text(self.get(columns::MEMBER_ID)),
            non_blank(self.get(columns::STATE)),
            Ratings {
                regular: non_blank(self.get(columns::RATING_REGULAR)),
                quick: non_blank(self.get(columns::RATING_QUICK)),
                blitz: non_blank(self.get(columns::RATING_BLITZ)),
            },
            non_blank(self.get(columns::EXPIRATION_DATE)),
        )
    }
}

/// Parse an `/api/export` body into records
///
/// The first line is the header; columns are looked up by name so
/// extra or reordered columns are fine and missing ones read as empty.
/// Rows the CSV reader cannot decode are skipped with a warning.
pub fn records_from_csv(text: &str) -> Vec<PlayerRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let index: HashMap<String, usize> = match reader.headers() {
        Ok(headers) => headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_string(), i))
            .collect(),
        Err(e) => {
            warn!("Unreadable CSV header: {}", e);
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for (line, row) in reader.records().enumerate() {
        match row {
            Ok(record) => {
                let row = CsvRow { index: &index, record: &record };
                records.push(row.to_record());
            }
            Err(e) => warn!("Skipping unreadable CSV row {}: {}", line + 1, e),
        }
    }

    debug!("Normalized {} CSV rows", records.len());
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("Smith\nJane"), "Smith Jane");
        assert_eq!(clean_text("  Smith\r\nJane \n"), "Smith Jane");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_line_breaks_removed_from_every_field() {
        let record = record_from_json(&json!({
            "name": "A",
            "memberId": "12\n34",
            "state": "N\nY",
            "ratings": {"regular": "15\r\n00"},
            "expiration_date": "2027-\n01-31"
        }));
        assert_eq!(record.member_id(), "12 34");
        assert_eq!(record.state(), Some("N Y"));
        assert_eq!(record.ratings().regular.as_deref(), Some("15 00"));
        assert_eq!(record.expiration_date(), Some("2027- 01-31"));

        let records = records_from_csv("name,memberId,state\nA,\"1\n2\",\"N\nY\"\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].member_id(), "1 2");
        assert_eq!(records[0].state(), Some("N Y"));
    }

    #[test]
    fn test_record_from_json_full() {
        let record = record_from_json(&json!({
            "name": "Smith, John",
            "memberId": "12345678",
            "state": " NY ",
            "ratings": {"regular": "1500", "quick": 1450, "blitz": null},
            "expiration_date": "2027-01-31"
        }));

        assert_eq!(record.name(), "Smith, John");
        assert_eq!(record.member_id(), "12345678");
        assert_eq!(record.state(), Some("NY"));
        assert_eq!(record.ratings().regular.as_deref(), Some("1500"));
        assert_eq!(record.ratings().quick.as_deref(), Some("1450"));
        assert_eq!(record.ratings().blitz, None);
        assert_eq!(record.expiration_date(), Some("2027-01-31"));
    }

    #[test]
    fn test_record_from_json_missing_fields() {
        let record = record_from_json(&json!({"name": "Smith\nJane", "state": null}));
        assert_eq!(record.name(), "Smith Jane");
        assert_eq!(record.member_id(), "");
        assert_eq!(record.state(), None);
        assert!(record.ratings().is_empty());

        let record = record_from_json(&json!({"name": "X", "ratings": null}));
        assert!(record.ratings().is_empty());

        let record = record_from_json(&json!("not an object"));
        assert_eq!(record, PlayerRecord::default());
    }

    #[test]
    fn test_search_result_from_json() {
        let result = search_result_from_json(&json!({
            "count": 2,
            "players": [{"name": "A"}, {"name": "B"}]
        }))
        .unwrap();
        assert_eq!(result.count, 2);
        assert_eq!(result.players[1].name(), "B");

        let result = search_result_from_json(&json!({"players": [{"name": "A"}]})).unwrap();
        assert_eq!(result.count, 1);

        let result = search_result_from_json(&json!({})).unwrap();
        assert!(result.is_empty());

        assert!(search_result_from_json(&json!([1, 2])).is_none());
    }

    #[test]
    fn test_records_from_csv() {
        let text = "name,memberId,state,rating_regular,rating_quick,rating_blitz\n\
                    \"Smith, John\",12345678,NY,1500,,\n\
                    \"Smith\nJane\",87654321,,,1200,1100\n";
        let records = records_from_csv(text);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "Smith, John");
        assert_eq!(records[0].state(), Some("NY"));
        assert_eq!(records[0].ratings().quick, None);
        assert_eq!(records[1].name(), "Smith Jane");
        assert_eq!(records[1].state(), None);
        assert_eq!(records[1].ratings().blitz.as_deref(), Some("1100"));
    }

    #[test]
    fn test_records_from_csv_missing_and_reordered_columns() {
        let text = "memberId,name,uscf_id\n42, Doe \n";
        let records = records_from_csv(text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "Doe");
        assert_eq!(records[0].member_id(), "42");
        assert_eq!(records[0].state(), None);
        assert!(records[0].ratings().is_empty());
    }

    #[test]
    fn test_records_from_csv_no_rows() {
        assert!(records_from_csv("No players found").is_empty());
        assert!(records_from_csv("").is_empty());
        assert!(records_from_csv("name,memberId\n").is_empty());
    }
}
