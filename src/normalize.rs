// Maps raw review entries from the batchexecute payload into the fixed
// five-field records the exporter writes. The payload is positional: each
// review is a JSON array and fields live at fixed indices.

use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::models::ReviewRecord;

// Field positions inside one raw review entry.
const IDX_AUTHOR: usize = 1;
const IDX_SCORE: usize = 2;
const IDX_CONTENT: usize = 4;
const IDX_TIMESTAMP: usize = 5;
const IDX_REPLY: usize = 7;

/// Normalize one raw review entry. Total function: anything missing or of
/// an unexpected shape becomes an empty string (or a zero rating) so every
/// exported row keeps exactly five fields.
pub fn normalize(raw: &Value) -> ReviewRecord {
    let username = raw
        .get(IDX_AUTHOR)
        .and_then(|a| a.get(0))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let rating = raw.get(IDX_SCORE).and_then(Value::as_i64).unwrap_or(0);

    let comment = raw
        .get(IDX_CONTENT)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let date = raw
        .get(IDX_TIMESTAMP)
        .and_then(|t| t.get(0))
        .and_then(Value::as_i64)
        .map(format_timestamp)
        .unwrap_or_default();

    // Only populated when the developer actually replied; an empty reply
    // string is treated the same as no reply.
    let developer_response = raw
        .get(IDX_REPLY)
        .and_then(|r| r.get(1))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("")
        .to_string();

    ReviewRecord {
        username,
        rating,
        comment,
        date,
        developer_response,
    }
}

fn format_timestamp(secs: i64) -> String {
    match Utc.timestamp_opt(secs, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_review(reply: Option<&str>) -> Value {
        json!([
            "gp:review-id",
            ["Jane Doe", [null, null, null, "avatar-url"]],
            4,
            null,
            "Great app, would recommend.",
            [1700000000, 0],
            12,
            reply.map(|r| json!([null, r, [1700005000, 0]])),
        ])
    }

    #[test]
    fn maps_all_fields_from_a_complete_review() {
        let record = normalize(&raw_review(Some("Thanks for the feedback!")));
        assert_eq!(record.username, "Jane Doe");
        assert_eq!(record.rating, 4);
        assert_eq!(record.comment, "Great app, would recommend.");
        assert_eq!(record.date, "2023-11-14 22:13:20");
        assert_eq!(record.developer_response, "Thanks for the feedback!");
    }

    #[test]
    fn missing_reply_yields_empty_developer_response() {
        let record = normalize(&raw_review(None));
        assert_eq!(record.developer_response, "");
    }

    #[test]
    fn empty_reply_string_is_treated_as_no_reply() {
        let record = normalize(&raw_review(Some("")));
        assert_eq!(record.developer_response, "");
    }

    #[test]
    fn degenerate_entry_still_produces_a_full_record() {
        let record = normalize(&json!([]));
        assert_eq!(record.username, "");
        assert_eq!(record.rating, 0);
        assert_eq!(record.comment, "");
        assert_eq!(record.date, "");
        assert_eq!(record.developer_response, "");
    }
}
