//! Typed views over common TWiT API responses.
//!
//! Request methods return raw JSON; decode into these with
//! [`ApiResponse::decode`](super::ApiResponse::decode).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Show entry from GET /shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response of GET /shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowList {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub shows: Vec<Show>,
}

/// Response of GET /shows/{id}. The single show sits under the plural key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowDetail {
    pub shows: Show,
}

/// Stream entry from GET /streams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stream {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub label: String,
    #[serde(rename = "streamType", default)]
    pub stream_type: String,
}

/// Response of GET /streams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamList {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub streams: Vec<Stream>,
}

// IDs come back as `"1"` on some endpoints and `1` on others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiResponse;

    #[test]
    fn show_list_deserializes() {
        let body = r#"{"count":2,"shows":[{"id":"1","label":"A"},{"id":"2","label":"B"}]}"#;
        let parsed: ShowList = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.count, 2);
        assert_eq!(parsed.shows[1].label, "B");
        assert_eq!(parsed.shows[0].description, None);
    }

    #[test]
    fn numeric_ids_are_normalized() {
        let parsed: Show = serde_json::from_str(r#"{"id":1650,"label":"This Week in Tech"}"#).unwrap();
        assert_eq!(parsed.id, "1650");
    }

    #[test]
    fn show_detail_reads_object_under_shows() {
        let body = r#"{
          "shows": {
            "id": "1650",
            "label": "This Week in Tech",
            "description": "Your first podcast of the week."
          }
        }"#;
        let parsed: ShowDetail = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.shows.label, "This Week in Tech");
        assert!(parsed.shows.description.is_some());
    }

    #[test]
    fn stream_list_reads_camel_case_type() {
        let body = r#"{"count":1,"streams":[{"id":"7","label":"Live Audio","streamType":"audio"}]}"#;
        let parsed: StreamList = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.streams[0].stream_type, "audio");
    }

    #[test]
    fn decode_wrong_shape_is_json_error() {
        let resp = ApiResponse::Data(serde_json::json!({"shows": "nope"}));
        let err = resp.decode::<ShowList>().unwrap_err();
        assert!(matches!(err, crate::TwitError::Json(_)));
    }
}
