//! Response envelopes shared by every route.
//!
//! The Save! server wraps each JSON response in a `{status, message, ...}`
//! envelope. The generic parameter is the route's payload type; decoding
//! happens once, at the dispatch boundary, and the payload is otherwise
//! passed through untouched.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::SimpleEntry;

/// Marker for types a route can resolve to.
///
/// Blanket-implemented for everything deserializable; exists so wrapper
/// signatures read as `Resolves<T>` rather than a serde bound soup.
pub trait Resolves: DeserializeOwned + Send {}

impl<T: DeserializeOwned + Send> Resolves for T {}

/// The basic `{status, message, data}` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: u16,
    #[serde(default)]
    pub message: Option<Value>,
    pub data: T,
}

/// Envelope variant carrying a result count alongside the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountedEnvelope<T> {
    pub status: u16,
    #[serde(default)]
    pub message: Option<Value>,
    pub count: u64,
    pub data: T,
}

/// Search results for an index: counted list of entries.
pub type SearchResponse<T> = CountedEnvelope<Vec<T>>;

/// Category-filtered search results, echoing the matched field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySearchResponse<T> {
    pub status: u16,
    #[serde(default)]
    pub message: Option<Value>,
    pub count: u64,
    #[serde(default)]
    pub fields: Option<Vec<String>>,
    pub data: Vec<T>,
}

/// Envelope for mutations that return only an acknowledgement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub status: u16,
    #[serde(default)]
    pub message: Option<Value>,
}

/// Result of an exact-URL lookup across all indexes: which index matched,
/// plus a normalized view of the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExactAnyResponse {
    pub status: u16,
    #[serde(default)]
    pub message: Option<Value>,
    pub index: String,
    pub data: SimpleEntry,
}

/// Bulk dataset: the body of an import and the payload of an export.
///
/// `time_saved` is a millisecond epoch timestamp stamped by whichever side
/// produced the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset<T> {
    pub data: Vec<T>,
    pub count: u64,
    pub time_saved: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_tolerates_missing_message() {
        let env: Envelope<Vec<String>> =
            serde_json::from_value(json!({"status": 200, "data": ["a", "b"]})).unwrap();
        assert_eq!(env.status, 200);
        assert!(env.message.is_none());
        assert_eq!(env.data, vec!["a", "b"]);
    }

    #[test]
    fn counted_envelope_decodes_search_shape() {
        let body = json!({
            "status": 200,
            "count": 1,
            "data": [{"name": "chepy"}]
        });
        let resp: SearchResponse<Value> = serde_json::from_value(body).unwrap();
        assert_eq!(resp.count, 1);
        assert_eq!(resp.data[0]["name"], "chepy");
    }

    #[test]
    fn category_search_fields_are_optional() {
        let body = json!({"status": 200, "count": 0, "data": []});
        let resp: CategorySearchResponse<Value> = serde_json::from_value(body).unwrap();
        assert!(resp.fields.is_none());
        assert!(resp.data.is_empty());
    }

    #[test]
    fn message_response_keeps_message_verbatim() {
        let resp: MessageResponse =
            serde_json::from_value(json!({"status": 200, "message": "OK"})).unwrap();
        assert_eq!(resp.message, Some(json!("OK")));
    }

    #[test]
    fn dataset_round_trips_as_json() {
        let set = Dataset {
            data: vec![json!({"url": "https://example.com"})],
            count: 1,
            time_saved: 1_700_000_000_000,
        };
        let encoded = serde_json::to_value(&set).unwrap();
        assert_eq!(encoded["count"], 1);
        assert_eq!(encoded["time_saved"], 1_700_000_000_000_u64);
        let decoded: Dataset<Value> = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, set);
    }
}
