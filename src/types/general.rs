//! Server-level payloads and the request shapes shared across indexes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identity block returned by the API root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerMeta {
    pub name: String,
    pub version: String,
    pub author: String,
    pub twitter: String,
}

/// Extended server information, including per-index entry counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    pub author: String,
    pub twitter: String,
    pub request_logging: bool,
    pub count: BTreeMap<String, u64>,
}

/// Payload of the backend-independent health check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionInfo {
    pub version: String,
}

/// One request-log line, as returned by `logs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    pub time: String,
    pub ip: String,
    pub method: String,
    pub path: String,
    pub ua: String,
}

/// Index-agnostic view of a stored entry, used by cross-index search and
/// exact-URL lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleEntry {
    pub id: String,
    pub url: String,
    pub index: String,
    pub image: String,
    pub excerpt: String,
    pub title: String,
    pub keywords: Vec<String>,
}

/// Full-text search request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl SearchQuery {
    /// Query with no limit and the server's default field set.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
            fields: None,
        }
    }
}

/// Category-filtered search request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryFilter {
    pub filter: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// Delete-by-id request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteById {
    pub id: String,
}

/// A bare `{url}` request body, used by exact lookups and favorites.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlRef {
    pub url: String,
}

/// Result of the remote URL liveness probe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlCheck {
    pub url: String,
    pub alive: bool,
    pub status: u16,
}

/// Reader-mode extraction of a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderContent {
    pub url: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
}
