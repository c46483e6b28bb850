//! Records for caller-defined ("other") indexes.

use serde::{Deserialize, Serialize};

/// A stored entry in an arbitrary named index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub id: String,
    pub url: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub keywords: Vec<String>,
    pub created_on: u64,
}

/// Body of the generic-index upsert, keyed by `url`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryUpsert {
    pub url: String,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
