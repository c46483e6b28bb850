//! Records for the blogs (bookmark) index.

use serde::{Deserialize, Serialize};

/// A stored blog/bookmark entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blog {
    pub id: String,
    pub resolved_url: String,
    pub resolved_title: String,
    pub excerpt: String,
    pub image: String,
    pub keywords: Vec<String>,
}

/// Body of the blogs upsert, keyed by `resolved_url`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogUpsert {
    pub resolved_url: String,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}
