//! Records for the tools index.

use serde::{Deserialize, Serialize};

/// A stored tool entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tool {
    pub id: String,
    pub url: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub icon: String,
    pub image: String,
    pub stars: u64,
    pub created_on: u64,
    pub similar_tools: Vec<SimilarTool>,
}

/// A related-project reference attached to a tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarTool {
    pub name: String,
    pub url: String,
    pub description: String,
    pub avatar: String,
    pub stars: u64,
}

/// Body of the tools upsert, keyed by `url`.
///
/// Optional fields are omitted from the wire body entirely when unset; the
/// server fills its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolUpsert {
    pub url: String,
    pub name: String,
    pub description: String,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
}
