//! Records for the images index.

use serde::{Deserialize, Serialize};

/// A stored image entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub id: String,
    pub url: String,
    pub image: String,
    pub title: String,
    pub excerpt: String,
    pub keywords: Vec<String>,
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
    pub height: u32,
    pub width: u32,
    pub created_on: u64,
}

/// Partial update body for an image's descriptive fields.
///
/// Images are uploaded out of band; the client can only patch metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePatch {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}
