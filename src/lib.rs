//! Typed async client for the Save! bookmark, tool and blog indexing API.
//!
//! # Overview
//! [`SaveClient`] is a thin, transparent binding over the Save! server's
//! REST routes: every public method maps 1:1 to a (verb, path, body, query)
//! tuple and resolves with the server's decoded response envelope, or
//! rejects with a normalized [`ApiError`]. The client holds nothing but its
//! immutable connection configuration; it never caches, retries or mutates
//! payloads.
//!
//! # Contract version
//! This crate targets the versioned server contract: all routes live under
//! `/api/v1` and every response carries a `{status, message, ...}` envelope.
//! Earlier unversioned servers returning bare payloads are not supported.
//!
//! # Example
//! ```rust,no_run
//! use save_api::{Credentials, SaveClient, SearchQuery};
//! use url::Url;
//!
//! # async fn run() -> Result<(), save_api::ApiError> {
//! let base = Url::parse("https://save.example.com").unwrap();
//! let client = SaveClient::builder(base)
//!     .credentials(Credentials::ApiKey("sk-xxx".into()))
//!     .build()?;
//!
//! let results = client.tools_search(&SearchQuery::new("chepy")).await?;
//! for tool in &results.data {
//!     println!("{} -> {}", tool.name, tool.url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod method;
pub mod response;
pub mod types;

mod endpoint;

pub use auth::Credentials;
pub use client::{SaveClient, SaveClientBuilder};
pub use error::ApiError;
pub use method::RestMethod;
pub use response::{
    CategorySearchResponse, CountedEnvelope, Dataset, Envelope, ExactAnyResponse, MessageResponse,
    SearchResponse,
};
pub use types::{
    AuthSession, AuthUser, Blog, BlogUpsert, CategoryFilter, CreatedUser, DeleteById, Entry,
    EntryUpsert, Image, ImagePatch, LogEntry, ReaderContent, SearchQuery, ServerInfo, ServerMeta,
    SimilarTool, SimpleEntry, Tool, ToolUpsert, UrlCheck, UrlRef, VersionInfo,
};
