//! Domain payload records.
//!
//! Plain data-transfer types with no identity beyond their `id`/`url`
//! fields. The client never caches, mutates or cross-validates them; they
//! pass through the dispatch boundary unchanged. Record types default
//! missing fields instead of failing, since the server is free to omit
//! fields it has no value for.

mod auth;
mod blogs;
mod general;
mod images;
mod other;
mod tools;

pub use auth::{AuthSession, AuthUser, CreatedUser};
pub use blogs::{Blog, BlogUpsert};
pub use general::{
    CategoryFilter, DeleteById, LogEntry, ReaderContent, SearchQuery, ServerInfo, ServerMeta,
    SimpleEntry, UrlCheck, UrlRef, VersionInfo,
};
pub use images::{Image, ImagePatch};
pub use other::{Entry, EntryUpsert};
pub use tools::{SimilarTool, Tool, ToolUpsert};
