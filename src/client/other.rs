//! Routes for caller-defined ("other") indexes.
//!
//! Each method takes the index name as its first argument; the name is
//! substituted into the path as its own segment (and percent-encoded), so
//! any caller-chosen name is safe to pass.

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::response::{CategorySearchResponse, Dataset, Envelope, MessageResponse, SearchResponse};
use crate::types::{CategoryFilter, DeleteById, Entry, EntryUpsert, SearchQuery, UrlRef};

use super::SaveClient;

impl SaveClient {
    /// Full-text search over a named index.
    ///
    /// POST `/api/v1/other/{index}`
    pub async fn other_search(
        &self,
        index: &str,
        query: &SearchQuery,
    ) -> Result<SearchResponse<Entry>, ApiError> {
        self.execute_with_body(Endpoint::post(&["other", index]), query)
            .await
    }

    /// Exact-URL lookup in a named index.
    ///
    /// POST `/api/v1/other/{index}/exact`
    pub async fn other_exact(&self, index: &str, url: &str) -> Result<Envelope<Entry>, ApiError> {
        self.execute_with_body(
            Endpoint::post(&["other", index, "exact"]),
            &UrlRef {
                url: url.to_string(),
            },
        )
        .await
    }

    /// Keyword-filtered search over a named index.
    ///
    /// POST `/api/v1/other/{index}/categories`
    pub async fn other_search_categories(
        &self,
        index: &str,
        filter: &CategoryFilter,
    ) -> Result<CategorySearchResponse<Entry>, ApiError> {
        self.execute_with_body(Endpoint::post(&["other", index, "categories"]), filter)
            .await
    }

    /// Every entry in a named index.
    ///
    /// GET `/api/v1/other/{index}/all`
    pub async fn other_all(&self, index: &str) -> Result<SearchResponse<Entry>, ApiError> {
        self.execute(Endpoint::get(&["other", index, "all"])).await
    }

    /// The most recently added entries in a named index.
    ///
    /// GET `/api/v1/other/{index}`
    pub async fn other_latest(
        &self,
        index: &str,
        limit: Option<u64>,
    ) -> Result<SearchResponse<Entry>, ApiError> {
        self.execute(Endpoint::get(&["other", index]).query_opt("limit", limit))
            .await
    }

    /// Adds an entry to a named index, or overwrites it if one with the
    /// same URL exists.
    ///
    /// PUT `/api/v1/other/{index}` — **requires auth**
    pub async fn other_upsert(
        &self,
        index: &str,
        entry: &EntryUpsert,
    ) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(Endpoint::put(&["other", index]), entry)
            .await
    }

    /// Deletes an entry from a named index by id.
    ///
    /// DELETE `/api/v1/other/{index}` — **requires auth**
    pub async fn other_delete(&self, index: &str, id: &str) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(
            Endpoint::delete(&["other", index]),
            &DeleteById { id: id.to_string() },
        )
        .await
    }

    /// Replaces a named index with an importable dataset.
    ///
    /// PUT `/api/v1/other/{index}/import` — **requires auth**
    pub async fn other_import(
        &self,
        index: &str,
        dataset: &Dataset<Entry>,
    ) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(Endpoint::put(&["other", index, "import"]), dataset)
            .await
    }

    /// Exports a named index as an importable dataset.
    ///
    /// GET `/api/v1/other/{index}/export`
    pub async fn other_export(&self, index: &str) -> Result<Dataset<Entry>, ApiError> {
        self.execute(Endpoint::get(&["other", index, "export"])).await
    }

    /// Marks an entry in a named index as a favorite.
    ///
    /// PUT `/api/v1/other/{index}/favorites` — **requires auth**
    pub async fn other_add_favorite(
        &self,
        index: &str,
        url: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(
            Endpoint::put(&["other", index, "favorites"]),
            &UrlRef {
                url: url.to_string(),
            },
        )
        .await
    }

    /// Removes an entry in a named index from favorites.
    ///
    /// DELETE `/api/v1/other/{index}/favorites` — **requires auth**
    pub async fn other_delete_favorite(
        &self,
        index: &str,
        url: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(
            Endpoint::delete(&["other", index, "favorites"]),
            &UrlRef {
                url: url.to_string(),
            },
        )
        .await
    }

    /// Lists favorites in a named index.
    ///
    /// GET `/api/v1/other/{index}/favorites`
    pub async fn other_get_favorites(&self, index: &str) -> Result<SearchResponse<Entry>, ApiError> {
        self.execute(Endpoint::get(&["other", index, "favorites"]))
            .await
    }
}
