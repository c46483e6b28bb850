//! Routes for the tools index.

use std::collections::BTreeMap;

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::response::{
    CategorySearchResponse, Dataset, Envelope, MessageResponse, SearchResponse,
};
use crate::types::{CategoryFilter, DeleteById, SearchQuery, Tool, ToolUpsert, UrlRef};

use super::SaveClient;

impl SaveClient {
    /// Full-text search over the tools index.
    ///
    /// POST `/api/v1/tools`
    pub async fn tools_search(&self, query: &SearchQuery) -> Result<SearchResponse<Tool>, ApiError> {
        self.execute_with_body(Endpoint::post(&["tools"]), query).await
    }

    /// Exact-URL lookup in the tools index.
    ///
    /// POST `/api/v1/tools/exact`
    pub async fn tools_exact(&self, url: &str) -> Result<Envelope<Tool>, ApiError> {
        self.execute_with_body(
            Endpoint::post(&["tools", "exact"]),
            &UrlRef {
                url: url.to_string(),
            },
        )
        .await
    }

    /// Category-filtered search over tools.
    ///
    /// POST `/api/v1/tools/categories`
    pub async fn tools_search_categories(
        &self,
        filter: &CategoryFilter,
    ) -> Result<CategorySearchResponse<Tool>, ApiError> {
        self.execute_with_body(Endpoint::post(&["tools", "categories"]), filter)
            .await
    }

    /// All tool categories with their entry counts, optionally narrowed by
    /// a substring match on the category name.
    ///
    /// GET `/api/v1/tools/categories`
    pub async fn tools_categories_by_count(
        &self,
        q: Option<&str>,
    ) -> Result<Envelope<BTreeMap<String, u64>>, ApiError> {
        self.execute(Endpoint::get(&["tools", "categories"]).query_opt("q", q))
            .await
    }

    /// Every tool in the index.
    ///
    /// GET `/api/v1/tools/all`
    pub async fn tools_all(&self) -> Result<SearchResponse<Tool>, ApiError> {
        self.execute(Endpoint::get(&["tools", "all"])).await
    }

    /// The most recently added tools.
    ///
    /// GET `/api/v1/tools`
    pub async fn tools_latest(&self, limit: Option<u64>) -> Result<SearchResponse<Tool>, ApiError> {
        self.execute(Endpoint::get(&["tools"]).query_opt("limit", limit))
            .await
    }

    /// A single random tool.
    ///
    /// GET `/api/v1/tools/random`
    pub async fn tools_random(&self) -> Result<Envelope<Tool>, ApiError> {
        self.execute(Endpoint::get(&["tools", "random"])).await
    }

    /// Adds a tool, or overwrites it if an entry with the same URL exists.
    ///
    /// PUT `/api/v1/tools` — **requires auth**
    pub async fn tools_upsert(&self, tool: &ToolUpsert) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(Endpoint::put(&["tools"]), tool).await
    }

    /// Alias for [`tools_upsert`](Self::tools_upsert).
    pub async fn tools_add(&self, tool: &ToolUpsert) -> Result<MessageResponse, ApiError> {
        self.tools_upsert(tool).await
    }

    /// Alias for [`tools_upsert`](Self::tools_upsert).
    pub async fn tools_update(&self, tool: &ToolUpsert) -> Result<MessageResponse, ApiError> {
        self.tools_upsert(tool).await
    }

    /// Deletes a tool by id.
    ///
    /// DELETE `/api/v1/tools` — **requires auth**
    pub async fn tools_delete(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(
            Endpoint::delete(&["tools"]),
            &DeleteById { id: id.to_string() },
        )
        .await
    }

    /// Replaces the whole tools index with an importable dataset.
    ///
    /// PUT `/api/v1/tools/import` — **requires auth**
    pub async fn tools_import(&self, dataset: &Dataset<Tool>) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(Endpoint::put(&["tools", "import"]), dataset)
            .await
    }

    /// Exports all tools as an importable dataset.
    ///
    /// GET `/api/v1/tools/export`
    pub async fn tools_export(&self) -> Result<Dataset<Tool>, ApiError> {
        self.execute(Endpoint::get(&["tools", "export"])).await
    }

    /// Marks a tool as a favorite.
    ///
    /// PUT `/api/v1/tools/favorites` — **requires auth**
    pub async fn tools_add_favorite(&self, url: &str) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(
            Endpoint::put(&["tools", "favorites"]),
            &UrlRef {
                url: url.to_string(),
            },
        )
        .await
    }

    /// Removes a tool from favorites.
    ///
    /// DELETE `/api/v1/tools/favorites` — **requires auth**
    pub async fn tools_delete_favorite(&self, url: &str) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(
            Endpoint::delete(&["tools", "favorites"]),
            &UrlRef {
                url: url.to_string(),
            },
        )
        .await
    }

    /// Lists favorite tools.
    ///
    /// GET `/api/v1/tools/favorites`
    pub async fn tools_get_favorites(&self) -> Result<SearchResponse<Tool>, ApiError> {
        self.execute(Endpoint::get(&["tools", "favorites"])).await
    }
}
