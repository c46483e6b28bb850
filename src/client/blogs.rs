//! Routes for the blogs (bookmark) index.

use std::collections::BTreeMap;

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::response::{
    CategorySearchResponse, Dataset, Envelope, MessageResponse, SearchResponse,
};
use crate::types::{Blog, BlogUpsert, CategoryFilter, DeleteById, SearchQuery, UrlRef};

use super::SaveClient;

impl SaveClient {
    /// Full-text search over the blogs index.
    ///
    /// POST `/api/v1/blogs`
    pub async fn blogs_search(&self, query: &SearchQuery) -> Result<SearchResponse<Blog>, ApiError> {
        self.execute_with_body(Endpoint::post(&["blogs"]), query).await
    }

    /// Exact-URL lookup in the blogs index.
    ///
    /// POST `/api/v1/blogs/exact`
    pub async fn blogs_exact(&self, url: &str) -> Result<Envelope<Blog>, ApiError> {
        self.execute_with_body(
            Endpoint::post(&["blogs", "exact"]),
            &UrlRef {
                url: url.to_string(),
            },
        )
        .await
    }

    /// Keyword-filtered search over blogs.
    ///
    /// POST `/api/v1/blogs/categories`
    pub async fn blogs_search_categories(
        &self,
        filter: &CategoryFilter,
    ) -> Result<CategorySearchResponse<Blog>, ApiError> {
        self.execute_with_body(Endpoint::post(&["blogs", "categories"]), filter)
            .await
    }

    /// All blog keywords with their entry counts.
    ///
    /// GET `/api/v1/blogs/categories`
    pub async fn blogs_keywords_by_count(
        &self,
        q: Option<&str>,
    ) -> Result<Envelope<BTreeMap<String, u64>>, ApiError> {
        self.execute(Endpoint::get(&["blogs", "categories"]).query_opt("q", q))
            .await
    }

    /// Every blog in the index.
    ///
    /// GET `/api/v1/blogs/all`
    pub async fn blogs_all(&self) -> Result<SearchResponse<Blog>, ApiError> {
        self.execute(Endpoint::get(&["blogs", "all"])).await
    }

    /// The most recently saved blogs.
    ///
    /// GET `/api/v1/blogs`
    pub async fn blogs_latest(&self, limit: Option<u64>) -> Result<SearchResponse<Blog>, ApiError> {
        self.execute(Endpoint::get(&["blogs"]).query_opt("limit", limit))
            .await
    }

    /// Adds a blog, or overwrites it if an entry with the same URL exists.
    ///
    /// PUT `/api/v1/blogs` — **requires auth**
    pub async fn blogs_upsert(&self, blog: &BlogUpsert) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(Endpoint::put(&["blogs"]), blog).await
    }

    /// Alias for [`blogs_upsert`](Self::blogs_upsert).
    pub async fn blogs_add(&self, blog: &BlogUpsert) -> Result<MessageResponse, ApiError> {
        self.blogs_upsert(blog).await
    }

    /// Alias for [`blogs_upsert`](Self::blogs_upsert).
    pub async fn blogs_update(&self, blog: &BlogUpsert) -> Result<MessageResponse, ApiError> {
        self.blogs_upsert(blog).await
    }

    /// Deletes a blog by id.
    ///
    /// DELETE `/api/v1/blogs` — **requires auth**
    pub async fn blogs_delete(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(
            Endpoint::delete(&["blogs"]),
            &DeleteById { id: id.to_string() },
        )
        .await
    }

    /// Replaces the whole blogs index with an importable dataset.
    ///
    /// PUT `/api/v1/blogs/import` — **requires auth**
    pub async fn blogs_import(&self, dataset: &Dataset<Blog>) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(Endpoint::put(&["blogs", "import"]), dataset)
            .await
    }

    /// Exports all blogs as an importable dataset.
    ///
    /// GET `/api/v1/blogs/export`
    pub async fn blogs_export(&self) -> Result<Dataset<Blog>, ApiError> {
        self.execute(Endpoint::get(&["blogs", "export"])).await
    }

    /// Marks a blog as a favorite.
    ///
    /// PUT `/api/v1/blogs/favorites` — **requires auth**
    pub async fn blogs_add_favorite(&self, url: &str) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(
            Endpoint::put(&["blogs", "favorites"]),
            &UrlRef {
                url: url.to_string(),
            },
        )
        .await
    }

    /// Removes a blog from favorites.
    ///
    /// DELETE `/api/v1/blogs/favorites` — **requires auth**
    pub async fn blogs_delete_favorite(&self, url: &str) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(
            Endpoint::delete(&["blogs", "favorites"]),
            &UrlRef {
                url: url.to_string(),
            },
        )
        .await
    }

    /// Lists favorite blogs.
    ///
    /// GET `/api/v1/blogs/favorites`
    pub async fn blogs_get_favorites(&self) -> Result<SearchResponse<Blog>, ApiError> {
        self.execute(Endpoint::get(&["blogs", "favorites"])).await
    }
}
