//! Routes for the images index.
//!
//! Image binaries are uploaded out of band; these routes only search and
//! maintain the indexed metadata.

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::response::{
    CategorySearchResponse, Dataset, Envelope, MessageResponse, SearchResponse,
};
use crate::types::{CategoryFilter, DeleteById, Image, ImagePatch, SearchQuery, UrlRef};

use super::SaveClient;

impl SaveClient {
    /// Full-text search over the images index.
    ///
    /// POST `/api/v1/images`
    pub async fn images_search(
        &self,
        query: &SearchQuery,
    ) -> Result<SearchResponse<Image>, ApiError> {
        self.execute_with_body(Endpoint::post(&["images"]), query).await
    }

    /// Exact-URL lookup in the images index.
    ///
    /// POST `/api/v1/images/exact`
    pub async fn images_exact(&self, url: &str) -> Result<Envelope<Image>, ApiError> {
        self.execute_with_body(
            Endpoint::post(&["images", "exact"]),
            &UrlRef {
                url: url.to_string(),
            },
        )
        .await
    }

    /// Keyword-filtered search over images.
    ///
    /// POST `/api/v1/images/categories`
    pub async fn images_search_categories(
        &self,
        filter: &CategoryFilter,
    ) -> Result<CategorySearchResponse<Image>, ApiError> {
        self.execute_with_body(Endpoint::post(&["images", "categories"]), filter)
            .await
    }

    /// Every image in the index.
    ///
    /// GET `/api/v1/images/all`
    pub async fn images_all(&self) -> Result<SearchResponse<Image>, ApiError> {
        self.execute(Endpoint::get(&["images", "all"])).await
    }

    /// The most recently added images.
    ///
    /// GET `/api/v1/images`
    pub async fn images_latest(
        &self,
        limit: Option<u64>,
    ) -> Result<SearchResponse<Image>, ApiError> {
        self.execute(Endpoint::get(&["images"]).query_opt("limit", limit))
            .await
    }

    /// Patches an image's descriptive metadata.
    ///
    /// PUT `/api/v1/images` — **requires auth**
    pub async fn images_update(&self, patch: &ImagePatch) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(Endpoint::put(&["images"]), patch).await
    }

    /// Deletes an image by id.
    ///
    /// DELETE `/api/v1/images` — **requires auth**
    pub async fn images_delete(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(
            Endpoint::delete(&["images"]),
            &DeleteById { id: id.to_string() },
        )
        .await
    }

    /// Replaces the whole images index with an importable dataset.
    ///
    /// PUT `/api/v1/images/import` — **requires auth**
    pub async fn images_import(
        &self,
        dataset: &Dataset<Image>,
    ) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(Endpoint::put(&["images", "import"]), dataset)
            .await
    }

    /// Exports all images as an importable dataset.
    ///
    /// GET `/api/v1/images/export`
    pub async fn images_export(&self) -> Result<Dataset<Image>, ApiError> {
        self.execute(Endpoint::get(&["images", "export"])).await
    }

    /// Marks an image as a favorite.
    ///
    /// PUT `/api/v1/images/favorites` — **requires auth**
    pub async fn images_add_favorite(&self, url: &str) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(
            Endpoint::put(&["images", "favorites"]),
            &UrlRef {
                url: url.to_string(),
            },
        )
        .await
    }

    /// Removes an image from favorites.
    ///
    /// DELETE `/api/v1/images/favorites` — **requires auth**
    pub async fn images_delete_favorite(&self, url: &str) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(
            Endpoint::delete(&["images", "favorites"]),
            &UrlRef {
                url: url.to_string(),
            },
        )
        .await
    }

    /// Lists favorite images.
    ///
    /// GET `/api/v1/images/favorites`
    pub async fn images_get_favorites(&self) -> Result<SearchResponse<Image>, ApiError> {
        self.execute(Endpoint::get(&["images", "favorites"])).await
    }
}
