//! Utility routes that operate on arbitrary URLs rather than stored entries.

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::response::Envelope;
use crate::types::{ReaderContent, UrlCheck, UrlRef};

use super::SaveClient;

impl SaveClient {
    /// Asks the server to probe a URL for liveness.
    ///
    /// POST `/api/v1/url/check`
    pub async fn url_check(&self, url: &str) -> Result<Envelope<UrlCheck>, ApiError> {
        self.execute_with_body(
            Endpoint::post(&["url", "check"]),
            &UrlRef {
                url: url.to_string(),
            },
        )
        .await
    }

    /// Extracts reader-mode content (title, article text, excerpt) from a
    /// URL.
    ///
    /// POST `/api/v1/reader`
    pub async fn reader(&self, url: &str) -> Result<Envelope<ReaderContent>, ApiError> {
        self.execute_with_body(
            Endpoint::post(&["reader"]),
            &UrlRef {
                url: url.to_string(),
            },
        )
        .await
    }
}
