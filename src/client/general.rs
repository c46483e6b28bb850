//! Server-level routes: info, health, backup, logs and cross-index search.

use std::collections::BTreeMap;

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::response::{CountedEnvelope, Envelope, ExactAnyResponse};
use crate::types::{LogEntry, SearchQuery, ServerInfo, ServerMeta, SimpleEntry, UrlRef, VersionInfo};

use super::SaveClient;

impl SaveClient {
    /// General information about the server: name, version, author.
    ///
    /// GET `/api/v1`
    pub async fn api(&self) -> Result<Envelope<ServerMeta>, ApiError> {
        self.execute(Endpoint::get(&[])).await
    }

    /// Extended server information, including per-index entry counts.
    ///
    /// GET `/api/v1/info` — **requires auth**
    pub async fn info(&self) -> Result<Envelope<ServerInfo>, ApiError> {
        self.execute(Endpoint::get(&["info"])).await
    }

    /// Health check that does not touch any backend connection.
    ///
    /// GET `/api/v1/version`
    pub async fn version(&self) -> Result<Envelope<VersionInfo>, ApiError> {
        self.execute(Endpoint::get(&["version"])).await
    }

    /// Triggers a server-side backup; resolves with the written file names.
    ///
    /// GET `/api/v1/backup` — **requires auth**
    pub async fn backup(&self) -> Result<Envelope<Vec<String>>, ApiError> {
        self.execute(Endpoint::get(&["backup"])).await
    }

    /// Request logs from the server, as structured JSON.
    ///
    /// GET `/api/v1/logs?format=json` — **requires auth**
    pub async fn logs(&self) -> Result<Envelope<Vec<LogEntry>>, ApiError> {
        self.execute(Endpoint::get(&["logs"]).query("format", "json"))
            .await
    }

    /// Lists every index on the server with its entry count.
    ///
    /// GET `/api/v1/indexes`
    pub async fn indexes(&self) -> Result<CountedEnvelope<BTreeMap<String, u64>>, ApiError> {
        self.execute(Endpoint::get(&["indexes"])).await
    }

    /// Searches every index at once. Less customizable than the per-index
    /// search calls.
    ///
    /// POST `/api/v1/search`
    pub async fn search_any(
        &self,
        query: &str,
    ) -> Result<CountedEnvelope<Vec<SimpleEntry>>, ApiError> {
        self.execute_with_body(Endpoint::post(&["search"]), &SearchQuery::new(query))
            .await
    }

    /// Finds an exact URL match across all indexes; the response names the
    /// index it was found in.
    ///
    /// POST `/api/v1/exact`
    pub async fn exact(&self, url: &str) -> Result<ExactAnyResponse, ApiError> {
        self.execute_with_body(
            Endpoint::post(&["exact"]),
            &UrlRef {
                url: url.to_string(),
            },
        )
        .await
    }
}
