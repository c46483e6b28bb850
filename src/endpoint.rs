//! Per-call request descriptions.
//!
//! An [`Endpoint`] is the (verb, path, query) tuple a wrapper method binds
//! to. It is constructed fresh for every call and never retained; the JSON
//! body travels separately so it can stay typed.

use url::Url;

use crate::error::ApiError;
use crate::method::RestMethod;

/// Versioned path prefix shared by every route.
pub(crate) const API_PREFIX: [&str; 2] = ["api", "v1"];

/// A single outbound request description, relative to the `/api/v1` prefix.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    method: RestMethod,
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl Endpoint {
    /// Creates an endpoint from its path segments.
    ///
    /// Segments are joined under `/api/v1` and percent-encoded individually,
    /// so caller-supplied index names cannot splice extra path components.
    pub(crate) fn new(method: RestMethod, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| (*s).to_string()).collect(),
            query: Vec::new(),
        }
    }

    pub(crate) fn get(segments: &[&str]) -> Self {
        Self::new(RestMethod::Get, segments)
    }

    pub(crate) fn post(segments: &[&str]) -> Self {
        Self::new(RestMethod::Post, segments)
    }

    pub(crate) fn put(segments: &[&str]) -> Self {
        Self::new(RestMethod::Put, segments)
    }

    pub(crate) fn delete(segments: &[&str]) -> Self {
        Self::new(RestMethod::Delete, segments)
    }

    /// Appends a query pair.
    pub(crate) fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends a query pair only when the value is present.
    pub(crate) fn query_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    pub(crate) fn method(&self) -> RestMethod {
        self.method
    }

    /// Resolves this endpoint against a base URL.
    pub(crate) fn full_url(&self, base: &Url) -> Result<Url, ApiError> {
        let mut url = base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ApiError::Config(format!("base URL `{base}` cannot have a path")))?;
            segments.pop_if_empty();
            segments.extend(API_PREFIX);
            segments.extend(self.segments.iter());
        }
        for (key, value) in &self.query {
            url.query_pairs_mut().append_pair(key, value);
        }
        Ok(url)
    }
}
