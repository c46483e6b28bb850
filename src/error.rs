//! Error types for the Save! API client.
//!
//! The taxonomy is flat: either the transport produced no response at all
//! ([`ApiError::Transport`]), or the server answered with a non-success
//! status ([`ApiError::Status`]). The client never classifies further (no
//! 4xx/5xx split) and never retries; recovery policy belongs to the caller.

use thiserror::Error;

/// Error returned by every `SaveClient` operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received (DNS failure, connection refused, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    ///
    /// `body` holds the decoded JSON error payload when the server sent one,
    /// passed through verbatim.
    #[error("server returned status {status}")]
    Status {
        status: u16,
        body: Option<serde_json::Value>,
    },

    /// A success response whose body did not match the declared shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client construction failed (bad header name/value or base URL).
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// The HTTP status code, when a response was received.
    ///
    /// `None` for transport failures where no response exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The decoded error body, when the server sent one.
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_error_exposes_status_and_body() {
        let err = ApiError::Status {
            status: 404,
            body: Some(json!({"error": "not found"})),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some(&json!({"error": "not found"})));
    }

    #[test]
    fn status_error_without_body() {
        let err = ApiError::Status {
            status: 500,
            body: None,
        };
        assert_eq!(err.status(), Some(500));
        assert!(err.body().is_none());
    }

    #[test]
    fn decode_error_has_no_status_or_body() {
        let inner = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ApiError::Decode(inner);
        assert!(err.status().is_none());
        assert!(err.body().is_none());
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::Status {
            status: 403,
            body: None,
        };
        assert_eq!(err.to_string(), "server returned status 403");
    }
}
