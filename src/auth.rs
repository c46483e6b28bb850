//! Credential handling for the Save! API.

use reqwest::RequestBuilder;

/// Header carrying a pre-issued API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Credential material attached to every outbound request.
///
/// Configured once at client construction and never mutated. The Save!
/// server accepts either a pre-issued API key in the `x-api-key` header or
/// HTTP Basic credentials; most read endpoints also work unauthenticated.
///
/// ## Examples
///
/// ```rust
/// use save_api::Credentials;
///
/// let key = Credentials::ApiKey("sk-xxx".to_string());
/// let basic = Credentials::Basic {
///     username: "admin".to_string(),
///     password: "hunter2".to_string(),
/// };
/// let none = Credentials::None;
/// assert!(matches!(none, Credentials::None));
/// # let _ = (key, basic);
/// ```
#[derive(Debug, Clone, Default)]
pub enum Credentials {
    /// Pre-issued API key, sent as the `x-api-key` header.
    ApiKey(String),
    /// Username/password pair, sent as HTTP Basic auth.
    Basic { username: String, password: String },
    /// No credentials attached.
    #[default]
    None,
}

impl Credentials {
    /// Applies these credentials to a request builder.
    pub(crate) fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::ApiKey(key) => request.header(API_KEY_HEADER, key.as_str()),
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
            Self::None => request,
        }
    }
}
