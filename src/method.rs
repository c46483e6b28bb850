//! HTTP method types for the Save! REST API.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods used by the Save! API.
///
/// The API only ever issues GET, POST, PUT and DELETE requests, so the enum
/// is deliberately closed over those four verbs rather than the full HTTP
/// method set.
///
/// ## Examples
///
/// ```rust
/// use save_api::RestMethod;
///
/// let method = RestMethod::Get;
/// assert!(!method.has_body());
/// assert!(method.is_idempotent());
///
/// // Parse from string
/// let parsed: RestMethod = "PUT".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Put);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Search calls and action triggers.
    Post,
    /// HTTP PUT - Upsert or bulk-import a resource.
    Put,
    /// HTTP DELETE - Remove a resource.
    Delete,
}

impl RestMethod {
    /// Returns `true` if this method may carry a request body.
    ///
    /// The Save! API sends bodies on POST, PUT and DELETE (delete-by-id
    /// ships the id in the body rather than the path).
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Delete)
    }

    /// Returns `true` if this method is idempotent.
    ///
    /// Upserts ride on PUT: repeating the call has the same effect as
    /// making it once.
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, Self::Post)
    }

    /// Returns `true` if this method is safe (read-only).
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Get)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Post.to_string(), "POST");
        assert_eq!(RestMethod::Put.to_string(), "PUT");
        assert_eq!(RestMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_parse() {
        assert_eq!("GET".parse::<RestMethod>().unwrap(), RestMethod::Get);
        assert_eq!("PUT".parse::<RestMethod>().unwrap(), RestMethod::Put);
        assert!("PATCH".parse::<RestMethod>().is_err());
    }

    #[test]
    fn test_has_body() {
        assert!(!RestMethod::Get.has_body());
        assert!(RestMethod::Post.has_body());
        assert!(RestMethod::Put.has_body());
        assert!(RestMethod::Delete.has_body());
    }

    #[test]
    fn test_is_idempotent() {
        assert!(RestMethod::Get.is_idempotent());
        assert!(!RestMethod::Post.is_idempotent());
        assert!(RestMethod::Put.is_idempotent());
        assert!(RestMethod::Delete.is_idempotent());
    }

    #[test]
    fn test_enum_is_closed() {
        let methods: Vec<_> = RestMethod::iter().collect();
        assert_eq!(methods.len(), 4);
    }

    #[test]
    fn test_to_reqwest() {
        assert_eq!(RestMethod::Get.to_reqwest(), reqwest::Method::GET);
        assert_eq!(RestMethod::Delete.to_reqwest(), reqwest::Method::DELETE);
    }
}
