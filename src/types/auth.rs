//! User and API-key payloads.

use serde::{Deserialize, Serialize};

/// A user account as listed by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthUser {
    pub username: String,
    pub admin: bool,
}

/// An issued API key bound to a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSession {
    pub username: String,
    pub apikey: String,
    pub admin: bool,
}

/// A freshly created user, including the server-generated password.
///
/// The password is only ever returned once, in this response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedUser {
    pub username: String,
    pub admin: bool,
    pub password: String,
}
