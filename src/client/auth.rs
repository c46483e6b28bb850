//! User and API-key management routes.

use serde::Serialize;

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::response::{Envelope, MessageResponse};
use crate::types::{AuthSession, AuthUser, CreatedUser};

use super::SaveClient;

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct UsernameBody<'a> {
    username: &'a str,
}

#[derive(Serialize)]
struct CreateUserBody<'a> {
    username: &'a str,
    admin: bool,
}

#[derive(Serialize)]
struct PasswordBody<'a> {
    password: &'a str,
}

impl SaveClient {
    /// Exchanges a username/password pair for the user's API key.
    ///
    /// POST `/api/v1/auth/apikey`
    pub async fn auth_get_api_key(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Envelope<AuthSession>, ApiError> {
        self.execute_with_body(
            Endpoint::post(&["auth", "apikey"]),
            &LoginBody { username, password },
        )
        .await
    }

    /// Rotates the calling user's API key; the previous key stops working.
    ///
    /// POST `/api/v1/auth/apikey/rotate` — **requires auth**
    pub async fn auth_rotate_api_key(&self) -> Result<Envelope<AuthSession>, ApiError> {
        self.execute(Endpoint::post(&["auth", "apikey", "rotate"]))
            .await
    }

    /// Lists all user accounts.
    ///
    /// GET `/api/v1/auth/users` — **requires auth**
    pub async fn auth_get_all_users(&self) -> Result<Envelope<Vec<AuthUser>>, ApiError> {
        self.execute(Endpoint::get(&["auth", "users"])).await
    }

    /// Creates a user; the response carries the server-generated password,
    /// which is returned exactly once.
    ///
    /// PUT `/api/v1/auth/users` — **requires auth**
    pub async fn auth_create_user(
        &self,
        username: &str,
        admin: bool,
    ) -> Result<Envelope<CreatedUser>, ApiError> {
        self.execute_with_body(
            Endpoint::put(&["auth", "users"]),
            &CreateUserBody { username, admin },
        )
        .await
    }

    /// Deletes a user account.
    ///
    /// DELETE `/api/v1/auth/users` — **requires auth**
    pub async fn auth_delete_user(&self, username: &str) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(
            Endpoint::delete(&["auth", "users"]),
            &UsernameBody { username },
        )
        .await
    }

    /// Changes the calling user's password.
    ///
    /// POST `/api/v1/auth/password` — **requires auth**
    pub async fn auth_change_password(&self, password: &str) -> Result<MessageResponse, ApiError> {
        self.execute_with_body(
            Endpoint::post(&["auth", "password"]),
            &PasswordBody { password },
        )
        .await
    }
}
