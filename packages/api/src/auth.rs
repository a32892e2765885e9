//! Authentication endpoints.

use crate::models::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Exchange a username and password for a credential.
    ///
    /// The caller decides what to do with the response; typically it feeds
    /// [`store::SessionStore::login`]. A rejected login surfaces the server's
    /// own message (`ApiError::Rejected`).
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post_json("/api/auth/login", &body).await
    }

    /// Create a new account. Registration does not log the account in; the
    /// user signs in afterwards.
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.post_json("/api/auth/register", request).await
    }
}
