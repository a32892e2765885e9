//! # API crate — typed REST client for the GolfDiary backend
//!
//! Everything the frontends say to the backend goes through [`ApiClient`].
//! The client owns two request pipelines over the same HTTP machinery:
//!
//! - the **authenticated pipeline** attaches `Authorization: Bearer <credential>`
//!   whenever the session store holds a credential, and reacts to an HTTP 401
//!   by clearing the store and returning [`ApiError::AuthExpired`];
//! - the **public pipeline** never attaches a credential and never touches the
//!   session, whatever the response status — a 401 from an endpoint we sent no
//!   credential to says nothing about our session.
//!
//! Navigation is deliberately not this crate's business: an expired session
//! surfaces as a tagged error and the application layer decides where to go.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL resolution from the environment |
//! | [`error`] | [`ApiError`] taxonomy; `Display` carries the user-facing message |
//! | [`token`] | Best-effort credential claims decode, diagnostics only |
//! | [`models`] | Wire types (lessons, golf rounds, auth payloads) |
//!
//! Endpoint groups live in `auth.rs`, `lessons.rs` and `rounds.rs` as
//! `impl ApiClient` blocks.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::SessionStore;

pub mod config;
pub mod error;
pub mod models;
pub mod token;

mod auth;
mod lessons;
mod rounds;

pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    AuthResponse, GolfRound, InstructorRef, Lesson, LessonCategory, LessonDraft, LessonLevel,
    LoginRequest, MessageResponse, RegisterRequest,
};
pub use token::{decode_claims, Claims, TokenError};

/// Which of the two request pipelines a call goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pipeline {
    Authenticated,
    Public,
}

/// HTTP client for the GolfDiary REST API.
///
/// Cheap to clone; clones share the underlying connection pool and session
/// store.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            session,
        }
    }

    /// Client configured from the environment (see [`ApiConfig::from_env`]).
    pub fn from_env(session: SessionStore) -> Self {
        Self::new(ApiConfig::from_env(), session)
    }

    /// The session store this client reads credentials from and clears on 401.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "dispatching API request");
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    /// Send a prepared request through the given pipeline and map the response
    /// status onto the error taxonomy. Success returns the raw response for
    /// the caller to consume.
    async fn run(&self, req: RequestBuilder, pipeline: Pipeline) -> Result<Response, ApiError> {
        let req = match pipeline {
            Pipeline::Authenticated => match self.session.credential() {
                Some(credential) => req.bearer_auth(credential),
                // No credential held: dispatch bare and let the server decide.
                None => req,
            },
            Pipeline::Public => req,
        };

        let resp = req.send().await.map_err(ApiError::Network)?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        match status.as_u16() {
            401 if pipeline == Pipeline::Authenticated => {
                tracing::warn!("server rejected the credential; clearing the stored session");
                self.session.expire();
                Err(ApiError::AuthExpired)
            }
            403 => Err(ApiError::Forbidden),
            404 => Err(ApiError::NotFound),
            s if s >= 500 => Err(ApiError::Server),
            s => {
                // Surface the server's own message when it sent one.
                let message = resp
                    .json::<MessageResponse>()
                    .await
                    .ok()
                    .and_then(|body| body.message);
                Err(ApiError::rejected(s, message))
            }
        }
    }

    async fn into_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json().await.map_err(ApiError::Body)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self
            .run(self.request(Method::GET, path), Pipeline::Authenticated)
            .await?;
        Self::into_json(resp).await
    }

    pub(crate) async fn get_public_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let resp = self
            .run(self.request(Method::GET, path), Pipeline::Public)
            .await?;
        Self::into_json(resp).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .run(
                self.request(Method::POST, path).json(body),
                Pipeline::Authenticated,
            )
            .await?;
        Self::into_json(resp).await
    }

    /// POST without a body (the publish/unpublish state transitions).
    pub(crate) async fn post_no_body<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let resp = self
            .run(self.request(Method::POST, path), Pipeline::Authenticated)
            .await?;
        Self::into_json(resp).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .run(
                self.request(Method::PUT, path).json(body),
                Pipeline::Authenticated,
            )
            .await?;
        Self::into_json(resp).await
    }

    /// DELETE returning no body.
    pub(crate) async fn delete_empty(&self, path: &str) -> Result<(), ApiError> {
        self.run(self.request(Method::DELETE, path), Pipeline::Authenticated)
            .await?;
        Ok(())
    }
}
