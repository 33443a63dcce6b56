//! REST API client for the job-board backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `Result`s instead of panics so session/profile fetch
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, LoginResponse, PasswordResetRequest, RegisterRequest, UserRecord};
use crate::config;

/// Failure talking to the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text suitable for a transient notice.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            Self::Status { status: 401 | 403, .. } => "Invalid email or password.".to_owned(),
            Self::Status { status, .. } if *status >= 500 => "The server is unavailable. Try again later.".to_owned(),
            Self::Status { status, .. } => format!("Request failed ({status})."),
            Self::Network(_) | Self::Unavailable => "Could not reach the server.".to_owned(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
        }
    }
}

/// Backend calls the session provider and auth pages depend on.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `GET /auth/{token}`.
    async fn current_user(&self, token: &str) -> Result<UserRecord, ApiError>;
    /// `POST /auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
    /// `POST /auth/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;
    /// `POST /auth/forgot-password`.
    async fn request_password_reset(&self, request: &PasswordResetRequest) -> Result<(), ApiError>;
}

/// [`AuthApi`] over HTTP against [`config::api_base`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    base: String,
}

impl Default for HttpAuthApi {
    fn default() -> Self {
        Self::new(config::api_base())
    }
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn endpoint(&self, path: &str) -> String {
        join_endpoint(&self.base, path)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn join_endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn current_user_path(token: &str) -> String {
    format!("auth/{token}")
}

/// Map a non-2xx response to [`ApiError::Status`], keeping the backend's
/// `{ "message": ... }` text when the body carries one.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<super::types::ErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.trim().is_empty());
    ApiError::Status { status, message }
}

#[cfg(feature = "hydrate")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(status_error(status, &body))
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, payload: &T) -> Result<gloo_net::http::Response, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(resp).await
}

impl AuthApi for HttpAuthApi {
    async fn current_user(&self, token: &str) -> Result<UserRecord, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint(&current_user_path(token));
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = check_status(resp).await?;
            resp.json::<UserRecord>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = post_json(&self.endpoint("auth/login"), request).await?;
            resp.json::<LoginResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.endpoint("auth/register"), request).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn request_password_reset(&self, request: &PasswordResetRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.endpoint("auth/forgot-password"), request).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
