//! Host error types.
//!
//! ERROR HANDLING
//! ==============
//! Startup failures bubble to `main` and end the process. Request-time
//! failures only come from the `/api` forwarder and are answered with the
//! `{ "message": ... }` body the client already understands.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid BACKEND_URL (expected http:// or https:// with a host): {0}")]
    InvalidBackendUrl(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The forwarding HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    #[error("bind failed: {0}")]
    Bind(std::io::Error),

    #[error("server failed: {0}")]
    Serve(std::io::Error),

    /// The backend could not be reached or did not answer in time.
    #[error("backend request failed: {0}")]
    Upstream(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

impl ServerError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Config(_) | Self::Leptos(_) | Self::HttpClientBuild(_) | Self::Bind(_) | Self::Serve(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Upstream(_) => "The job board service is unavailable.".to_owned(),
            other => other.to_string(),
        };
        (status, Json(ErrorBody { message: &message })).into_response()
    }
}
