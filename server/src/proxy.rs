//! `/api/*` forwarder to the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle talks to `/api` on its own origin; this module relays
//! those calls to `BACKEND_URL` so the backend needs no CORS setup.
//!
//! DESIGN
//! ======
//! One shared `reqwest::Client` with the configured timeouts. Only end-to-end
//! headers the client actually uses are relayed in either direction.
//!
//! The session lookup carries the bearer token in its path
//! (`/auth/{token}`), so logs only ever see [`redacted_path`].

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderName, Method, Uri, header};
use axum::response::Response;

use crate::config::ServerConfig;
use crate::error::ServerError;

const FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];
const FORWARDED_RESPONSE_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::CACHE_CONTROL];

/// `auth/` children that are actions rather than tokens.
const AUTH_ACTIONS: [&str; 3] = ["login", "register", "forgot-password"];

#[derive(Clone)]
pub struct ProxyState {
    http: reqwest::Client,
    backend_url: String,
}

impl ProxyState {
    /// Build the shared client from host configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &ServerConfig) -> Result<Self, ServerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ServerError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, backend_url: config.backend_url.clone() })
    }

    #[must_use]
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

/// Backend URL for a forwarded `/api/{path}` request.
#[must_use]
pub fn upstream_url(backend_url: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{backend_url}/{path}?{query}"),
        None => format!("{backend_url}/{path}"),
    }
}

/// Request path safe for logs: the segment after `auth/` is masked unless it
/// is a known action.
#[must_use]
pub fn redacted_path(path: &str) -> String {
    let mut after_auth = false;
    path.split('/')
        .map(|segment| {
            let masked = after_auth && !segment.is_empty() && !AUTH_ACTIONS.contains(&segment);
            after_auth = segment == "auth";
            if masked { "{token}" } else { segment }
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn copy_headers(from: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        if let Some(value) = from.get(name) {
            out.insert(name.clone(), value.clone());
        }
    }
    out
}

/// Relay one request. The backend's status and body are returned as-is,
/// with only the allowlisted response headers; the body is buffered.
pub async fn forward(
    State(proxy): State<ProxyState>,
    Path(path): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ServerError> {
    let url = upstream_url(&proxy.backend_url, &path, uri.query());
    let logged_path = redacted_path(&path);
    tracing::debug!(%method, path = %logged_path, "forwarding api request");

    let upstream = proxy
        .http
        .request(method.clone(), &url)
        .headers(copy_headers(&headers, &FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            // reqwest errors embed the full URL, token included.
            let e = e.without_url();
            tracing::warn!(%method, path = %logged_path, error = %e, "backend unreachable");
            ServerError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let response_headers = copy_headers(upstream.headers(), &FORWARDED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await.map_err(|e| ServerError::Upstream(e.without_url().to_string()))?;
    if status.is_server_error() {
        tracing::warn!(%method, path = %logged_path, %status, "backend error");
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
