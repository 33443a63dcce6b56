use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{Request, StatusCode};
use axum::routing::{any, get, post};
use tower::ServiceExt;

use super::*;
use crate::config::ProxyTimeouts;

// =============================================================
// Helpers
// =============================================================

fn config(backend_url: &str) -> ServerConfig {
    ServerConfig {
        port: 0,
        backend_url: backend_url.to_owned(),
        timeouts: ProxyTimeouts { request_secs: 5, connect_secs: 1 },
        cors_allow_any: false,
    }
}

/// Stand-in REST backend on an ephemeral port.
async fn spawn_backend() -> String {
    let backend = Router::new()
        .route(
            "/auth/{token}",
            get(|Path(token): Path<String>, headers: HeaderMap| async move {
                let bearer = headers
                    .get(header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_owned();
                axum::Json(serde_json::json!({ "token": token, "authorization": bearer }))
            }),
        )
        .route(
            "/auth/login",
            post(|body: String| async move { (StatusCode::UNAUTHORIZED, format!("rejected {body}")) }),
        )
        .route("/echo", get(|uri: Uri| async move { uri.query().unwrap_or_default().to_owned() }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend).await.unwrap();
    });
    format!("http://{addr}")
}

fn proxy_router(proxy: ProxyState) -> Router {
    Router::new().route("/api/{*path}", any(forward)).with_state(proxy)
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================
// upstream_url
// =============================================================

#[test]
fn upstream_url_strips_api_prefix_remainder() {
    assert_eq!(upstream_url("http://b:8080", "auth/login", None), "http://b:8080/auth/login");
    assert_eq!(upstream_url("http://b:8080", "/auth/tok", None), "http://b:8080/auth/tok");
}

#[test]
fn upstream_url_keeps_query() {
    assert_eq!(upstream_url("http://b", "jobs", Some("page=2")), "http://b/jobs?page=2");
    assert_eq!(upstream_url("http://b", "jobs", Some("")), "http://b/jobs");
}

#[test]
fn copy_headers_keeps_only_listed_names() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, "Bearer t".parse().unwrap());
    headers.insert(header::COOKIE, "sid=1".parse().unwrap());
    let copied = copy_headers(&headers, &FORWARDED_REQUEST_HEADERS);
    assert_eq!(copied.len(), 1);
    assert!(copied.contains_key(header::AUTHORIZATION));
}

// =============================================================
// forward
// =============================================================

#[tokio::test]
async fn forward_relays_path_and_bearer_token() {
    let backend = spawn_backend().await;
    let app = proxy_router(ProxyState::new(&config(&backend)).unwrap());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/tok-1")
                .header(header::AUTHORIZATION, "Bearer tok-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["token"], "tok-1");
    assert_eq!(json["authorization"], "Bearer tok-1");
}

#[tokio::test]
async fn forward_passes_backend_status_and_body_through() {
    let backend = spawn_backend().await;
    let app = proxy_router(ProxyState::new(&config(&backend)).unwrap());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/auth/login")
                .body(Body::from("creds"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(response).await, "rejected creds");
}

#[tokio::test]
async fn forward_relays_query_string() {
    let backend = spawn_backend().await;
    let app = proxy_router(ProxyState::new(&config(&backend)).unwrap());

    let response = app
        .oneshot(Request::builder().uri("/api/echo?q=rust").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(body_string(response).await, "q=rust");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway_with_message() {
    // Reserve a port, then release it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = proxy_router(ProxyState::new(&config(&format!("http://{addr}"))).unwrap());
    let response = app
        .oneshot(Request::builder().uri("/api/auth/tok").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["message"], "The job board service is unavailable.");
}

// =============================================================
// Log redaction
// =============================================================

/// In-memory log sink for a scoped subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

#[test]
fn redacted_path_masks_session_token() {
    assert_eq!(redacted_path("auth/tok-123"), "auth/{token}");
    assert_eq!(redacted_path("/api/auth/tok-123"), "/api/auth/{token}");
    assert_eq!(redacted_path("/api/auth/tok-123/"), "/api/auth/{token}/");
}

#[test]
fn redacted_path_keeps_auth_actions_and_other_paths() {
    assert_eq!(redacted_path("auth/login"), "auth/login");
    assert_eq!(redacted_path("/api/auth/register"), "/api/auth/register");
    assert_eq!(redacted_path("auth/forgot-password"), "auth/forgot-password");
    assert_eq!(redacted_path("jobs/42"), "jobs/42");
    assert_eq!(redacted_path("/api/auth"), "/api/auth");
}

#[tokio::test]
async fn unreachable_backend_warning_omits_token() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (logs, _guard) = capture_logs();
    let app = proxy_router(ProxyState::new(&config(&format!("http://{addr}"))).unwrap());
    let response = app
        .oneshot(Request::builder().uri("/api/auth/SECRET-BEARER-TOKEN").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let output = logs.contents();
    assert!(output.contains("backend unreachable"), "{output}");
    assert!(output.contains("auth/{token}"), "{output}");
    assert!(!output.contains("SECRET-BEARER-TOKEN"), "{output}");
}

#[tokio::test]
async fn backend_error_warning_omits_token() {
    let backend = Router::new().route(
        "/auth/{token}",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend).await.unwrap();
    });

    let (logs, _guard) = capture_logs();
    let app = proxy_router(ProxyState::new(&config(&format!("http://{addr}"))).unwrap());
    let response = app
        .oneshot(Request::builder().uri("/api/auth/SECRET-BEARER-TOKEN").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let output = logs.contents();
    assert!(output.contains("backend error"), "{output}");
    assert!(!output.contains("SECRET-BEARER-TOKEN"), "{output}");
}
