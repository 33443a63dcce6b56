//! Job board host: server-renders the Leptos client and forwards `/api`.

mod config;
mod error;
mod proxy;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    // Missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "jobboard host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app(&config)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(port = config.port, "jobboard listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
