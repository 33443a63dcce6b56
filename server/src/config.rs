//! Host configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before [`ServerConfig::from_env`] runs, so the
//! same variables work from a shell or a dotfile.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_PROXY_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// REST backend that `/api/*` is forwarded to, without a trailing slash.
    pub backend_url: String,
    pub timeouts: ProxyTimeouts,
    /// Answer cross-origin `/api` requests from any origin.
    pub cors_allow_any: bool,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://localhost:8080`
    /// - `PROXY_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PROXY_CONNECT_TIMEOUT_SECS`: default 5
    /// - `CORS_ALLOW_ANY`: default false
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` is not a port number or
    /// `BACKEND_URL` is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let backend_url = parse_backend_url(std::env::var("BACKEND_URL").ok().as_deref())?;
        let timeouts = ProxyTimeouts {
            request_secs: env_parse_u64("PROXY_REQUEST_TIMEOUT_SECS", DEFAULT_PROXY_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("PROXY_CONNECT_TIMEOUT_SECS", DEFAULT_PROXY_CONNECT_TIMEOUT_SECS),
        };
        let cors_allow_any = env_bool("CORS_ALLOW_ANY").unwrap_or(false);

        Ok(Self { port, backend_url, timeouts, cors_allow_any })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = match raw.map(str::trim) {
        None | Some("") => DEFAULT_BACKEND_URL,
        Some(value) => value,
    };
    let host = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .map(|rest| rest.split('/').next().unwrap_or_default());
    match host {
        Some(host) if !host.is_empty() => Ok(value.trim_end_matches('/').to_owned()),
        _ => Err(ConfigError::InvalidBackendUrl(value.to_owned())),
    }
}
