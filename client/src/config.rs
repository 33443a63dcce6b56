//! Build-time client configuration.

/// API base used when `JOBBOARD_API_BASE` is not set at compile time.
pub const DEFAULT_API_BASE: &str = "/api";

/// Local storage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "accessToken";

/// Seconds a user must wait before requesting another reset email.
pub const RESEND_COOLDOWN_SECS: u32 = 60;

/// Base URL of the REST backend.
///
/// Baked in at compile time so the WASM bundle needs no runtime config fetch.
#[must_use]
pub fn api_base() -> &'static str {
    resolve_api_base(option_env!("JOBBOARD_API_BASE"))
}

fn resolve_api_base(raw: Option<&'static str>) -> &'static str {
    match raw.map(str::trim) {
        Some(base) if !base.is_empty() => base,
        _ => DEFAULT_API_BASE,
    }
}
