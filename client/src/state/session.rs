//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read identity from here. The store
//! is owned explicitly and injected through context; nothing else reads the
//! persisted token directly.
//!
//! INVARIANTS
//! ==========
//! - `session` is `LoggedOut` iff no non-empty token is held.
//! - A user record is only exposed after the lookup for the current token
//!   has resolved successfully.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::UserRecord;

/// Identity of the current visitor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Session {
    /// No access token.
    LoggedOut,
    /// A token is held and the user lookup has not resolved yet.
    LoggingIn,
    /// The user lookup resolved.
    LoggedIn(UserRecord),
    /// A token is held but the user lookup failed.
    Unverified,
}

impl Session {
    /// Token presence. Says nothing about whether the token is valid.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::LoggedOut)
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserRecord> {
        match self {
            Self::LoggedIn(user) => Some(user),
            Self::LoggedOut | Self::LoggingIn | Self::Unverified => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::LoggingIn)
    }
}

/// Persistence for the bearer token.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn remove(&self);
}

/// `localStorage` under [`crate::config::TOKEN_STORAGE_KEY`]. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl TokenStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(crate::config::TOKEN_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(crate::config::TOKEN_STORAGE_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn remove(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(crate::config::TOKEN_STORAGE_KEY);
            }
        }
    }
}

/// In-process token storage. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(token.to_owned()))) }
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot.lock().map_or(None, |slot| slot.clone())
    }

    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn remove(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

/// Owner of the token and the cached user record.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    token: Option<String>,
    session: Session,
}

fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

impl<S: TokenStorage> SessionStore<S> {
    /// Read the persisted token. The user record is fetched separately.
    pub fn init(storage: S) -> Self {
        let mut store = Self::detached(storage);
        store.reload();
        store
    }

    /// Start signed out without touching storage. Used where storage is not
    /// readable yet (server render, before hydration); call [`Self::reload`]
    /// once it is.
    pub fn detached(storage: S) -> Self {
        Self { storage, token: None, session: Session::LoggedOut }
    }

    /// Re-read the persisted token, dropping any cached user.
    pub fn reload(&mut self) {
        self.token = normalize_token(self.storage.load());
        self.session = if self.token.is_some() { Session::LoggingIn } else { Session::LoggedOut };
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&UserRecord> {
        self.session.user()
    }

    /// Persist a freshly issued token. An empty token signs out.
    pub fn sign_in(&mut self, token: &str) {
        let Some(token) = normalize_token(Some(token.to_owned())) else {
            self.clear();
            return;
        };
        self.storage.save(&token);
        self.token = Some(token);
        self.session = Session::LoggingIn;
    }

    /// Forget the token and the cached user.
    pub fn clear(&mut self) {
        self.storage.remove();
        self.token = None;
        self.session = Session::LoggedOut;
    }

    /// Start a user lookup. Returns the token to look up, or `None` when
    /// signed out. A previously confirmed user stays visible until the new
    /// result lands.
    pub fn begin_refresh(&mut self) -> Option<String> {
        let token = self.token.clone()?;
        if matches!(self.session, Session::Unverified) {
            self.session = Session::LoggingIn;
        }
        Some(token)
    }

    /// Apply a lookup result. Results for a token that is no longer current
    /// are dropped.
    pub fn finish_refresh(&mut self, token: &str, result: Result<UserRecord, ApiError>) {
        if self.token.as_deref() != Some(token) {
            leptos::logging::log!("session: dropping lookup result for a replaced token");
            return;
        }
        self.session = match result {
            Ok(user) => Session::LoggedIn(user),
            Err(err) => {
                leptos::logging::warn!("session: user lookup failed: {err}");
                Session::Unverified
            }
        };
    }

    /// Look up the user for the stored token and cache the result.
    ///
    /// Safe to call repeatedly; with an unchanged token and backend the
    /// resulting session is the same every time.
    pub async fn fetch_current_user<A: AuthApi>(&mut self, api: &A) -> &Session {
        if let Some(token) = self.begin_refresh() {
            let result = api.current_user(&token).await;
            self.finish_refresh(&token, result);
        }
        &self.session
    }
}
