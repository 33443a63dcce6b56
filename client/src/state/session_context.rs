//! Reactive session provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`SessionContext`]; pages, the header and route guards
//! read it with [`use_session`]. It wraps [`SessionStore`] in a signal so
//! every reader re-renders when the session changes.
//!
//! HYDRATION
//! =========
//! The server cannot see `localStorage`, so the store starts detached on both
//! sides and reads the token in an effect after hydration. Until then
//! [`SessionContext::ready`] is false and session-dependent UI renders a
//! neutral placeholder.

use leptos::prelude::*;

use crate::net::api::{ApiError, AuthApi, HttpAuthApi};
use crate::net::types::{LoginRequest, UserRecord};
use crate::state::session::{BrowserStorage, Session, SessionStore};

#[derive(Clone, Copy)]
pub struct SessionContext {
    store: RwSignal<SessionStore<BrowserStorage>>,
    ready: RwSignal<bool>,
    api: StoredValue<HttpAuthApi>,
}

/// Create the provider, register it as context and schedule the storage read.
pub fn provide_session() -> SessionContext {
    let ctx = SessionContext {
        store: RwSignal::new(SessionStore::detached(BrowserStorage)),
        ready: RwSignal::new(false),
        api: StoredValue::new(HttpAuthApi::default()),
    };
    provide_context(ctx);

    Effect::new(move || {
        ctx.store.update(SessionStore::reload);
        ctx.ready.set(true);
    });

    ctx
}

/// The provider installed by `App`.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

impl SessionContext {
    /// Whether the persisted token has been read. Tracked.
    pub fn ready(&self) -> bool {
        self.ready.get()
    }

    /// Current session. Tracked.
    pub fn session(&self) -> Session {
        self.store.with(|s| s.session().clone())
    }

    pub fn session_untracked(&self) -> Session {
        self.store.with_untracked(|s| s.session().clone())
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        self.store.with(|s| s.current_user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.with(SessionStore::is_authenticated)
    }

    pub fn api(&self) -> HttpAuthApi {
        self.api.get_value()
    }

    /// Look up the user for the current token. Results for a token that was
    /// replaced meanwhile are discarded by the store.
    pub async fn refresh(self) {
        let Some(token) = self.store.try_update(SessionStore::begin_refresh).flatten() else {
            return;
        };
        let result = self.api().current_user(&token).await;
        let _ = self.store.try_update(|s| s.finish_refresh(&token, result));
    }

    pub fn sign_in(&self, token: &str) {
        self.store.update(|s| s.sign_in(token));
    }

    pub fn sign_out(&self) {
        leptos::logging::log!("session: signed out");
        self.store.update(SessionStore::clear);
    }

    /// Exchange credentials for a token, then confirm the user.
    ///
    /// # Errors
    ///
    /// Returns the backend failure when the credentials are rejected.
    pub async fn login(self, request: LoginRequest) -> Result<Session, ApiError> {
        let response = self.api().login(&request).await?;
        self.sign_in(&response.access_token);
        self.refresh().await;
        Ok(self.session_untracked())
    }
}
