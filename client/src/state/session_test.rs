use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::net::types::{
    LoginRequest, LoginResponse, PasswordResetRequest, RegisterRequest, Role,
};

// =============================================================
// Helpers
// =============================================================

fn user(role: Role) -> UserRecord {
    UserRecord {
        id: "u-1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role,
    }
}

/// Backend stub returning a fixed lookup result and counting calls.
struct FakeApi {
    lookup: Result<UserRecord, ApiError>,
    calls: Cell<usize>,
}

impl FakeApi {
    fn returning(lookup: Result<UserRecord, ApiError>) -> Self {
        Self { lookup, calls: Cell::new(0) }
    }
}

impl AuthApi for FakeApi {
    async fn current_user(&self, _token: &str) -> Result<UserRecord, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.lookup.clone()
    }

    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<(), ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn request_password_reset(&self, _request: &PasswordResetRequest) -> Result<(), ApiError> {
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// init
// =============================================================

#[test]
fn init_without_token_is_logged_out() {
    let store = SessionStore::init(MemoryStorage::default());
    assert_eq!(store.session(), &Session::LoggedOut);
    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());
}

#[test]
fn init_with_token_is_logging_in() {
    let store = SessionStore::init(MemoryStorage::with_token("tok"));
    assert_eq!(store.session(), &Session::LoggingIn);
    assert!(store.is_authenticated());
    assert_eq!(store.token(), Some("tok"));
    assert!(store.current_user().is_none());
}

#[test]
fn init_treats_blank_token_as_absent() {
    let store = SessionStore::init(MemoryStorage::with_token("   "));
    assert_eq!(store.session(), &Session::LoggedOut);
    assert!(!store.is_authenticated());
}

#[test]
fn detached_store_ignores_storage_until_reload() {
    let mut store = SessionStore::detached(MemoryStorage::with_token("tok"));
    assert_eq!(store.session(), &Session::LoggedOut);
    store.reload();
    assert_eq!(store.session(), &Session::LoggingIn);
    assert_eq!(store.token(), Some("tok"));
}

// =============================================================
// fetch_current_user
// =============================================================

#[test]
fn fetch_success_logs_in() {
    let mut store = SessionStore::init(MemoryStorage::with_token("tok"));
    let api = FakeApi::returning(Ok(user(Role::Employer)));
    let session = block_on(store.fetch_current_user(&api)).clone();
    assert_eq!(session, Session::LoggedIn(user(Role::Employer)));
    assert_eq!(store.current_user().map(|u| u.role), Some(Role::Employer));
}

#[test]
fn fetch_failure_leaves_user_unset() {
    let mut store = SessionStore::init(MemoryStorage::with_token("tok"));
    let api = FakeApi::returning(Err(ApiError::Status { status: 401, message: None }));
    block_on(store.fetch_current_user(&api));
    assert_eq!(store.session(), &Session::Unverified);
    assert!(store.current_user().is_none());
    assert!(store.is_authenticated(), "token presence is unchanged by a failed lookup");
}

#[test]
fn fetch_without_token_skips_backend() {
    let mut store = SessionStore::init(MemoryStorage::default());
    let api = FakeApi::returning(Ok(user(Role::Candidate)));
    block_on(store.fetch_current_user(&api));
    assert_eq!(api.calls.get(), 0);
    assert_eq!(store.session(), &Session::LoggedOut);
}

#[test]
fn fetch_twice_with_same_token_is_idempotent() {
    let mut store = SessionStore::init(MemoryStorage::with_token("tok"));
    let api = FakeApi::returning(Ok(user(Role::Candidate)));
    let first = block_on(store.fetch_current_user(&api)).clone();
    let second = block_on(store.fetch_current_user(&api)).clone();
    assert_eq!(first, second);
    assert_eq!(api.calls.get(), 2);
}

#[test]
fn retry_after_failure_can_recover() {
    let mut store = SessionStore::init(MemoryStorage::with_token("tok"));
    block_on(store.fetch_current_user(&FakeApi::returning(Err(ApiError::Network("offline".to_owned())))));
    assert_eq!(store.session(), &Session::Unverified);

    assert_eq!(store.begin_refresh(), Some("tok".to_owned()));
    assert_eq!(store.session(), &Session::LoggingIn);
    store.finish_refresh("tok", Ok(user(Role::Admin)));
    assert_eq!(store.current_user().map(|u| u.role), Some(Role::Admin));
}

#[test]
fn refresh_keeps_confirmed_user_visible_while_in_flight() {
    let mut store = SessionStore::init(MemoryStorage::with_token("tok"));
    store.finish_refresh("tok", Ok(user(Role::Candidate)));
    assert_eq!(store.begin_refresh(), Some("tok".to_owned()));
    assert_eq!(store.current_user().map(|u| u.role), Some(Role::Candidate));
}

#[test]
fn stale_result_for_replaced_token_is_dropped() {
    let mut store = SessionStore::init(MemoryStorage::with_token("old"));
    let token = store.begin_refresh().unwrap();
    store.sign_in("new");
    store.finish_refresh(&token, Ok(user(Role::Admin)));
    assert_eq!(store.session(), &Session::LoggingIn);
    assert!(store.current_user().is_none());
}

#[test]
fn result_after_sign_out_is_dropped() {
    let mut store = SessionStore::init(MemoryStorage::with_token("tok"));
    let token = store.begin_refresh().unwrap();
    store.clear();
    store.finish_refresh(&token, Ok(user(Role::Admin)));
    assert_eq!(store.session(), &Session::LoggedOut);
}

// =============================================================
// sign_in / clear
// =============================================================

#[test]
fn sign_in_persists_token() {
    let storage = MemoryStorage::default();
    let mut store = SessionStore::init(storage.clone());
    store.sign_in("fresh");
    assert_eq!(storage.load(), Some("fresh".to_owned()));
    assert_eq!(store.session(), &Session::LoggingIn);

    let reopened = SessionStore::init(storage);
    assert_eq!(reopened.token(), Some("fresh"));
}

#[test]
fn sign_in_with_empty_token_signs_out() {
    let storage = MemoryStorage::with_token("tok");
    let mut store = SessionStore::init(storage.clone());
    store.sign_in("");
    assert_eq!(store.session(), &Session::LoggedOut);
    assert_eq!(storage.load(), None);
}

#[test]
fn clear_removes_persisted_token() {
    let storage = MemoryStorage::with_token("tok");
    let mut store = SessionStore::init(storage.clone());
    store.finish_refresh("tok", Ok(user(Role::Employer)));
    store.clear();
    assert_eq!(store.session(), &Session::LoggedOut);
    assert_eq!(store.token(), None);
    assert_eq!(storage.load(), None);
}

// =============================================================
// Session helpers
// =============================================================

#[test]
fn session_authentication_is_token_presence() {
    assert!(!Session::LoggedOut.is_authenticated());
    assert!(Session::LoggingIn.is_authenticated());
    assert!(Session::Unverified.is_authenticated());
    assert!(Session::LoggedIn(user(Role::Admin)).is_authenticated());
}

#[test]
fn only_logging_in_is_loading() {
    assert!(Session::LoggingIn.is_loading());
    assert!(!Session::Unverified.is_loading());
    assert!(!Session::LoggedOut.is_loading());
}

#[test]
fn browser_storage_is_empty_off_browser() {
    assert_eq!(BrowserStorage.load(), None);
}
