//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps HTTP calls behind the `AuthApi` trait and `types` defines the
//! wire schema shared by pages and the session provider.

pub mod api;
pub mod types;
