//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control is applied in `app.rs`, not here.

pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod listings;
pub mod login;
pub mod not_found;
pub mod post_job;
pub mod register;
