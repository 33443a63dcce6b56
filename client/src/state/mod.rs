//! Application state modules.
//!
//! ARCHITECTURE
//! ============
//! `session`, `guard` and `registration` are plain Rust and carry the logic.
//! `session_context` is the reactive wrapper provided to components.

pub mod guard;
pub mod registration;
pub mod session;
pub mod session_context;
