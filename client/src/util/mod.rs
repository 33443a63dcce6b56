//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns and form rules from page and
//! component logic so they can be unit tested without a DOM.

pub mod auth;
pub mod cooldown;
pub mod validation;
