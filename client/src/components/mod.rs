//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and form pieces while reading session
//! state from the context installed by `App`.

pub mod form;
pub mod loading;
pub mod route_guard;
pub mod site_header;
