//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and home page sections while reading
//! shared state from Leptos context providers.

pub mod access_gate;
pub mod banner;
pub mod footer;
pub mod language_category;
pub mod loader;
pub mod navbar;
pub mod stats_section;
