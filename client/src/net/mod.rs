//! Networking modules for the REST backend and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `identity` wraps the session provider, `error`
//! holds their failure types and `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod identity;
pub mod types;
