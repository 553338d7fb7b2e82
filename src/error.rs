//! Host startup errors.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Missing or malformed `[package.metadata.leptos]` section.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
