//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `EDUBRIDGE_API_BASE_URL`: REST backend, default the public deployment
//! - `EDUBRIDGE_IDENTITY_BASE_URL`: identity provider, default `/identity`
//! - `EDUBRIDGE_SESSION_NOTICE_MS`: delay before the "still connecting"
//!   notice on protected pages, default 8000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::{AppConfig, DEFAULT_API_BASE_URL, DEFAULT_IDENTITY_BASE_URL, DEFAULT_SESSION_NOTICE_MS};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub api_base_url: String,
    pub identity_base_url: String,
    pub session_notice_ms: u32,
}

impl ServerConfig {
    /// Build typed host config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] when a numeric variable is set
    /// but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        Ok(Self {
            port: parse_number("PORT", get("PORT"), DEFAULT_PORT)?,
            api_base_url: get("EDUBRIDGE_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
                .trim_end_matches('/')
                .to_owned(),
            identity_base_url: get("EDUBRIDGE_IDENTITY_BASE_URL")
                .unwrap_or_else(|| DEFAULT_IDENTITY_BASE_URL.to_owned())
                .trim_end_matches('/')
                .to_owned(),
            session_notice_ms: parse_number(
                "EDUBRIDGE_SESSION_NOTICE_MS",
                get("EDUBRIDGE_SESSION_NOTICE_MS"),
                DEFAULT_SESSION_NOTICE_MS,
            )?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Client-side view of this config, provided to every SSR render.
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            api_base_url: self.api_base_url.clone(),
            identity_base_url: self.identity_base_url.clone(),
            session_notice_after_ms: self.session_notice_ms,
        }
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}
