//! Runtime configuration shared by the server shell and the hydrated app.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host reads its environment and provides an [`AppConfig`] through SSR
//! context. The shell renders it into `<meta>` tags so the WASM bundle can
//! read the same values back from the document after hydration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::*;

pub const DEFAULT_API_BASE_URL: &str = "https://online-tutor-server-opal.vercel.app";
pub const DEFAULT_IDENTITY_BASE_URL: &str = "/identity";
pub const DEFAULT_SESSION_NOTICE_MS: u32 = 8_000;

pub const META_API_BASE: &str = "edubridge:api-base";
pub const META_IDENTITY_BASE: &str = "edubridge:identity-base";
pub const META_SESSION_NOTICE_MS: &str = "edubridge:session-notice-ms";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// REST backend for tutors, bookings and categories.
    pub api_base_url: String,
    /// Identity provider session endpoints.
    pub identity_base_url: String,
    /// How long the gate placeholder waits before showing a
    /// "still connecting" notice.
    pub session_notice_after_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            identity_base_url: DEFAULT_IDENTITY_BASE_URL.to_owned(),
            session_notice_after_ms: DEFAULT_SESSION_NOTICE_MS,
        }
    }
}

impl AppConfig {
    /// Build from meta tag lookups, falling back to defaults for missing or
    /// blank values.
    pub fn from_meta(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let text = |name: &str| lookup(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        Self {
            api_base_url: text(META_API_BASE).unwrap_or(defaults.api_base_url),
            identity_base_url: text(META_IDENTITY_BASE).unwrap_or(defaults.identity_base_url),
            session_notice_after_ms: text(META_SESSION_NOTICE_MS)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.session_notice_after_ms),
        }
    }

    /// `(name, content)` pairs rendered into the document head.
    pub fn meta_entries(&self) -> [(&'static str, String); 3] {
        [
            (META_API_BASE, self.api_base_url.clone()),
            (META_IDENTITY_BASE, self.identity_base_url.clone()),
            (META_SESSION_NOTICE_MS, self.session_notice_after_ms.to_string()),
        ]
    }

    /// Configuration for the current render.
    ///
    /// Hydrate: read from the `<meta>` tags. SSR: the context value provided
    /// by the host, or defaults.
    pub fn current() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::from_meta(read_meta)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            use_context::<Self>().unwrap_or_default()
        }
    }
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let el = doc.query_selector(&format!("meta[name=\"{name}\"]")).ok()??;
    el.get_attribute("content")
}
