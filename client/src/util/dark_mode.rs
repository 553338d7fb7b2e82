//! Site colour theme.
//!
//! The navbar switch flips between [`Theme::Light`] and [`Theme::Dark`]. The
//! choice is stored under [`STORAGE_KEY`] and mirrored onto the `<html>`
//! element's `data-theme` attribute, which `style/main.css` keys its palette
//! on. Visitors who never used the switch follow `prefers-color-scheme`.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// `localStorage` key holding the visitor's explicit choice.
pub const STORAGE_KEY: &str = "edubridge_theme";
const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Parse a stored value. Anything unrecognized counts as no choice.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }
}

/// An explicit stored choice wins over the system preference.
pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    stored
        .and_then(Theme::parse)
        .unwrap_or(Theme::from_dark(system_prefers_dark))
}

/// Value of the `data-theme` attribute for `dark`.
pub fn theme_name(dark: bool) -> &'static str {
    Theme::from_dark(dark).as_str()
}

/// Whether the page should start dark. Always light during SSR.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        let system_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|query| query.matches());
        resolve(stored.as_deref(), system_dark).is_dark()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        resolve(None, false).is_dark()
    }
}

/// Mirror the theme onto `<html data-theme>`.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme_name(dark));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (dark, THEME_ATTRIBUTE);
}

/// Switch away from `current`, apply it, and remember the choice.
pub fn toggle(current: bool) -> bool {
    let next = Theme::from_dark(current).toggled();
    apply(next.is_dark());
    #[cfg(feature = "hydrate")]
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Err(err) = storage.set_item(STORAGE_KEY, next.as_str()) {
            log::warn!("theme: could not persist choice: {err:?}");
        }
    }
    next.is_dark()
}
