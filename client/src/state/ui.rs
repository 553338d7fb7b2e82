//! Local UI chrome state (theme, mobile menu).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of session and listing state so the navbar
//! can change them without touching anything the pages fetch.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the navbar: theme and mobile menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub menu_open: bool,
}

impl UiState {
    /// State after following a navbar link: the mobile menu closes.
    pub fn after_navigation(&self) -> Self {
        Self { menu_open: false, ..self.clone() }
    }
}
