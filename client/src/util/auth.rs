//! Access-gate decisions and login return paths.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the login/register pages must agree on one redirect
//! policy: unauthenticated visitors go to `/login?from=<path>`, and a
//! successful sign-in sends them back to `<path>`.
//!
//! DESIGN
//! ======
//! [`evaluate`] is a pure function of the session state and the current path,
//! so the gate re-derives its outcome from scratch on every state change. A
//! stale `Resolved(absent)` can therefore never leave a redirect behind once
//! the user is signed in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::identity::IdentitySource;
use crate::state::auth::{AuthState, SessionStatus};

/// Fixed login entry point.
pub const LOGIN_PATH: &str = "/login";
/// Query parameter carrying the remembered origin.
pub const RETURN_PARAM: &str = "from";
const HOME_PATH: &str = "/";

/// Where a redirect goes and where the user came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    target_path: String,
    origin_path: String,
}

impl NavigationIntent {
    /// Intent to send the user to login and back to `origin_path`.
    pub fn to_login(origin_path: &str) -> Self {
        Self { target_path: LOGIN_PATH.to_owned(), origin_path: origin_path.to_owned() }
    }

    pub fn target_path(&self) -> &str {
        &self.target_path
    }

    pub fn origin_path(&self) -> &str {
        &self.origin_path
    }

    /// Redirect URL with the origin encoded in the query string.
    pub fn href(&self) -> String {
        format!(
            "{}?{RETURN_PARAM}={}",
            self.target_path,
            urlencoding::encode(&self.origin_path)
        )
    }
}

/// Gate phase, derived from the session status and user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePhase {
    Pending,
    Authorized,
    Denied,
}

/// What the gate renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Session not resolved: show the loading placeholder.
    Placeholder,
    /// Signed in: render the protected content unchanged.
    Render,
    /// Signed out: redirect to login, remembering the attempted path.
    Redirect(NavigationIntent),
}

impl GateOutcome {
    pub fn phase(&self) -> GatePhase {
        match self {
            Self::Placeholder => GatePhase::Pending,
            Self::Render => GatePhase::Authorized,
            Self::Redirect(_) => GatePhase::Denied,
        }
    }
}

/// Decide what a protected route at `current_path` renders for `state`.
///
/// Never redirects and never renders content while the session is loading.
pub fn evaluate(state: &AuthState, current_path: &str) -> GateOutcome {
    match (state.status, state.user.is_some()) {
        (SessionStatus::Loading, _) => GateOutcome::Placeholder,
        (SessionStatus::Resolved, true) => GateOutcome::Render,
        (SessionStatus::Resolved, false) => GateOutcome::Redirect(NavigationIntent::to_login(current_path)),
    }
}

/// Sanitize a remembered `from` value into a same-origin path.
///
/// Anything that is not an absolute local path (`//host`, `https://...`,
/// `/\host`) or that points back at the login page falls back to `/`.
pub fn return_path(from: Option<&str>) -> String {
    let Some(raw) = from.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return HOME_PATH.to_owned();
    };
    let local = raw.starts_with('/') && !raw.starts_with("//") && !raw.starts_with("/\\");
    let path_only = raw.split(['?', '#']).next().unwrap_or(raw);
    if !local || path_only == LOGIN_PATH || path_only == "/register" {
        return HOME_PATH.to_owned();
    }
    raw.to_owned()
}

/// Where the login/register page should send the user, if anywhere.
///
/// `Some` only once the session has resolved with a user.
pub fn post_login_destination(state: &AuthState, from: Option<&str>) -> Option<String> {
    state.is_signed_in().then(|| return_path(from))
}

/// Link between the login and register pages that keeps the remembered
/// origin.
pub fn auth_page_href(page: &str, from: Option<&str>) -> String {
    match from.filter(|origin| !origin.is_empty()) {
        Some(origin) => format!("{page}?{RETURN_PARAM}={}", urlencoding::encode(origin)),
        None => page.to_owned(),
    }
}

/// Absolute URL the federated provider returns to after sign-in.
pub fn federated_return_to(origin: &str, from: Option<&str>) -> String {
    format!("{}{}", origin.trim_end_matches('/'), return_path(from))
}

/// Send the browser to the provider's federated sign-in page.
pub fn start_federated_sign_in(source: &dyn IdentitySource, from: Option<&str>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let origin = window.location().origin().unwrap_or_default();
            let url = source.federated_sign_in_url(&federated_return_to(&origin, from));
            let _ = window.location().set_href(&url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (source, from);
}

/// Gate outcome that follows the session signal and the current path.
pub fn gate_outcome(auth: ReadSignal<AuthState>, path: Signal<String>) -> Memo<GateOutcome> {
    Memo::new(move |_| evaluate(&auth.get(), &path.get()))
}

/// Post-login destination that follows the session signal: `None` until the
/// session resolves with a user.
pub fn login_return_target(auth: ReadSignal<AuthState>, from: Memo<Option<String>>) -> Memo<Option<String>> {
    Memo::new(move |_| post_login_destination(&auth.get(), from.get().as_deref()))
}

/// Replace-navigate to `destination`, if any. Returns whether it navigated.
pub fn follow_login_return<F>(destination: Option<&str>, navigate: &F) -> bool
where
    F: Fn(&str, NavigateOptions),
{
    let Some(destination) = destination else {
        return false;
    };
    navigate(destination, NavigateOptions { replace: true, ..NavigateOptions::default() });
    true
}

/// Navigate to the remembered origin as soon as the session resolves with a
/// user. Installed by the login and register pages.
pub fn install_login_return<F>(auth: ReadSignal<AuthState>, from: Memo<Option<String>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let target = login_return_target(auth, from);
    Effect::new(move || {
        follow_login_return(target.get().as_deref(), &navigate);
    });
}
