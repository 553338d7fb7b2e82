//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the access gate and user-aware components to coordinate login
//! redirects and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! [`AuthStateHolder`] is the single writer of [`AuthState`]. It owns one
//! subscription to the identity source for the lifetime of the app and
//! exposes the state as a read-only signal. Consumers never write it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

use crate::net::identity::{IdentitySource, Subscription};
use crate::net::types::UserIdentity;

/// Whether the identity source has answered yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No answer from the identity source yet (session restore in flight).
    #[default]
    Loading,
    /// The source has reported a user, or the confirmed absence of one.
    Resolved,
}

/// Authentication state tracking the current user and resolution status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserIdentity>,
    pub status: SessionStatus,
}

impl AuthState {
    /// State after the identity source reported `user`.
    pub fn resolved(user: Option<UserIdentity>) -> Self {
        Self { user, status: SessionStatus::Resolved }
    }

    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }

    /// Resolved with a user present.
    pub fn is_signed_in(&self) -> bool {
        self.status == SessionStatus::Resolved && self.user.is_some()
    }
}

/// Process-wide owner of the session state.
///
/// Cheap to clone; clones share the signal and the subscription slot, so
/// the holder can be handed to components through `provide_context`.
#[derive(Clone)]
pub struct AuthStateHolder {
    state: RwSignal<AuthState>,
    source: Arc<dyn IdentitySource>,
    subscription: Arc<Mutex<Option<Subscription>>>,
}

impl AuthStateHolder {
    /// Create the holder in `Loading`. Nothing is delivered until
    /// [`subscribe`](Self::subscribe) runs.
    pub fn new(source: Arc<dyn IdentitySource>) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            source,
            subscription: Arc::new(Mutex::new(None)),
        }
    }

    /// Read-only view of the session state.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// The identity source, for account actions (sign in, sign out, ...).
    pub fn source(&self) -> Arc<dyn IdentitySource> {
        Arc::clone(&self.source)
    }

    /// Register with the identity source and return the subscription id.
    ///
    /// Idempotent: when already subscribed, the existing id is returned and
    /// no second listener is registered.
    pub fn subscribe(&self) -> u64 {
        let mut slot = self.subscription.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = slot.as_ref() {
            return existing.id();
        }
        let state = self.state;
        let subscription = self.source.on_change(Arc::new(move |user| {
            state.set(AuthState::resolved(user));
        }));
        let id = subscription.id();
        *slot = Some(subscription);
        id
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Release the identity subscription. Later notifications are ignored;
    /// the last known state stays readable.
    pub fn dispose(&self) {
        let released = self
            .subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(subscription) = released {
            subscription.unsubscribe();
        }
    }

    /// Full session-state reset: back to `Loading` with no user. The only way
    /// the access gate returns to its pending phase.
    pub fn reset(&self) {
        self.state.set(AuthState::default());
    }
}

impl fmt::Debug for AuthStateHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthStateHolder")
            .field("state", &self.state.get_untracked())
            .field("subscribed", &self.is_subscribed())
            .finish_non_exhaustive()
    }
}
