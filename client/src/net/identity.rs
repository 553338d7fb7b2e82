//! Identity session source: who is signed in, plus change notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider is the system of record for sessions. This module
//! wraps it behind [`IdentitySource`] so the auth state holder can subscribe
//! once and the login/register pages can trigger account actions without
//! knowing which provider is behind the trait.
//!
//! DESIGN
//! ======
//! Listeners are registered in a [`ListenerSet`] and released through an
//! RAII [`Subscription`] handle; dropping the handle unregisters the
//! listener. Everything is `Send + Sync` so the holder can live in a Leptos
//! context on both the SSR and hydrate sides.
//!
//! Two implementations:
//! - [`MemoryIdentitySource`]: in-process accounts. Used for server
//!   rendering (it never resolves, so SSR always emits the loading
//!   placeholder) and as the test double.
//! - `HttpIdentitySource` (hydrate only): talks to the provider's HTTP
//!   session endpoints and restores the session on first subscription.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use async_trait::async_trait;

use super::error::AuthError;
use super::types::{Credentials, Registration, UserIdentity};

/// Callback invoked with the new session user on every change.
pub type Listener = Arc<dyn Fn(Option<UserIdentity>) + Send + Sync>;

pub const SESSION_PATH: &str = "/session";
pub const SIGN_IN_PATH: &str = "/sign-in";
pub const SIGN_UP_PATH: &str = "/sign-up";
pub const SIGN_OUT_PATH: &str = "/sign-out";
pub const GOOGLE_OAUTH_PATH: &str = "/oauth/google";

/// External system of record for "who is logged in".
#[async_trait(?Send)]
pub trait IdentitySource: Send + Sync {
    /// Synchronous snapshot of the last known user.
    fn current_user(&self) -> Option<UserIdentity>;

    /// Register for change notifications. Dropping the returned handle
    /// releases the listener.
    fn on_change(&self, listener: Listener) -> Subscription;

    /// Email/password sign-in. Listeners are notified on success.
    async fn sign_in(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError>;

    /// Create an account and sign it in. Listeners are notified on success.
    async fn register(&self, registration: &Registration) -> Result<UserIdentity, AuthError>;

    /// End the session. Listeners are notified with `None` on success.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// URL that starts the federated (Google) sign-in flow and comes back
    /// to `return_to` afterwards.
    fn federated_sign_in_url(&self, return_to: &str) -> String;
}

// =============================================================================
// SUBSCRIPTION
// =============================================================================

/// Handle for one registered listener.
#[must_use = "dropping a Subscription releases its listener"]
pub struct Subscription {
    id: u64,
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(id: u64, release: impl FnOnce() + Send + 'static) -> Self {
        Self { id, release: Some(Box::new(release)) }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Release the listener now instead of at drop.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.release.is_some())
            .finish()
    }
}

// =============================================================================
// LISTENER SET
// =============================================================================

/// Registry of change listeners shared by identity source implementations.
#[derive(Default)]
pub struct ListenerSet {
    next_id: AtomicU64,
    entries: Mutex<Vec<(u64, Listener)>>,
}

impl ListenerSet {
    pub fn add(self: &Arc<Self>, listener: Listener) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        lock(&self.entries).push((id, listener));
        let set: Weak<Self> = Arc::downgrade(self);
        Subscription::new(id, move || {
            if let Some(set) = set.upgrade() {
                set.remove(id);
            }
        })
    }

    fn remove(&self, id: u64) {
        lock(&self.entries).retain(|(entry, _)| *entry != id);
    }

    /// Deliver `user` to every listener; returns how many were called.
    ///
    /// Listeners are cloned out first so one may unsubscribe from inside
    /// its own callback.
    pub fn notify(&self, user: &Option<UserIdentity>) -> usize {
        let listeners: Vec<Listener> = lock(&self.entries)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in &listeners {
            listener(user.clone());
        }
        listeners.len()
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Join the provider base URL and an endpoint path.
pub fn identity_endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Federated sign-in URL for `base_url` that returns to `return_to`.
pub fn google_sign_in_url(base_url: &str, return_to: &str) -> String {
    format!(
        "{}?return_to={}",
        identity_endpoint(base_url, GOOGLE_OAUTH_PATH),
        urlencoding::encode(return_to)
    )
}

/// Delay before the `attempt`-th session-restore retry (0-based), in ms.
///
/// Doubles from 500ms and caps at 30s. There is no attempt limit: an
/// unreachable provider keeps the session in `Loading`.
pub fn restore_backoff_ms(attempt: u32) -> u32 {
    const BASE_MS: u32 = 500;
    const MAX_MS: u32 = 30_000;
    BASE_MS.saturating_mul(1_u32.checked_shl(attempt).unwrap_or(u32::MAX)).min(MAX_MS)
}

// =============================================================================
// MEMORY SOURCE
// =============================================================================

/// In-process identity source.
///
/// Nothing is delivered until [`MemoryIdentitySource::emit`] or an account
/// action runs, which models a provider whose session restore has not
/// finished yet.
#[derive(Default)]
pub struct MemoryIdentitySource {
    listeners: Arc<ListenerSet>,
    current: Mutex<Option<UserIdentity>>,
    accounts: Mutex<Vec<(UserIdentity, String)>>,
}

impl MemoryIdentitySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account that `sign_in` accepts.
    #[must_use]
    pub fn with_account(self, user: UserIdentity, password: &str) -> Self {
        lock(&self.accounts).push((user, password.to_owned()));
        self
    }

    /// Publish a session change; returns the number of listeners notified.
    pub fn emit(&self, user: Option<UserIdentity>) -> usize {
        *lock(&self.current) = user.clone();
        self.listeners.notify(&user)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[async_trait(?Send)]
impl IdentitySource for MemoryIdentitySource {
    fn current_user(&self) -> Option<UserIdentity> {
        lock(&self.current).clone()
    }

    fn on_change(&self, listener: Listener) -> Subscription {
        self.listeners.add(listener)
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError> {
        let user = lock(&self.accounts)
            .iter()
            .find(|(user, password)| {
                user.email.eq_ignore_ascii_case(&credentials.email) && *password == credentials.password
            })
            .map(|(user, _)| user.clone())
            .ok_or(AuthError::InvalidCredentials)?;
        self.emit(Some(user.clone()));
        Ok(user)
    }

    async fn register(&self, registration: &Registration) -> Result<UserIdentity, AuthError> {
        let user = {
            let mut accounts = lock(&self.accounts);
            if accounts
                .iter()
                .any(|(user, _)| user.email.eq_ignore_ascii_case(&registration.email))
            {
                return Err(AuthError::EmailInUse);
            }
            let user = UserIdentity {
                id: format!("mem-{}", accounts.len() + 1),
                display_name: Some(registration.display_name.clone()),
                email: registration.email.clone(),
                avatar_url: registration.avatar_url.clone(),
            };
            accounts.push((user.clone(), registration.password.clone()));
            user
        };
        self.emit(Some(user.clone()));
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.emit(None);
        Ok(())
    }

    fn federated_sign_in_url(&self, return_to: &str) -> String {
        google_sign_in_url("", return_to)
    }
}

// =============================================================================
// HTTP SOURCE (hydrate)
// =============================================================================

#[cfg(feature = "hydrate")]
pub use http::HttpIdentitySource;

#[cfg(feature = "hydrate")]
mod http {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use gloo_net::http::{Request, Response};
    use web_sys::RequestCredentials;

    use super::{
        AuthError, Credentials, IdentitySource, Listener, ListenerSet, Registration, SESSION_PATH,
        SIGN_IN_PATH, SIGN_OUT_PATH, SIGN_UP_PATH, Subscription, UserIdentity, google_sign_in_url,
        identity_endpoint, lock, restore_backoff_ms,
    };

    /// Identity source backed by the provider's cookie-session HTTP API.
    pub struct HttpIdentitySource {
        base_url: String,
        listeners: Arc<ListenerSet>,
        current: Arc<Mutex<Option<UserIdentity>>>,
        restore_started: AtomicBool,
        resolved: Arc<AtomicBool>,
    }

    impl HttpIdentitySource {
        pub fn new(base_url: impl Into<String>) -> Self {
            Self {
                base_url: base_url.into(),
                listeners: Arc::new(ListenerSet::default()),
                current: Arc::new(Mutex::new(None)),
                restore_started: AtomicBool::new(false),
                resolved: Arc::new(AtomicBool::new(false)),
            }
        }

        fn publish(&self, user: Option<UserIdentity>) {
            publish(&self.listeners, &self.current, &self.resolved, user);
        }

        fn start_restore(&self) {
            if self.restore_started.swap(true, Ordering::SeqCst) {
                return;
            }
            let base_url = self.base_url.clone();
            let listeners = Arc::clone(&self.listeners);
            let current = Arc::clone(&self.current);
            let resolved = Arc::clone(&self.resolved);
            leptos::task::spawn_local(async move {
                let mut attempt = 0;
                loop {
                    match fetch_session(&base_url).await {
                        Ok(user) => {
                            log::debug!("session restored: signed_in={}", user.is_some());
                            publish(&listeners, &current, &resolved, user);
                            return;
                        }
                        Err(e) => {
                            let delay = restore_backoff_ms(attempt);
                            log::warn!("session restore failed (attempt {attempt}): {e}; retrying in {delay}ms");
                            gloo_timers::future::TimeoutFuture::new(delay).await;
                            attempt += 1;
                        }
                    }
                }
            });
        }

        async fn post_for_user<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<UserIdentity, AuthError> {
            let resp = Request::post(&identity_endpoint(&self.base_url, path))
                .credentials(RequestCredentials::Include)
                .json(body)
                .map_err(|e| AuthError::Provider(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            decode_user(resp).await
        }
    }

    fn publish(
        listeners: &ListenerSet,
        current: &Mutex<Option<UserIdentity>>,
        resolved: &AtomicBool,
        user: Option<UserIdentity>,
    ) {
        *lock(current) = user.clone();
        resolved.store(true, Ordering::SeqCst);
        listeners.notify(&user);
    }

    async fn fetch_session(base_url: &str) -> Result<Option<UserIdentity>, AuthError> {
        let resp = Request::get(&identity_endpoint(base_url, SESSION_PATH))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        match resp.status() {
            204 | 401 | 403 => Ok(None),
            _ => decode_user(resp).await.map(Some),
        }
    }

    async fn decode_user(resp: Response) -> Result<UserIdentity, AuthError> {
        if !resp.ok() {
            return Err(AuthError::from_status(resp.status()));
        }
        resp.json::<UserIdentity>()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))
    }

    #[async_trait(?Send)]
    impl IdentitySource for HttpIdentitySource {
        fn current_user(&self) -> Option<UserIdentity> {
            lock(&self.current).clone()
        }

        fn on_change(&self, listener: Listener) -> Subscription {
            let subscription = self.listeners.add(Arc::clone(&listener));
            if self.resolved.load(Ordering::SeqCst) {
                // Late subscriber: the restore already ran, hand over the
                // current answer instead of leaving it pending.
                listener(self.current_user());
            } else {
                self.start_restore();
            }
            subscription
        }

        async fn sign_in(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError> {
            let user = self.post_for_user(SIGN_IN_PATH, credentials).await?;
            self.publish(Some(user.clone()));
            Ok(user)
        }

        async fn register(&self, registration: &Registration) -> Result<UserIdentity, AuthError> {
            let user = self.post_for_user(SIGN_UP_PATH, registration).await?;
            self.publish(Some(user.clone()));
            Ok(user)
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            let resp = Request::post(&identity_endpoint(&self.base_url, SIGN_OUT_PATH))
                .credentials(RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(AuthError::from_status(resp.status()));
            }
            self.publish(None);
            Ok(())
        }

        fn federated_sign_in_url(&self, return_to: &str) -> String {
            google_sign_in_url(&self.base_url, return_to)
        }
    }
}
