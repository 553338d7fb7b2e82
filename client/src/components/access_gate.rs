//! Route guard for pages that need a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected route. The decision itself lives in
//! [`crate::util::auth::gate_outcome`]; this component only maps the outcome to
//! a view and re-runs it whenever the session signal or the path changes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::config::AppConfig;
use crate::state::auth::AuthStateHolder;
use crate::util::auth::{GateOutcome, gate_outcome};

/// Render `children` only for a signed-in user.
///
/// While the session is loading a placeholder is shown; once it resolves
/// without a user the visitor is sent to login with the current path
/// remembered.
#[component]
pub fn AccessGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthStateHolder>().state();
    let location = use_location();
    let outcome = gate_outcome(auth, location.pathname.into());

    move || match outcome.get() {
        GateOutcome::Placeholder => view! { <LoadingPlaceholder/> }.into_any(),
        GateOutcome::Render => children().into_any(),
        GateOutcome::Redirect(intent) => {
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=intent.href() options=options/> }.into_any()
        }
    }
}

/// Spinner shown while the session restore is in flight.
///
/// After the configured delay it adds a "still connecting" line; the session
/// itself is left alone.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    let slow = RwSignal::new(false);
    let notice_after_ms = use_context::<AppConfig>()
        .unwrap_or_default()
        .session_notice_after_ms;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(notice_after_ms).await;
        let _ = slow.try_set(true);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = notice_after_ms;

    view! {
        <div class="gate-placeholder" role="status" aria-live="polite">
            <span class="loader"></span>
            <p class="gate-placeholder__text">"Checking your session..."</p>
            <Show when=move || slow.get()>
                <p class="gate-placeholder__notice">
                    "Still connecting to your account. Check your connection; this page will continue automatically."
                </p>
            </Show>
        </div>
    }
}
