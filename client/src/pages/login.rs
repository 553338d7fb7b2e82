//! Login page: email/password and Google sign-in.
//!
//! Signing in only talks to the identity source. The redirect back to the
//! remembered origin is driven by the session signal, so it also fires for
//! a visitor who lands here already signed in.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::AuthStateHolder;
use crate::util::auth::{RETURN_PARAM, auth_page_href, install_login_return, start_federated_sign_in};
use crate::util::validation::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let holder = expect_context::<AuthStateHolder>();
    let query = use_query_map();
    let from = Memo::new(move |_| query.read().get(RETURN_PARAM));
    install_login_return(holder.state(), from, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let source = holder.source();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let source = source.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = source.sign_in(&credentials).await {
                leptos::logging::warn!("sign in failed: {e}");
                error.set(Some(e.to_string()));
            }
            busy.set(false);
        });
    };

    let google_source = holder.source();
    let on_google = move |_| start_federated_sign_in(google_source.as_ref(), from.get_untracked().as_deref());
    let register_href = move || auth_page_href("/register", from.get().as_deref());

    view! {
        <Title text="Login | EduBridge"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Welcome Back"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <div class="auth-form__password">
                            <input
                                class="auth-form__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="••••••••"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="auth-form__reveal"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <div class="auth-card__divider">"or"</div>
                <button class="btn btn--outline" on:click=on_google>"Continue with Google"</button>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <A href=register_href>"Register"</A>
                </p>
            </div>
        </div>
    }
}
