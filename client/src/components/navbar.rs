//! Top navigation bar with theme toggle and session controls.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthStateHolder;
use crate::state::ui::UiState;
use crate::util::dark_mode;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/find-tutors", "Find Tutors"),
    ("/add-tutor", "Add Tutor"),
    ("/my-tutors", "My Tutors"),
    ("/bookings", "My Booked"),
];

const AVATAR_PLACEHOLDER: &str = "https://via.placeholder.com/40";

#[component]
pub fn Navbar() -> impl IntoView {
    let holder = expect_context::<AuthStateHolder>();
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = holder.state();
    let logout_error = RwSignal::new(None::<String>);

    let on_toggle_theme = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };
    let on_toggle_menu = move |_| ui.update(|u| u.menu_open = !u.menu_open);
    let close_menu = move |_| ui.update(|u| *u = u.after_navigation());

    let on_logout = move |_| {
        let source = holder.source();
        leptos::task::spawn_local(async move {
            match source.sign_out().await {
                Ok(()) => logout_error.set(None),
                Err(e) => {
                    leptos::logging::warn!("sign out failed: {e}");
                    logout_error.set(Some(format!("Logout failed: {e}")));
                }
            }
        });
    };

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|(href, label)| {
                view! {
                    <A href=*href exact=true attr:class="navbar__link" on:click=close_menu>
                        {*label}
                    </A>
                }
            })
            .collect_view()
    };

    let session_controls = move || {
        let state = auth.get();
        if state.is_loading() {
            return view! { <div class="navbar__user navbar__user--pending"></div> }.into_any();
        }
        match state.user {
            Some(user) => {
                let avatar = user.avatar_url.clone().unwrap_or_else(|| AVATAR_PLACEHOLDER.to_owned());
                let name = user.label().to_owned();
                let on_logout = on_logout.clone();
                view! {
                    <div class="navbar__user">
                        <img class="navbar__avatar" src=avatar alt="User Profile" title=name.clone()/>
                        <span class="navbar__name">{name}</span>
                        <button class="btn btn--danger" on:click=on_logout aria-label="Logout">
                            "Log Out"
                        </button>
                    </div>
                }
                    .into_any()
            }
            None => view! {
                <div class="navbar__guest">
                    <A href="/login" attr:class="btn btn--success">"Login"</A>
                    <A href="/register" attr:class="btn btn--primary">"Register"</A>
                </div>
            }
                .into_any(),
        }
    };

    view! {
        <nav class="navbar" class:navbar--open=move || ui.get().menu_open>
            <A href="/" attr:class="navbar__logo" attr:aria-label="EduBridge Logo">"EduBridge"</A>
            <div class="navbar__links">{links}</div>
            <div class="navbar__actions">
                <button
                    class="navbar__theme"
                    on:click=on_toggle_theme
                    aria-label="Toggle Dark Mode"
                    title=move || format!("Switch to {} mode", dark_mode::theme_name(!ui.get().dark_mode))
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                {session_controls}
            </div>
            <button class="navbar__hamburger" on:click=on_toggle_menu aria-label="Toggle mobile menu">
                "☰"
            </button>
            <Show when=move || logout_error.get().is_some()>
                <p class="navbar__error">{move || logout_error.get().unwrap_or_default()}</p>
            </Show>
        </nav>
    }
}
