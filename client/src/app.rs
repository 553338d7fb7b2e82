//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{access_gate::AccessGate, footer::Footer, navbar::Navbar};
use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::net::identity::IdentitySource;
use crate::pages::{
    add_tutor::AddTutorPage, find_tutors::FindTutorsPage, home::HomePage, login::LoginPage,
    my_bookings::MyBookingsPage, my_tutors::MyTutorsPage, not_found::NotFoundPage, register::RegisterPage,
    tutor_details::TutorDetailsPage, update_tutor::UpdateTutorPage,
};
use crate::state::auth::AuthStateHolder;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Runtime configuration is written into `<meta>` tags so the hydrated app
/// reads the same values the server rendered with.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let meta = AppConfig::current()
        .meta_entries()
        .into_iter()
        .map(|(name, content)| view! { <meta name=name content=content/> })
        .collect_view();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {meta}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Identity source for this render target.
///
/// The server never restores a session, so SSR always renders protected
/// routes in their pending state and hydration resolves them.
fn identity_source(config: &AppConfig) -> Arc<dyn IdentitySource> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(crate::net::identity::HttpIdentitySource::new(config.identity_base_url.clone()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Arc::new(crate::net::identity::MemoryIdentitySource::new())
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::current();
    let api = ApiClient::new(config.api_base_url.clone());
    let auth = AuthStateHolder::new(identity_source(&config));
    auth.subscribe();
    on_cleanup({
        let auth = auth.clone();
        move || auth.dispose()
    });

    let ui = RwSignal::new(UiState::default());
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    provide_context(config);
    provide_context(api);
    provide_context(auth);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/edubridge.css"/>
        <Title text="EduBridge"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("find-tutors") view=FindTutorsPage/>
                    <Route path=(StaticSegment("find-tutors"), ParamSegment("language")) view=FindTutorsPage/>
                    <Route
                        path=StaticSegment("add-tutor")
                        view=|| view! { <AccessGate><AddTutorPage/></AccessGate> }
                    />
                    <Route
                        path=StaticSegment("my-tutors")
                        view=|| view! { <AccessGate><MyTutorsPage/></AccessGate> }
                    />
                    <Route
                        path=StaticSegment("bookings")
                        view=|| view! { <AccessGate><MyBookingsPage/></AccessGate> }
                    />
                    <Route
                        path=(StaticSegment("update-tutor"), ParamSegment("id"))
                        view=|| view! { <AccessGate><UpdateTutorPage/></AccessGate> }
                    />
                    <Route
                        path=(StaticSegment("tutor"), ParamSegment("id"))
                        view=|| view! { <AccessGate><TutorDetailsPage/></AccessGate> }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
