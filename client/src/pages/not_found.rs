//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found"/>
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href="/" attr:class="btn btn--primary">"Back to Home"</A>
        </div>
    }
}
