//! Inline spinner with an optional caption.

use leptos::prelude::*;

#[component]
pub fn Loader(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loader-block" role="status">
            <span class="loader"></span>
            {message.map(|text| view! { <p class="loader-block__text">{text}</p> })}
        </div>
    }
}
