//! Public browse page, optionally pre-filtered by a language route segment.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::loader::Loader;
use crate::net::api::ApiClient;
use crate::net::types::Tutor;
use crate::state::tutors::{DESCRIPTION_PREVIEW_CHARS, browse_heading, filter_tutors, truncate_description};

#[component]
pub fn FindTutorsPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let params = use_params_map();
    let route_language = Memo::new(move |_| params.read().get("language"));
    let search = RwSignal::new(String::new());

    let tutors = LocalResource::new(move || async move { api.get_value().fetch_tutors().await });

    let rows = move || {
        tutors.get().map(|result| match result {
            Ok(all) => {
                let visible = filter_tutors(&all, route_language.get().as_deref(), &search.get());
                if visible.is_empty() {
                    view! { <p class="browse__empty">"No tutors found."</p> }.into_any()
                } else {
                    view! { <TutorTable tutors=visible/> }.into_any()
                }
            }
            Err(e) => {
                leptos::logging::warn!("fetch tutors failed: {e}");
                view! { <p class="browse__error">"Tutors could not be loaded. Try again later."</p> }.into_any()
            }
        })
    };

    view! {
        <Title text="Find Tutors"/>
        <div class="browse">
            <h1 class="browse__title">{move || browse_heading(route_language.get().as_deref())}</h1>
            <Show when=move || route_language.get().is_none()>
                <input
                    class="browse__search"
                    type="search"
                    placeholder="Search by language (e.g. Spanish)"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </Show>
            <Suspense fallback=|| view! { <Loader message="Loading tutors..."/> }>{rows}</Suspense>
        </div>
    }
}

#[component]
fn TutorTable(tutors: Vec<Tutor>) -> impl IntoView {
    view! {
        <div class="table-wrap">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Image"</th>
                        <th>"Name"</th>
                        <th>"Language"</th>
                        <th>"Price"</th>
                        <th>"Description"</th>
                        <th>"Reviews"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {tutors
                        .into_iter()
                        .map(|tutor| {
                            let href = format!("/tutor/{}", tutor.id);
                            view! {
                                <tr>
                                    <td><img class="table__thumb" src=tutor.image alt=tutor.tutor_name.clone()/></td>
                                    <td>{tutor.tutor_name}</td>
                                    <td>{tutor.language}</td>
                                    <td>{format!("${}", tutor.price)}</td>
                                    <td>{truncate_description(&tutor.description, DESCRIPTION_PREVIEW_CHARS)}</td>
                                    <td>{tutor.review}</td>
                                    <td><A href=href attr:class="btn btn--small">"Details"</A></td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
