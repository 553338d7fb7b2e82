//! Protected tutor detail page with booking.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::loader::Loader;
use crate::net::api::ApiClient;
use crate::net::types::{NewBooking, Tutor};
use crate::state::auth::AuthStateHolder;
use crate::util::clock::now_iso8601;

const IMAGE_FALLBACK: &str = "https://via.placeholder.com/400x400?text=No+Image";

#[component]
pub fn TutorDetailsPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let params = use_params_map();
    let id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let tutor = LocalResource::new(move || {
        let id = id.get();
        async move { api.get_value().fetch_tutor(&id).await }
    });

    view! {
        <Suspense fallback=|| view! { <Loader message="Loading tutor details..."/> }>
            {move || {
                tutor
                    .get()
                    .map(|result| match result {
                        Ok(tutor) => view! { <TutorDetail tutor=tutor/> }.into_any(),
                        Err(e) => {
                            leptos::logging::warn!("fetch tutor failed: {e}");
                            view! { <p class="details__missing">"Tutor not found."</p> }.into_any()
                        }
                    })
            }}
        </Suspense>
    }
}

#[component]
fn TutorDetail(tutor: Tutor) -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let auth = expect_context::<AuthStateHolder>().state();
    let status = RwSignal::new(None::<(bool, String)>);
    let busy = RwSignal::new(false);
    let title = format!("{} - Details", tutor.tutor_name);
    let stored = StoredValue::new(tutor.clone());

    let on_book = move |_| {
        if busy.get_untracked() {
            return;
        }
        let Some(student) = auth.get_untracked().user else {
            status.set(Some((false, "Please login first!".to_owned())));
            return;
        };
        let booking = NewBooking::for_tutor(&stored.get_value(), &student, now_iso8601());
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api.get_value().create_booking(&booking).await {
                Ok(()) => status.set(Some((true, "Booked successfully!".to_owned()))),
                Err(e) => {
                    leptos::logging::warn!("booking failed: {e}");
                    status.set(Some((false, format!("Booking failed: {e}"))));
                }
            }
            busy.set(false);
        });
    };

    let image = if tutor.image.trim().is_empty() { IMAGE_FALLBACK.to_owned() } else { tutor.image };
    let description = if tutor.description.trim().is_empty() {
        "No detailed description available.".to_owned()
    } else {
        tutor.description
    };

    view! {
        <Title text=title/>
        <div class="details">
            <img class="details__image" src=image alt=tutor.tutor_name.clone()/>
            <div class="details__body">
                <h1 class="details__name">{tutor.tutor_name}</h1>
                <dl class="details__facts">
                    <dt>"Language"</dt>
                    <dd>{tutor.language}</dd>
                    <dt>"Price"</dt>
                    <dd>{format!("${}", tutor.price)}</dd>
                    <dt>"Reviews"</dt>
                    <dd>{tutor.review}</dd>
                </dl>
                <h2 class="details__subtitle">"About Tutor"</h2>
                <p class="details__description">{description}</p>
                <button class="btn btn--primary" on:click=on_book disabled=move || busy.get()>
                    "Book This Tutor"
                </button>
                {move || {
                    status
                        .get()
                        .map(|(ok, text)| {
                            view! {
                                <p class="form-message" class:form-message--ok=ok class:form-message--error=!ok>
                                    {text}
                                </p>
                            }
                        })
                }}
            </div>
        </div>
    }
}
