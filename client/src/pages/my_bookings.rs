//! Protected page listing the current user's bookings with a one-time
//! review action per booking.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::loader::Loader;
use crate::net::api::ApiClient;
use crate::net::types::Booking;
use crate::state::auth::AuthStateHolder;
use crate::state::bookings::BookingsState;

#[component]
pub fn MyBookingsPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let auth = expect_context::<AuthStateHolder>().state();
    let bookings = RwSignal::new(BookingsState { loading: true, ..BookingsState::default() });
    let student_email = Memo::new(move |_| auth.get().user.map(|user| user.email));

    Effect::new(move || {
        let Some(email) = student_email.get() else {
            return;
        };
        bookings.update(|b| b.loading = true);
        leptos::task::spawn_local(async move {
            match api.get_value().fetch_bookings(&email).await {
                Ok(items) => bookings.update(|b| b.loaded(items)),
                Err(e) => {
                    leptos::logging::warn!("fetch bookings failed: {e}");
                    bookings.update(|b| b.failed(format!("Failed to load bookings: {e}")));
                }
            }
        });
    });

    let on_review = move |booking: Booking| {
        let mut started = false;
        bookings.update(|b| started = b.begin_review(&booking.id));
        if !started {
            return;
        }
        leptos::task::spawn_local(async move {
            match api.get_value().submit_review(&booking.tutor_id, &booking.id).await {
                Ok(()) => {
                    bookings.update(|b| {
                        b.mark_reviewed(&booking.id);
                    });
                }
                Err(e) => {
                    leptos::logging::warn!("review for booking {} failed: {e}", booking.id);
                    bookings.update(|b| b.failed(format!("Failed to submit review: {e}")));
                }
            }
        });
    };

    let cards = move || {
        let state = bookings.get();
        if state.loading {
            return view! { <Loader message="Loading bookings..."/> }.into_any();
        }
        if state.items.is_empty() {
            return view! {
                <div class="empty-state">
                    <h2>"You haven't booked any tutors yet."</h2>
                </div>
            }
                .into_any();
        }
        let reviewing = state.reviewing.clone();
        view! {
            <div class="cards">
                {state
                    .items
                    .into_iter()
                    .map(|booking| {
                        let in_flight = reviewing.as_deref() == Some(booking.id.as_str());
                        let reviewed = booking.reviewed;
                        let label = if reviewed {
                            "Reviewed"
                        } else if in_flight {
                            "Submitting..."
                        } else {
                            "Review"
                        };
                        let target = booking.clone();
                        view! {
                            <div class="card">
                                <img class="card__image" src=booking.image alt=booking.language.clone()/>
                                <div class="card__body">
                                    <h3 class="card__title">{booking.language}</h3>
                                    <p class="card__price">{format!("Price: ${}", booking.price)}</p>
                                    <p class="card__meta">{format!("Tutor Email: {}", booking.tutor_email)}</p>
                                    <button
                                        class="btn btn--primary"
                                        disabled=reviewed || in_flight
                                        on:click=move |_| on_review(target.clone())
                                    >
                                        {label}
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
            .into_any()
    };

    view! {
        <Title text="My Bookings"/>
        <div class="list-page">
            <h1 class="list-page__title">"My Bookings"</h1>
            <Show when=move || bookings.get().error.is_some()>
                <p class="form-message form-message--error">
                    {move || bookings.get().error.unwrap_or_default()}
                </p>
            </Show>
            {cards}
        </div>
    }
}
