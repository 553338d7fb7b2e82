//! Protected page listing the current user's own listings with edit and
//! delete actions.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::loader::Loader;
use crate::net::api::ApiClient;
use crate::net::types::Tutor;
use crate::state::auth::AuthStateHolder;
use crate::state::tutors::remove_tutor;

#[component]
pub fn MyTutorsPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let auth = expect_context::<AuthStateHolder>().state();
    let items = RwSignal::new(None::<Vec<Tutor>>);
    let error = RwSignal::new(None::<String>);
    let pending_delete = RwSignal::new(None::<String>);
    let owner_email = Memo::new(move |_| auth.get().user.map(|user| user.email));

    Effect::new(move || {
        let Some(email) = owner_email.get() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api.get_value().fetch_tutors_by_owner(&email).await {
                Ok(list) => items.set(Some(list)),
                Err(e) => {
                    leptos::logging::warn!("fetch own tutors failed: {e}");
                    items.set(Some(Vec::new()));
                    error.set(Some("Failed to fetch your tutorials.".to_owned()));
                }
            }
        });
    });

    let on_confirm_delete = move |_| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        leptos::task::spawn_local(async move {
            match api.get_value().delete_tutor(&id).await {
                Ok(()) => {
                    items.update(|list| {
                        if let Some(list) = list {
                            remove_tutor(list, &id);
                        }
                    });
                    error.set(None);
                }
                Err(e) => {
                    leptos::logging::warn!("delete tutor {id} failed: {e}");
                    error.set(Some(format!("Failed to delete tutorial: {e}")));
                }
            }
        });
    };

    let table = move || match items.get() {
        None => view! { <Loader message="Loading your tutorials..."/> }.into_any(),
        Some(list) if list.is_empty() => view! {
            <div class="empty-state">
                <h2>"You haven't added any tutorials yet."</h2>
                <A href="/add-tutor" attr:class="btn btn--primary">"Add New Tutorial"</A>
            </div>
        }
            .into_any(),
        Some(list) => view! {
            <div class="table-wrap">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Image"</th>
                            <th>"Name"</th>
                            <th>"Language"</th>
                            <th>"Price ($)"</th>
                            <th>"Description"</th>
                            <th>"Review"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {list
                            .into_iter()
                            .map(|tutor| {
                                let edit_href = format!("/update-tutor/{}", tutor.id);
                                let id = tutor.id.clone();
                                view! {
                                    <tr>
                                        <td><img class="table__thumb" src=tutor.image alt="Thumbnail"/></td>
                                        <td>{tutor.tutor_name}</td>
                                        <td>{tutor.language}</td>
                                        <td>{format!("${}", tutor.price)}</td>
                                        <td>{tutor.description}</td>
                                        <td>{tutor.review}</td>
                                        <td class="table__actions">
                                            <A href=edit_href attr:class="btn btn--small btn--warning" attr:title="Update">
                                                "Edit"
                                            </A>
                                            <button
                                                class="btn btn--small btn--danger"
                                                title="Delete"
                                                on:click=move |_| pending_delete.set(Some(id.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
            .into_any(),
    };

    view! {
        <Title text="My Tutorials"/>
        <div class="list-page">
            <h1 class="list-page__title">"My Tutorials"</h1>
            <Show when=move || error.get().is_some()>
                <p class="form-message form-message--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {table}
            <Show when=move || pending_delete.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| pending_delete.set(None)>
                    <div class="dialog" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                        <h2 class="dialog__title">"Are you sure?"</h2>
                        <p>"This will permanently delete the tutorial."</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| pending_delete.set(None)>"Cancel"</button>
                            <button class="btn btn--danger" on:click=on_confirm_delete>"Yes, delete it!"</button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
