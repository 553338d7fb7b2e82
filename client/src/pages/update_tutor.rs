//! Protected page for editing one of the current user's listings.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::add_tutor::FormMessage;
use super::tutor_form::TutorFormFields;
use crate::components::loader::Loader;
use crate::net::api::ApiClient;
use crate::net::types::TutorDraft;
use crate::util::validation::TutorForm;

#[component]
pub fn UpdateTutorPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let params = use_params_map();
    let id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let form = RwSignal::new(TutorForm::default());
    let loaded = RwSignal::new(false);
    let message = RwSignal::new(None::<(bool, String)>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let id = id.get();
        loaded.set(false);
        leptos::task::spawn_local(async move {
            match api.get_value().fetch_tutor(&id).await {
                Ok(tutor) => {
                    let draft = TutorDraft {
                        tutor_name: tutor.tutor_name,
                        tutor_email: tutor.tutor_email,
                        image: tutor.image,
                        language: tutor.language,
                        price: tutor.price,
                        description: tutor.description,
                    };
                    form.set(TutorForm::from_draft(&draft));
                }
                Err(e) => {
                    leptos::logging::warn!("fetch tutor {id} failed: {e}");
                    message.set(Some((false, format!("Could not load this listing: {e}"))));
                }
            }
            loaded.set(true);
        });
    });

    let saved = RwSignal::new(false);
    let navigate = use_navigate();
    Effect::new(move || {
        if saved.get() {
            navigate("/my-tutors", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = match form.get_untracked().validate() {
            Ok(draft) => draft,
            Err(e) => {
                message.set(Some((false, e.to_owned())));
                return;
            }
        };
        busy.set(true);
        let id = id.get_untracked();
        leptos::task::spawn_local(async move {
            match api.get_value().update_tutor(&id, &draft).await {
                Ok(()) => saved.set(true),
                Err(e) => {
                    leptos::logging::warn!("update tutor {id} failed: {e}");
                    message.set(Some((false, format!("Failed to update tutor: {e}"))));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Title text="Update Tutor"/>
        <div class="form-page">
            <Show when=move || loaded.get() fallback=|| view! { <Loader message="Loading listing..."/> }>
                <form class="tutor-form" on:submit=on_submit>
                    <h1 class="form-page__title">"Update Tutor"</h1>
                    <TutorFormFields form=form/>
                    <FormMessage message=message/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save Changes"
                    </button>
                </form>
            </Show>
        </div>
    }
}
