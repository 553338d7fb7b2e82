//! Protected page for creating a tutor listing owned by the current user.

use leptos::prelude::*;
use leptos_meta::Title;

use super::tutor_form::TutorFormFields;
use crate::net::api::ApiClient;
use crate::net::types::NewTutor;
use crate::state::auth::AuthStateHolder;
use crate::util::clock::now_iso8601;
use crate::util::validation::TutorForm;

#[component]
pub fn AddTutorPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let auth = expect_context::<AuthStateHolder>().state();
    let form = RwSignal::new(TutorForm::default());
    let message = RwSignal::new(None::<(bool, String)>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(owner) = auth.get_untracked().user else {
            return;
        };
        let draft = match form.get_untracked().validate() {
            Ok(draft) => draft,
            Err(e) => {
                message.set(Some((false, e.to_owned())));
                return;
            }
        };
        let listing = NewTutor::owned_by(&owner, draft, now_iso8601());
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api.get_value().create_tutor(&listing).await {
                Ok(()) => {
                    form.set(TutorForm::default());
                    message.set(Some((true, "Tutor added successfully!".to_owned())));
                }
                Err(e) => {
                    leptos::logging::warn!("create tutor failed: {e}");
                    message.set(Some((false, format!("Failed to add tutor: {e}"))));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <Title text="Add Tutor"/>
        <div class="form-page">
            <form class="tutor-form" on:submit=on_submit>
                <h1 class="form-page__title">"Add a New Tutor"</h1>
                <TutorFormFields form=form/>
                <FormMessage message=message/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Add Tutor"
                </button>
            </form>
        </div>
    }
}

/// Success or error line under a form.
#[component]
pub fn FormMessage(message: RwSignal<Option<(bool, String)>>) -> impl IntoView {
    move || {
        message.get().map(|(ok, text)| {
            view! {
                <p class="form-message" class:form-message--ok=ok class:form-message--error=!ok>
                    {text}
                </p>
            }
        })
    }
}
