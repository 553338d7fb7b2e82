//! Listing form fields shared by the add and update pages.

use leptos::prelude::*;

use crate::state::tutors::LANGUAGES;
use crate::util::validation::TutorForm;

/// Two-way bound inputs for every editable listing field.
#[component]
pub fn TutorFormFields(form: RwSignal<TutorForm>) -> impl IntoView {
    let field = move |label: &'static str,
                      kind: &'static str,
                      get: fn(&TutorForm) -> String,
                      set: fn(&mut TutorForm, String)| {
        view! {
            <label class="tutor-form__label">
                {label}
                <input
                    class="tutor-form__input"
                    type=kind
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="tutor-form__grid">
            {field("Tutor Name", "text", |f| f.tutor_name.clone(), |f, v| f.tutor_name = v)}
            {field("Tutor Email", "email", |f| f.tutor_email.clone(), |f, v| f.tutor_email = v)}
            {field("Image URL", "url", |f| f.image.clone(), |f, v| f.image = v)}
            <label class="tutor-form__label">
                "Language"
                <select
                    class="tutor-form__input"
                    prop:value=move || form.with(|f| f.language.clone())
                    on:change=move |ev| form.update(|f| f.language = event_target_value(&ev))
                >
                    <option value="">"Select a language"</option>
                    {LANGUAGES.iter().map(|lang| view! { <option value=*lang>{*lang}</option> }).collect_view()}
                </select>
            </label>
            {field("Price ($)", "number", |f| f.price.clone(), |f, v| f.price = v)}
        </div>
        <label class="tutor-form__label tutor-form__label--wide">
            "Description"
            <textarea
                class="tutor-form__input"
                rows="4"
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
            ></textarea>
        </label>
    }
}
