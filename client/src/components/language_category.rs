//! Home page grid of language categories, each linking to a filtered browse
//! page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::ApiClient;
use crate::net::types::Category;

#[component]
pub fn LanguageCategory() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let categories = LocalResource::new(move || {
        let api = api.clone();
        async move { api.fetch_categories().await }
    });

    view! {
        <section class="categories">
            <h2 class="section-title">"Explore " <span class="accent">"Language"</span> " Categories"</h2>
            <p class="section-subtitle">"Find the perfect tutor by exploring languages you're passionate about."</p>
            <Suspense fallback=move || view! { <span class="loader"></span> }>
                {move || {
                    categories
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <div class="categories__grid">
                                        {list.into_iter().map(|cat| view! { <CategoryCard category=cat/> }).collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                leptos::logging::warn!("failed to fetch categories: {e}");
                                view! { <p class="categories__error">"Categories are unavailable right now."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn CategoryCard(category: Category) -> impl IntoView {
    let href = format!("/find-tutors/{}", urlencoding::encode(&category.path));
    let blurb = format!("Discover {} tutors", category.title);
    view! {
        <A href=href attr:class="categories__card">
            <h3 class="categories__title">{category.title}</h3>
            <p class="categories__blurb">{blurb}</p>
            <span class="categories__arrow" aria-hidden="true">"→"</span>
        </A>
    }
}
