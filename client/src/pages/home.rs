//! Public landing page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::banner::Banner;
use crate::components::language_category::LanguageCategory;
use crate::components::stats_section::StatsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home"/>
        <div class="home">
            <Banner/>
            <StatsSection/>
            <LanguageCategory/>
        </div>
    }
}
