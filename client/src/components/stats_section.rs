//! Marketplace headline numbers on the home page.

use leptos::prelude::*;

const STATS: [(&str, u32, &str); 4] = [
    ("Total Tutors", 128, "👩‍🏫"),
    ("Total Reviews", 524, "⭐"),
    ("Languages Taught", 14, "🌐"),
    ("Registered Users", 980, "👥"),
];

#[component]
pub fn StatsSection() -> impl IntoView {
    view! {
        <section class="stats">
            <h2 class="section-title">"Our Impact in Numbers"</h2>
            <div class="stats__grid">
                {STATS
                    .iter()
                    .map(|(label, value, icon)| {
                        view! {
                            <div class="stats__card">
                                <span class="stats__icon" aria-hidden="true">{*icon}</span>
                                <span class="stats__value">{*value}"+"</span>
                                <span class="stats__label">{*label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
