//! Site footer with static navigation and social links.

use leptos::prelude::*;
use leptos_router::components::A;

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("https://www.facebook.com/", "Facebook"),
    ("https://x.com/?lang=en", "Twitter"),
    ("https://www.linkedin.com/feed/", "LinkedIn"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <section class="footer__about">
                <h2 class="footer__brand">"EduBridge"</h2>
                <p>"Connecting learners with language tutors around the world."</p>
            </section>
            <section class="footer__links">
                <h3>"Quick Links"</h3>
                <A href="/">"Home"</A>
                <A href="/find-tutors">"Find Tutors"</A>
                <A href="/add-tutor">"Add Tutor"</A>
            </section>
            <section class="footer__social">
                <h3>"Follow Us"</h3>
                {SOCIAL_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a href=*href target="_blank" rel="noopener noreferrer" aria-label=*label>
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </section>
            <p class="footer__copyright">"© EduBridge. All rights reserved."</p>
        </footer>
    }
}
