//! Auto-advancing hero carousel on the home page.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use leptos::prelude::*;
use leptos_router::components::A;

/// One carousel slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const SLIDES: [Slide; 5] = [
    Slide {
        title: "Learn Anything, Anytime",
        description: "Connect with expert tutors across all subjects and levels.",
        image: "https://i.postimg.cc/FK4t4PkL/slider-1.jpg",
    },
    Slide {
        title: "Boost Your Skills",
        description: "Upgrade your knowledge with personalized guidance.",
        image: "https://i.postimg.cc/jSWNbcYt/slider-2.jpg",
    },
    Slide {
        title: "Find the Perfect Tutor",
        description: "Explore profiles, read reviews, and book instantly.",
        image: "https://i.postimg.cc/k5qncMcz/slider-3.jpg",
    },
    Slide {
        title: "Flexible Learning",
        description: "Study at your pace, anytime and anywhere.",
        image: "https://i.postimg.cc/Qxzm1HXN/slider-4.jpg",
    },
    Slide {
        title: "Start Your Journey Today",
        description: "Join EduBridge and unlock your potential.",
        image: "https://i.postimg.cc/XYMFnFj5/slider-5.jpg",
    },
];

/// Time each slide stays on screen.
pub const SLIDE_INTERVAL_MS: u32 = 5_000;

/// Index after `current`, wrapping to the first slide.
pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

#[component]
pub fn Banner() -> impl IntoView {
    let active = RwSignal::new(0_usize);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(SLIDE_INTERVAL_MS).await;
            // Stops once the banner is unmounted and the signal disposed.
            if active.try_update(|i| *i = next_slide(*i, SLIDES.len())).is_none() {
                break;
            }
        }
    });

    let slides = SLIDES
        .iter()
        .enumerate()
        .map(|(idx, slide)| {
            view! {
                <div class="banner__slide" class:banner__slide--active=move || active.get() == idx>
                    <img class="banner__image" src=slide.image alt=slide.title/>
                    <div class="banner__overlay">
                        <h2 class="banner__title">{slide.title}</h2>
                        <p class="banner__text">{slide.description}</p>
                        <A href="/register" attr:class="btn btn--primary banner__cta">"Get Started"</A>
                    </div>
                </div>
            }
        })
        .collect_view();

    let dots = (0..SLIDES.len())
        .map(|idx| {
            view! {
                <button
                    class="banner__dot"
                    class:banner__dot--active=move || active.get() == idx
                    aria-label=format!("Show slide {}", idx + 1)
                    on:click=move |_| active.set(idx)
                ></button>
            }
        })
        .collect_view();

    view! {
        <section class="banner">
            {slides}
            <div class="banner__dots">{dots}</div>
        </section>
    }
}
