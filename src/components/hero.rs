//! Hero section: staggered title words and the lead call-to-action.

use leptos::prelude::*;

use crate::util::anim::{TITLE_WORD_CLASS, split_title_words};

const HERO_TITLE: &str = "Find the Keys to Your Next Home";

#[component]
pub fn Hero() -> impl IntoView {
    // Words are wrapped unconditionally so the stagger degrades to plain
    // visible text when no animation engine is loaded.
    let words = split_title_words(HERO_TITLE);

    view! {
        <section id="top" class="hero">
            <h1 id="hero-title" class="hero-title">
                {words
                    .into_iter()
                    .map(|word| view! { <span class=TITLE_WORD_CLASS>{word}</span>" " })
                    .collect_view()}
            </h1>
            <p class="hero-subtitle anim-on-scroll-y">
                "Buying, selling, and letting across the city, with people who know every street."
            </p>
            <a class="hero-cta anim-on-scroll-y" href="#contact" style="--delay: 0.2">
                "Book a Viewing"
            </a>
        </section>
    }
}
