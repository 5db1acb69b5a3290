//! FAQ accordion section.
//!
//! Open-ness lives in `state::faq` (`Option<usize>`); the content max-height
//! and the indicator rotation are both rendered from that state. The
//! measured scroll height only sizes the expansion.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use leptos::prelude::*;

use crate::state::faq::FaqState;

struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "How long does a sale usually take?",
        answer: "Most of our sales complete in eight to twelve weeks from accepted \
                 offer, depending on the chain and searches.",
    },
    FaqEntry {
        question: "Do you charge for valuations?",
        answer: "No. Market appraisals are free and come with no obligation to \
                 list with us.",
    },
    FaqEntry {
        question: "Can you manage my rental property end to end?",
        answer: "Yes. Our full management service covers referencing, deposits, \
                 maintenance, and inspections.",
    },
    FaqEntry {
        question: "Which areas do you cover?",
        answer: "The whole city and the villages within a twenty-mile ring; see \
                 the listings section for the current spread.",
    },
];

/// Inline style sizing an item's content panel.
fn content_max_height(open: bool, content_px: i32) -> String {
    if open {
        format!("max-height: {content_px}px")
    } else {
        "max-height: 0px".to_owned()
    }
}

/// Inline style rotating an item's indicator icon.
fn icon_rotation(open: bool) -> &'static str {
    if open {
        "transform: rotate(180deg)"
    } else {
        "transform: rotate(0deg)"
    }
}

#[component]
pub fn FaqSection() -> impl IntoView {
    let faq = RwSignal::new(FaqState::default());

    view! {
        <section id="faq" class="faq" data-fade-in="">
            <h2 class="section-title">"Frequently Asked Questions"</h2>
            <div class="faq__list">
                {FAQ_ENTRIES
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let content_ref = NodeRef::<leptos::html::Div>::new();
                        let is_open = move || faq.get().is_open(index);
                        view! {
                            <div class="faq-item">
                                <button
                                    class="faq-button"
                                    type="button"
                                    on:click=move |_| faq.update(|f| f.toggle(index))
                                >
                                    <span class="faq-question">{entry.question}</span>
                                    <span class="faq-icon" style=move || icon_rotation(is_open())>
                                        "⌄"
                                    </span>
                                </button>
                                <div
                                    class="faq-content"
                                    node_ref=content_ref
                                    style=move || {
                                        content_max_height(is_open(), measured_height(&content_ref))
                                    }
                                >
                                    <p class="faq-answer">{entry.answer}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Natural content height of a mounted panel; unmounted panels size to zero,
/// which only matters before hydration where everything renders closed.
fn measured_height(content_ref: &NodeRef<leptos::html::Div>) -> i32 {
    #[cfg(feature = "hydrate")]
    {
        content_ref.get().map_or(0, |el| el.scroll_height())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = content_ref;
        0
    }
}
