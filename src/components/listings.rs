//! Featured listings and services sections.
//!
//! Listing photos use the deferred-source attribute so they only load once
//! scrolled near; cards carry the scroll-animation class with staggered
//! delays for the optional engine.

use leptos::prelude::*;

use crate::util::anim::SCROLL_ANIM_CLASS;

struct Listing {
    photo: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const LISTINGS: &[Listing] = &[
    Listing {
        photo: "/img/listings/terrace-12.jpg",
        title: "Three-bed terrace, Elm Row",
        blurb: "South-facing garden, two minutes from the tram stop.",
    },
    Listing {
        photo: "/img/listings/loft-4.jpg",
        title: "Warehouse loft, Canal Quarter",
        blurb: "Double-height windows over the towpath.",
    },
    Listing {
        photo: "/img/listings/cottage-9.jpg",
        title: "Brick cottage, Orchard Lane",
        blurb: "Restored range, original floors, room to grow.",
    },
];

#[component]
pub fn FeaturedListings() -> impl IntoView {
    view! {
        <section id="listings" class="listings" data-fade-in="">
            <h2 class="section-title">"Featured Listings"</h2>
            <div class="listings__grid">
                {LISTINGS
                    .iter()
                    .enumerate()
                    .map(|(index, listing)| {
                        let delay = format!("--delay: {:.1}", 0.1 * index_as_f64(index));
                        view! {
                            <article class=format!("listing-card {SCROLL_ANIM_CLASS}") style=delay>
                                <img
                                    class="listing-card__photo"
                                    src="/img/placeholder.svg"
                                    data-src=listing.photo
                                    alt=listing.title
                                />
                                <h3 class="listing-card__title">{listing.title}</h3>
                                <p class="listing-card__blurb">{listing.blurb}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services" data-fade-in="">
            <h2 class="section-title">"What We Do"</h2>
            <ul class="services__list">
                <li class=SCROLL_ANIM_CLASS>"Sales, from valuation to keys-in-hand."</li>
                <li class=SCROLL_ANIM_CLASS style="--delay: 0.1">"Lettings and full management."</li>
                <li class=SCROLL_ANIM_CLASS style="--delay: 0.2">"Mortgage and survey referrals."</li>
            </ul>
        </section>
    }
}

#[allow(clippy::cast_precision_loss)]
fn index_as_f64(index: usize) -> f64 {
    index as f64
}
