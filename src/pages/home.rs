//! Home page: section composition plus page-level behavior wiring.
//!
//! ARCHITECTURE
//! ============
//! The page owns everything that spans sections: the throttled scroll
//! listener feeding the indicator, the debounced resize listener refreshing
//! the animation engine, viewport observers for lazy images and reveals, and
//! the compositor hints. Sections themselves stay declarative.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

use crate::components::contact_form::ContactForm;
use crate::components::faq::FaqSection;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::listings::{FeaturedListings, Services};
use crate::components::mobile_menu::MobileMenu;
use crate::components::scroll_indicator::ScrollIndicator;
use crate::util;

/// Leading-edge window for scroll updates, about one frame at 60Hz.
#[cfg(feature = "hydrate")]
const SCROLL_THROTTLE_MS: f64 = 16.0;

/// Quiet period before a resize refreshes the animation engine.
#[cfg(feature = "hydrate")]
const RESIZE_DEBOUNCE_MS: u32 = 250;

#[component]
pub fn HomePage() -> impl IntoView {
    let scroll_progress = RwSignal::new(0.0);

    Effect::new(move || {
        util::viewport::init_lazy_images();
        util::viewport::init_scroll_reveal();

        let animator = util::anim::detect();
        animator.register_scroll_targets();
        animator.stagger_title_words();
        util::anim::apply_will_change_hints();

        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };

            let mut on_scroll = util::rate_limit::throttled(SCROLL_THROTTLE_MS, move || {
                scroll_progress.set(util::scroll::read_progress());
            });
            let scroll_cb = Closure::wrap(
                Box::new(move |_: web_sys::Event| on_scroll()) as Box<dyn FnMut(web_sys::Event)>
            );
            let _ = window
                .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
            scroll_cb.forget();

            let animator = Rc::clone(&animator);
            let mut on_resize =
                util::rate_limit::debounced(RESIZE_DEBOUNCE_MS, move || animator.refresh());
            let resize_cb = Closure::wrap(
                Box::new(move |_: web_sys::Event| on_resize()) as Box<dyn FnMut(web_sys::Event)>
            );
            let _ = window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
            resize_cb.forget();
        }
    });

    view! {
        <ScrollIndicator progress=scroll_progress/>
        <Header/>
        <MobileMenu/>
        <main class="site-main">
            <Hero/>
            <FeaturedListings/>
            <Services/>
            <FaqSection/>
            <ContactForm/>
        </main>
        <footer class="site-footer" data-fade-in="">
            <p>"Bricks & Keys Realty. Straight answers, honest prices."</p>
        </footer>
    }
}
