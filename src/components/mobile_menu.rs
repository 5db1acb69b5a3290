//! Slide-in mobile navigation menu and its overlay.
//!
//! Five close paths (close button, overlay click, any in-menu link click,
//! Escape, and the open button toggling) converge on `MenuState::close`; the
//! panel/overlay `open` markers and the body scroll lock all derive from the
//! one state flag.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

use crate::components::header::NAV_LINKS;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::menu::MenuState;

#[component]
pub fn MobileMenu() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();

    let close = move |_| menu.update(|m| m.close());
    let is_open = move || menu.get().open;

    // Page scroll is locked exactly while the menu shows.
    Effect::new(move || {
        let open = menu.get().open;
        #[cfg(feature = "hydrate")]
        {
            if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body
                    .style()
                    .set_property("overflow", if open { "hidden" } else { "auto" });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = open;
        }
    });

    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let on_keydown = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" {
                    menu.update(|m| m.close());
                }
            }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
            let _ = window
                .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
            on_keydown.forget();
        }
    }

    view! {
        <div id="mobile-overlay" class="mobile-overlay" class:open=is_open on:click=close></div>
        <aside id="mobile-menu" class="mobile-menu" class:open=is_open>
            <div class="mobile-menu__header">
                <ThemeToggle
                    toggle_id="mobile-theme-toggle"
                    light_icon_id="mobile-theme-icon-light"
                    dark_icon_id="mobile-theme-icon-dark"
                />
                <button
                    id="close-menu"
                    class="mobile-menu__close"
                    type="button"
                    title="Close menu"
                    on:click=close
                >
                    "×"
                </button>
            </div>
            <nav class="mobile-menu__nav">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a class="mobile-menu__link" href=*href on:click=close>
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
