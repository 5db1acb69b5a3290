//! Theme toggle button.
//!
//! One component, two instances (desktop header and mobile menu). Both read
//! and write the shared `RwSignal<Theme>` from context, so their icons always
//! agree; a click flips the preference, persists it, and the document root
//! follows via the app-level sync effect.

use leptos::prelude::*;

use crate::state::theme::Theme;
use crate::util;

#[component]
pub fn ThemeToggle(
    toggle_id: &'static str,
    light_icon_id: &'static str,
    dark_icon_id: &'static str,
) -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    let on_click = move |_| {
        let next = theme.get().flip();
        theme.set(next);
        util::theme::persist(next);
    };

    view! {
        <button id=toggle_id class="theme-toggle" type="button" title="Toggle theme" on:click=on_click>
            <span
                id=light_icon_id
                class="theme-icon theme-icon-light"
                class:hidden=move || !theme.get().shows_light_icon()
            >
                "☀"
            </span>
            <span
                id=dark_icon_id
                class="theme-icon theme-icon-dark"
                class:hidden=move || theme.get().shows_light_icon()
            >
                "☾"
            </span>
        </button>
    }
}
