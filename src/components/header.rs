//! Desktop site header: logo, section nav, theme toggle, menu button.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::menu::MenuState;

/// Section anchors shared with the mobile menu.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#listings", "Listings"),
    ("#services", "Services"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();

    view! {
        <header class="site-header">
            <a class="site-logo" href="#top">"Bricks & Keys"</a>
            <nav class="site-nav">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| view! { <a class="site-nav__link" href=*href>{*label}</a> })
                    .collect_view()}
            </nav>
            <div class="site-header__actions">
                <ThemeToggle
                    toggle_id="theme-toggle"
                    light_icon_id="theme-icon-light"
                    dark_icon_id="theme-icon-dark"
                />
                <button
                    id="mobile-menu-toggle"
                    class="mobile-menu-button"
                    type="button"
                    title="Open menu"
                    on:click=move |_| menu.update(|m| m.open())
                >
                    "☰"
                </button>
            </div>
        </header>
    }
}
