//! Application shell: shared context and theme bootstrap.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::menu::MenuState;
use crate::state::theme::Theme;
use crate::util;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Stored preference beats the dark default, read before anything can
    // interact. Both toggles and the root-class sync share this signal.
    let theme = RwSignal::new(util::theme::read_stored().unwrap_or_default());
    let menu = RwSignal::new(MenuState::default());
    provide_context(theme);
    provide_context(menu);

    // Keep the document root's marker class pair in lockstep with state,
    // including the initial application at mount.
    Effect::new(move || util::theme::apply(theme.get()));

    view! {
        <Title text="Bricks & Keys Realty"/>
        <HomePage/>
    }
}
