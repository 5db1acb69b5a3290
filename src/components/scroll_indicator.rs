//! Full-width scroll progress bar pinned to the top of the page.

use leptos::prelude::*;

use crate::util::scroll::indicator_width_style;

/// Indicator whose width tracks the page's scroll progress percent.
///
/// The signal is fed by the page-level throttled scroll listener; the math
/// guarantees a clamped, never-NaN value even on short pages.
#[component]
pub fn ScrollIndicator(progress: RwSignal<f64>) -> impl IntoView {
    view! {
        <div class="scroll-indicator" style=move || indicator_width_style(progress.get())></div>
    }
}
