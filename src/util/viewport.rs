//! One-shot viewport-intersection behaviors: lazy image loading and
//! scroll-reveal.
//!
//! Both observe elements until their first intersection, act once, and stop
//! watching that element. Nothing here re-fires; a revealed element stays
//! revealed and a loaded image stays loaded.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

/// Attribute carrying an image's deferred source.
pub const DEFERRED_SRC_ATTR: &str = "data-src";

/// Flag attribute marking fade-in targets.
pub const FADE_IN_ATTR: &str = "data-fade-in";

/// Class added to a fade-in target on first intersection.
pub const REVEAL_CLASS: &str = "fade-in-up";

/// Fraction of a fade-in target that must be visible to reveal it.
#[cfg(feature = "hydrate")]
const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom margin shrink so reveals start slightly before the fold.
#[cfg(feature = "hydrate")]
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Start lazy-loading every `img[data-src]` currently in the document.
///
/// On first intersection the deferred source becomes the real `src`, the
/// deferred attribute is removed, and the image is no longer watched.
pub fn init_lazy_images() {
    #[cfg(feature = "hydrate")]
    {
        observe_once(&format!("img[{DEFERRED_SRC_ATTR}]"), None, |img| {
            let Some(src) = img.get_attribute(DEFERRED_SRC_ATTR) else {
                return;
            };
            let _ = img.set_attribute("src", &src);
            let _ = img.remove_attribute(DEFERRED_SRC_ATTR);
        });
    }
}

/// Start watching every `[data-fade-in]` element; the first time one is 10%
/// visible (with the bottom margin pulled up 50px) it gains [`REVEAL_CLASS`]
/// and is unobserved.
pub fn init_scroll_reveal() {
    #[cfg(feature = "hydrate")]
    {
        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        observe_once(&format!("[{FADE_IN_ATTR}]"), Some(&options), |el| {
            let _ = el.class_list().add_1(REVEAL_CLASS);
        });
    }
}

/// Observe every element matching `selector`; run `on_enter` once per
/// element on its first intersection, then unobserve it.
///
/// Absent document, failed observer construction, or an empty selection all
/// degrade to a no-op.
#[cfg(feature = "hydrate")]
fn observe_once(
    selector: &str,
    options: Option<&web_sys::IntersectionObserverInit>,
    on_enter: impl Fn(&web_sys::Element) + 'static,
) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                on_enter(&target);
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let observer = match options {
        Some(options) => web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            options,
        ),
        None => web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    };
    let Ok(observer) = observer else {
        leptos::logging::warn!("intersection observer unavailable; skipping {selector}");
        return;
    };
    callback.forget();

    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for index in 0..nodes.length() {
        if let Some(el) = nodes.item(index).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&el);
        }
    }
}
