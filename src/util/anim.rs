//! Optional scroll-animation engine integration.
//!
//! DESIGN
//! ======
//! The engine is an injected capability: callers hold an `Rc<dyn
//! ScrollAnimator>` and never know whether GSAP is loaded. [`detect`] is the
//! only place that inspects JS globals; everything else degrades to the
//! no-op implementation and the site renders fully, unanimated.

#[cfg(test)]
#[path = "anim_test.rs"]
mod anim_test;

use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

/// Class marking elements that slide up into view on scroll.
pub const SCROLL_ANIM_CLASS: &str = "anim-on-scroll-y";

/// Class each hero title word span carries.
pub const TITLE_WORD_CLASS: &str = "hero-title-word";

/// Transient compositor hint applied while entry animations may still run.
#[cfg(feature = "hydrate")]
const WILL_CHANGE_CLASS: &str = "will-change-transform";

/// How long the compositor hint stays before being reset.
#[cfg(feature = "hydrate")]
const WILL_CHANGE_RESET_MS: u32 = 5_000;

/// Scroll-driven animation playback, if an engine is available.
pub trait ScrollAnimator {
    /// Register entry/exit playback for every [`SCROLL_ANIM_CLASS`] element,
    /// honoring a per-element `--delay` custom property.
    fn register_scroll_targets(&self);

    /// Stagger the hero title's word spans into view.
    fn stagger_title_words(&self);

    /// Recompute trigger positions (after layout changes).
    fn refresh(&self);
}

/// The absent-engine implementation.
pub struct NoopAnimator;

impl ScrollAnimator for NoopAnimator {
    fn register_scroll_targets(&self) {}
    fn stagger_title_words(&self) {}
    fn refresh(&self) {}
}

/// Pick the GSAP-backed animator when the library and its scroll plugin are
/// both present as globals, the no-op otherwise.
#[must_use]
pub fn detect() -> Rc<dyn ScrollAnimator> {
    #[cfg(feature = "hydrate")]
    {
        if let Some(animator) = GsapAnimator::detect() {
            return Rc::new(animator);
        }
    }
    Rc::new(NoopAnimator)
}

/// Split a title into its animation units, one per word.
#[must_use]
pub fn split_title_words(title: &str) -> Vec<String> {
    title.split_whitespace().map(str::to_owned).collect()
}

/// Leading-float parse for `--delay` values, tolerating a trailing unit
/// (`"0.3"` and `"0.3s"` both read 0.3). Anything else is no delay.
#[must_use]
pub fn parse_css_delay(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let numeric_len = trimmed
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+')))
        .count();
    trimmed[..numeric_len].parse().unwrap_or(0.0)
}

/// Hint the compositor about upcoming transforms, then drop the hint once
/// entry animations have had time to finish.
pub fn apply_will_change_hints() {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        for_each_selected(&document, &format!(".{SCROLL_ANIM_CLASS}, .{TITLE_WORD_CLASS}"), |el| {
            let _ = el.class_list().add_1(WILL_CHANGE_CLASS);
        });

        gloo_timers::callback::Timeout::new(WILL_CHANGE_RESET_MS, move || {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            for_each_selected(&document, &format!(".{WILL_CHANGE_CLASS}"), |el| {
                if let Some(el) = el.dyn_ref::<web_sys::HtmlElement>() {
                    let _ = el.style().set_property("will-change", "auto");
                }
            });
        })
        .forget();
    }
}

// =============================================================================
// GSAP-BACKED IMPLEMENTATION
// =============================================================================

#[cfg(feature = "hydrate")]
struct GsapAnimator {
    gsap: JsValue,
    scroll_trigger: JsValue,
}

#[cfg(feature = "hydrate")]
impl GsapAnimator {
    /// Both `gsap` and `ScrollTrigger` must exist; the plugin is registered
    /// once here.
    fn detect() -> Option<Self> {
        let gsap = js_global("gsap")?;
        let scroll_trigger = js_global("ScrollTrigger")?;
        call1(&gsap, "registerPlugin", &scroll_trigger)?;
        Some(Self { gsap, scroll_trigger })
    }
}

#[cfg(feature = "hydrate")]
impl ScrollAnimator for GsapAnimator {
    fn register_scroll_targets(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        for_each_selected(&document, &format!(".{SCROLL_ANIM_CLASS}"), |el| {
            let delay = el
                .dyn_ref::<web_sys::HtmlElement>()
                .and_then(|el| el.style().get_property_value("--delay").ok())
                .map_or(0.0, |raw| parse_css_delay(&raw));

            let trigger = js_sys::Object::new();
            set_value(&trigger, "trigger", el);
            set_str(&trigger, "start", "top 90%");
            set_str(&trigger, "toggleActions", "play none none reverse");

            let tween = js_sys::Object::new();
            set_f64(&tween, "opacity", 0.0);
            set_f64(&tween, "y", 50.0);
            set_f64(&tween, "duration", 1.0);
            set_str(&tween, "ease", "power3.out");
            set_f64(&tween, "delay", delay);
            set_value(&tween, "scrollTrigger", &trigger);

            call2(&self.gsap, "from", el, &tween);
        });
    }

    fn stagger_title_words(&self) {
        let tween = js_sys::Object::new();
        set_f64(&tween, "opacity", 0.0);
        set_f64(&tween, "y", 20.0);
        set_f64(&tween, "duration", 0.8);
        set_f64(&tween, "stagger", 0.1);
        set_str(&tween, "ease", "power3.out");
        set_f64(&tween, "delay", 0.2);

        call2(
            &self.gsap,
            "from",
            &JsValue::from_str(&format!(".{TITLE_WORD_CLASS}")),
            &tween,
        );
    }

    fn refresh(&self) {
        call0(&self.scroll_trigger, "refresh");
    }
}

// =============================================================================
// JS INTEROP HELPERS
// =============================================================================

#[cfg(feature = "hydrate")]
fn js_global(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    (!value.is_undefined() && !value.is_null()).then_some(value)
}

#[cfg(feature = "hydrate")]
fn method(target: &JsValue, name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into()
        .ok()
}

#[cfg(feature = "hydrate")]
fn call0(target: &JsValue, name: &str) -> Option<JsValue> {
    method(target, name)?.call0(target).ok()
}

#[cfg(feature = "hydrate")]
fn call1(target: &JsValue, name: &str, arg: &JsValue) -> Option<JsValue> {
    method(target, name)?.call1(target, arg).ok()
}

#[cfg(feature = "hydrate")]
fn call2(target: &JsValue, name: &str, a: &JsValue, b: &JsValue) -> Option<JsValue> {
    method(target, name)?.call2(target, a, b).ok()
}

#[cfg(feature = "hydrate")]
fn set_value(target: &js_sys::Object, key: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(target, &JsValue::from_str(key), value);
}

#[cfg(feature = "hydrate")]
fn set_str(target: &js_sys::Object, key: &str, value: &str) {
    set_value(target, key, &JsValue::from_str(value));
}

#[cfg(feature = "hydrate")]
fn set_f64(target: &js_sys::Object, key: &str, value: f64) {
    set_value(target, key, &JsValue::from_f64(value));
}

/// Run `f` over every element matching `selector`.
#[cfg(feature = "hydrate")]
fn for_each_selected(document: &web_sys::Document, selector: &str, f: impl Fn(&web_sys::Element)) {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for index in 0..nodes.length() {
        if let Some(el) = nodes.item(index).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            f(&el);
        }
    }
}
