//! Contact form with inline validation and the simulated submission
//! lifecycle.
//!
//! Field errors render as exactly one message node per field (a `Show` over
//! the field's error signal); every input event clears that error. Submit
//! validates everything, disables the control while the submission seam
//! runs, then reveals the success notice, resets the fields, and restores
//! the control.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::submit::{ContactSubmission, submit_contact};
use crate::state::contact_form::{
    FieldFeedback, FieldKind, FormPhase, blur_feedback, shows_soft_hint, validate,
};

/// How long the transient valid-field border stays.
#[cfg(feature = "hydrate")]
const SUCCESS_FLASH_MS: u32 = 2_000;

/// How long the success notice stays revealed.
#[cfg(feature = "hydrate")]
const NOTICE_HIDE_MS: u32 = 5_000;

/// The reactive cluster backing one field.
#[derive(Clone, Copy)]
struct FieldSignals {
    value: RwSignal<String>,
    error: RwSignal<Option<&'static str>>,
    flash: RwSignal<bool>,
}

impl FieldSignals {
    fn new() -> Self {
        Self {
            value: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            flash: RwSignal::new(false),
        }
    }

    fn reset(self) {
        self.value.set(String::new());
        self.error.set(None);
        self.flash.set(false);
    }
}

/// Apply blur feedback: an error sticks until the next input; a pass flashes
/// the success border briefly.
fn run_blur(field: FieldSignals, kind: FieldKind, required: bool) {
    match blur_feedback(kind, required, &field.value.get_untracked()) {
        FieldFeedback::Invalid(message) => {
            field.error.set(Some(message));
            field.flash.set(false);
        }
        FieldFeedback::Valid => {
            field.error.set(None);
            field.flash.set(true);
            #[cfg(feature = "hydrate")]
            gloo_timers::callback::Timeout::new(SUCCESS_FLASH_MS, move || field.flash.set(false))
                .forget();
        }
    }
}

/// Input classes, most urgent feedback first: error, then the valid flash,
/// then the soft filled cue.
fn field_class(has_error: bool, flash_valid: bool, soft_hint: bool) -> &'static str {
    if has_error {
        "form-input form-input--error"
    } else if flash_valid {
        "form-input form-input--valid"
    } else if soft_hint {
        "form-input form-input--filled"
    } else {
        "form-input"
    }
}

fn submit_label(phase: FormPhase) -> &'static str {
    if phase.is_submitting() { "Sending..." } else { "Send Message" }
}

#[component]
fn FormField(
    label: &'static str,
    name: &'static str,
    kind: FieldKind,
    required: bool,
    field: FieldSignals,
) -> impl IntoView {
    let class = move || {
        field_class(
            field.error.get().is_some(),
            field.flash.get(),
            shows_soft_hint(required, &field.value.get()),
        )
    };
    let on_blur = move |_| run_blur(field, kind, required);
    let on_input = move |ev| {
        field.value.set(event_target_value(&ev));
        field.error.set(None);
    };

    let control = match kind {
        FieldKind::Message => view! {
            <textarea
                id=name
                name=name
                class=class
                rows=5
                required=required
                prop:value=move || field.value.get()
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_any(),
        _ => view! {
            <input
                id=name
                name=name
                type=input_type(kind)
                class=class
                required=required
                prop:value=move || field.value.get()
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-field">
            <label class="form-label" for=name>{label}</label>
            {control}
            <Show when=move || field.error.get().is_some()>
                <div class="field-error">{move || field.error.get().unwrap_or_default()}</div>
            </Show>
        </div>
    }
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Phone => "tel",
        FieldKind::Text | FieldKind::Message => "text",
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let name = FieldSignals::new();
    let email = FieldSignals::new();
    let phone = FieldSignals::new();
    let message = FieldSignals::new();
    let phase = RwSignal::new(FormPhase::Idle);
    let notice_visible = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let fields = move || {
        [
            (name, FieldKind::Text, true),
            (email, FieldKind::Email, true),
            (phone, FieldKind::Phone, false),
            (message, FieldKind::Message, true),
        ]
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_submitting() {
            return;
        }

        let mut all_valid = true;
        for (field, kind, required) in fields() {
            let error = validate(kind, required, &field.value.get_untracked());
            all_valid &= error.is_none();
            field.error.set(error);
        }
        if !all_valid {
            return;
        }

        phase.set(FormPhase::Submitting);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let submission = ContactSubmission {
                name: name.value.get_untracked().trim().to_owned(),
                email: email.value.get_untracked().trim().to_owned(),
                phone: phone.value.get_untracked().trim().to_owned(),
                message: message.value.get_untracked().trim().to_owned(),
            };
            match submit_contact(&submission).await {
                Ok(()) => {
                    for (field, _, _) in fields() {
                        field.reset();
                    }
                    reveal_notice(notice_visible);
                }
                Err(e) => info.set(e.to_string()),
            }
            phase.set(FormPhase::Idle);
        });
        #[cfg(not(feature = "hydrate"))]
        phase.set(FormPhase::Idle);
    };

    view! {
        <section id="contact" class="contact" data-fade-in="">
            <h2 class="section-title">"Get in Touch"</h2>
            <div
                id="success-message"
                class="success-message"
                class:hidden=move || !notice_visible.get()
            >
                "Thanks! Your message is on its way. We'll be in touch within one business day."
            </div>
            <form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit>
                <FormField label="Name" name="name" kind=FieldKind::Text required=true field=name/>
                <FormField label="Email" name="email" kind=FieldKind::Email required=true field=email/>
                <FormField label="Phone" name="phone" kind=FieldKind::Phone required=false field=phone/>
                <FormField
                    label="How can we help?"
                    name="message"
                    kind=FieldKind::Message
                    required=true
                    field=message
                />
                <button
                    class="form-submit"
                    class:btn-loading=move || phase.get().is_submitting()
                    type="submit"
                    disabled=move || phase.get().is_submitting()
                >
                    {move || submit_label(phase.get())}
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-info">{move || info.get()}</p>
                </Show>
            </form>
        </section>
    }
}

/// Reveal the success notice, scroll it into view, and schedule its
/// auto-hide. One reveal per successful submission.
#[cfg(feature = "hydrate")]
fn reveal_notice(visible: RwSignal<bool>) {
    visible.set(true);
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("success-message"))
    {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Center);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    gloo_timers::callback::Timeout::new(NOTICE_HIDE_MS, move || visible.set(false)).forget();
}
