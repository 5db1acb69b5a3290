//! Contact form field rules and submission lifecycle state.
//!
//! DESIGN
//! ======
//! Validation runs on blur and produces a [`FieldFeedback`]; every input
//! event clears the field's error so the message never lingers past the next
//! keystroke. Submission is a phase machine gating the submit control.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use crate::util::validate::{is_valid_email, is_valid_phone};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";

/// What kind of value a field holds, deciding which rule applies beyond
/// the required check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Message,
}

/// Outcome of validating one field on blur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldFeedback {
    /// Error classes plus a message node directly after the field.
    Invalid(&'static str),
    /// Transient success border, auto-removed after a short flash.
    Valid,
}

/// Validate a raw field value. `None` means the field passed.
///
/// Rules cascade: required-but-empty wins, then the kind-specific shape
/// check, which only judges non-empty values (optional empty fields pass
/// vacuously).
#[must_use]
pub fn validate(kind: FieldKind, required: bool, raw: &str) -> Option<&'static str> {
    let value = raw.trim();
    if value.is_empty() {
        return required.then_some(REQUIRED_MESSAGE);
    }
    match kind {
        FieldKind::Email if !is_valid_email(value) => Some(EMAIL_MESSAGE),
        FieldKind::Phone if !is_valid_phone(value) => Some(PHONE_MESSAGE),
        _ => None,
    }
}

/// Blur-time feedback for a field.
#[must_use]
pub fn blur_feedback(kind: FieldKind, required: bool, raw: &str) -> FieldFeedback {
    match validate(kind, required, raw) {
        Some(message) => FieldFeedback::Invalid(message),
        None => FieldFeedback::Valid,
    }
}

/// Whether a required field should show the soft "looks filled" cue. Applies
/// the instant the value is non-empty, independent of full validation.
#[must_use]
pub fn shows_soft_hint(required: bool, raw: &str) -> bool {
    required && !raw.trim().is_empty()
}

/// Where the form is in its submit lifecycle.
///
/// The submit control is disabled (and visually in its loading state) while
/// `Submitting`; all other phases leave it interactive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

impl FormPhase {
    #[must_use]
    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }
}
