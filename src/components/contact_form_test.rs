use super::*;

#[test]
fn error_class_outranks_other_feedback() {
    assert_eq!(field_class(true, true, true), "form-input form-input--error");
}

#[test]
fn valid_flash_outranks_the_soft_cue() {
    assert_eq!(field_class(false, true, true), "form-input form-input--valid");
}

#[test]
fn soft_cue_applies_when_nothing_else_does() {
    assert_eq!(field_class(false, false, true), "form-input form-input--filled");
    assert_eq!(field_class(false, false, false), "form-input");
}

#[test]
fn submit_label_reflects_the_phase() {
    assert_eq!(submit_label(FormPhase::Idle), "Send Message");
    assert_eq!(submit_label(FormPhase::Submitting), "Sending...");
}

#[test]
fn input_types_follow_field_kinds() {
    assert_eq!(input_type(FieldKind::Email), "email");
    assert_eq!(input_type(FieldKind::Phone), "tel");
    assert_eq!(input_type(FieldKind::Text), "text");
}
