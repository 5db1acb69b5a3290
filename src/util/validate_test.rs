use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn plain_address_is_valid() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first.last@mail.example.co"));
    assert!(is_valid_email("who+tag@sub.example.org"));
}

#[test]
fn missing_tld_is_invalid() {
    assert!(!is_valid_email("user@example"));
}

#[test]
fn doubled_at_is_invalid() {
    assert!(!is_valid_email("user@@example.com"));
    assert!(!is_valid_email("us@er@example.com"));
}

#[test]
fn empty_parts_are_invalid() {
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("user@example."));
    assert!(!is_valid_email(""));
}

#[test]
fn whitespace_is_invalid() {
    assert!(!is_valid_email("us er@example.com"));
    assert!(!is_valid_email("user@exa mple.com"));
}

// =============================================================
// Phone
// =============================================================

#[test]
fn e164_number_is_valid() {
    assert!(is_valid_phone("+14155552671"));
}

#[test]
fn formatted_number_is_stripped_then_valid() {
    assert!(is_valid_phone("(415) 555-2671 x0"));
    assert!(is_valid_phone("415.555.26.71"));
}

#[test]
fn short_number_is_invalid() {
    assert!(!is_valid_phone("123"));
    assert!(!is_valid_phone("+1415555"));
}

#[test]
fn leading_zero_is_invalid() {
    assert!(!is_valid_phone("0415555267100"));
    assert!(!is_valid_phone("+0415555267100"));
}

#[test]
fn interior_plus_is_invalid() {
    assert!(!is_valid_phone("1415+5552671"));
}

#[test]
fn overlong_number_is_invalid() {
    assert!(!is_valid_phone("41555526714155552671"));
}

#[test]
fn strip_phone_keeps_digits_and_plus() {
    assert_eq!(strip_phone("+1 (415) 555-2671"), "+14155552671");
    assert_eq!(strip_phone("call me"), "");
}
