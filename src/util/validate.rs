//! Contact form field validation rules.
//!
//! Small pure predicates; per-field orchestration (which rule applies when)
//! lives in `state::contact_form`.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum digits-plus-plus length for a phone number to be plausible.
const PHONE_MIN_LEN: usize = 10;

/// Maximum digit count (ITU E.164 is 15; one extra for historical tolerance).
const PHONE_MAX_DIGITS: usize = 16;

/// `local@domain.tld` shape: a non-empty local part with no whitespace or
/// `@`, exactly one `@`, and a domain with an interior dot.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || has_forbidden_email_char(local) || has_forbidden_email_char(domain) {
        return false;
    }
    // The separating dot must have at least one character on each side.
    domain.len() >= 3 && domain[1..domain.len() - 1].contains('.')
}

fn has_forbidden_email_char(part: &str) -> bool {
    part.chars().any(|c| c.is_whitespace() || c == '@')
}

/// Phone check on the digit-stripped value: optional leading `+`, first
/// digit `1-9`, at least [`PHONE_MIN_LEN`] characters overall.
#[must_use]
pub fn is_valid_phone(raw: &str) -> bool {
    let clean = strip_phone(raw);
    if clean.len() < PHONE_MIN_LEN {
        return false;
    }
    let digits = clean.strip_prefix('+').unwrap_or(&clean);
    if digits.len() > PHONE_MAX_DIGITS {
        return false;
    }
    let mut chars = digits.chars();
    matches!(chars.next(), Some('1'..='9')) && chars.all(|c| c.is_ascii_digit())
}

/// Keep only digits and `+`, the characters the phone rule judges.
#[must_use]
pub fn strip_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}
