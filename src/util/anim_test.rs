use super::*;

#[test]
fn titles_split_into_one_span_per_word() {
    assert_eq!(
        split_title_words("Find Your Next Home"),
        vec!["Find", "Your", "Next", "Home"]
    );
}

#[test]
fn extra_whitespace_does_not_create_empty_words() {
    assert_eq!(split_title_words("  Open   Houses  "), vec!["Open", "Houses"]);
    assert!(split_title_words("   ").is_empty());
}

#[test]
fn css_delay_parses_bare_and_suffixed_numbers() {
    assert_eq!(parse_css_delay("0.3"), 0.3);
    assert_eq!(parse_css_delay("0.3s"), 0.3);
    assert_eq!(parse_css_delay(" 2 "), 2.0);
}

#[test]
fn css_delay_defaults_to_zero() {
    assert_eq!(parse_css_delay(""), 0.0);
    assert_eq!(parse_css_delay("fast"), 0.0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn detect_without_a_browser_yields_a_callable_noop() {
    let animator = detect();
    animator.register_scroll_targets();
    animator.stagger_title_words();
    animator.refresh();
}

#[test]
fn noop_animator_methods_are_callable() {
    let animator = NoopAnimator;
    animator.register_scroll_targets();
    animator.stagger_title_words();
    animator.refresh();
}

#[test]
fn will_change_hints_are_a_noop_without_a_browser() {
    apply_will_change_hints();
}
