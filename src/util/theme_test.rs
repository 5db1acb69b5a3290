#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_stored_is_unset_in_non_hydrate_tests() {
    assert_eq!(read_stored(), None);
}

#[test]
fn unset_preference_falls_back_to_dark() {
    assert_eq!(read_stored().unwrap_or_default(), Theme::Dark);
}

#[test]
fn persist_and_apply_are_noops_but_callable() {
    persist(Theme::Light);
    apply(Theme::Dark);
}
