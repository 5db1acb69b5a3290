use super::*;

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn flip_alternates_between_light_and_dark() {
    assert_eq!(Theme::Dark.flip(), Theme::Light);
    assert_eq!(Theme::Light.flip(), Theme::Dark);
}

#[test]
fn double_flip_round_trips() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.flip().flip(), theme);
    }
}

#[test]
fn stored_values_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(theme.as_str()), Some(theme));
    }
}

#[test]
fn unknown_stored_values_are_unset() {
    assert_eq!(Theme::from_stored(""), None);
    assert_eq!(Theme::from_stored("auto"), None);
    assert_eq!(Theme::from_stored("DARK"), None);
}

#[test]
fn dark_mode_shows_the_sun_icon() {
    assert!(Theme::Dark.shows_light_icon());
    assert!(!Theme::Light.shows_light_icon());
}
