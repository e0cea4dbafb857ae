use super::*;

// =============================================================
// Theme enum
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_flips_the_mode() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn double_toggle_round_trips() {
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

// =============================================================
// Persisted representation
// =============================================================

#[test]
fn as_str_and_parse_round_trip() {
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Theme::parse("solarized"), None);
    assert_eq!(Theme::parse(""), None);
}
