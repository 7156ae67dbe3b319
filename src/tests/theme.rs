use crate::utils::theme_state::{self, ThemeMode};

#[test]
fn test_toggle_round_trip() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(mode.toggled().toggled(), mode);
    }
}

#[test]
fn test_toggle_flips_mode() {
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
}

#[test]
fn test_default_is_light() {
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
}

#[test]
fn test_root_class() {
    assert_eq!(ThemeMode::Light.root_class(), "");
    assert_eq!(ThemeMode::Dark.root_class(), "dark");
}

#[test]
fn test_stored_value_round_trip() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
    }
    assert_eq!(ThemeMode::parse("solarized"), None);
}

#[test]
fn test_initial_without_browser_is_light() {
    // Off the web target there is no stored preference or system hint.
    crate::tests::common::setup();
    assert_eq!(theme_state::initial(), ThemeMode::Light);
}

#[test]
fn test_persist_is_non_fatal() {
    // Never panics, even with no storage backing.
    theme_state::persist(ThemeMode::Dark);
}
