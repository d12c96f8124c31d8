use super::*;

#[test]
fn default_mode_is_light() {
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
}

#[test]
fn from_dark_maps_flag_to_mode() {
    assert_eq!(ThemeMode::from_dark(true), ThemeMode::Dark);
    assert_eq!(ThemeMode::from_dark(false), ThemeMode::Light);
    assert!(ThemeMode::Dark.is_dark());
    assert!(!ThemeMode::Light.is_dark());
}

#[test]
fn toggled_flips_between_modes() {
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
}

#[test]
fn display_matches_storage_names() {
    assert_eq!(ThemeMode::Light.to_string(), "light");
    assert_eq!(ThemeMode::Dark.to_string(), "dark");
}

#[test]
fn parse_is_case_insensitive_and_trims() {
    assert_eq!(" Dark ".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
    assert_eq!("LIGHT".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
}

#[test]
fn parse_rejects_unknown_values() {
    let err = "system".parse::<ThemeMode>().unwrap_err();
    assert!(matches!(err, ThemeError::UnknownMode(ref raw) if raw == "system"));
    assert_eq!(err.to_string(), "unknown theme mode: system");
}

