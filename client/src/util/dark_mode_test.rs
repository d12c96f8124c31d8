#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_light_in_non_hydrate_tests() {
    assert_eq!(read_preference(), ThemeMode::Light);
}

#[test]
fn stored_preference_wins_over_system() {
    assert_eq!(resolve_preference(Some("light"), true), ThemeMode::Light);
    assert_eq!(resolve_preference(Some("dark"), false), ThemeMode::Dark);
}

#[test]
fn missing_preference_follows_system() {
    assert_eq!(resolve_preference(None, true), ThemeMode::Dark);
    assert_eq!(resolve_preference(None, false), ThemeMode::Light);
}

#[test]
fn garbage_preference_follows_system() {
    assert_eq!(resolve_preference(Some("true"), true), ThemeMode::Dark);
    assert_eq!(resolve_preference(Some(""), false), ThemeMode::Light);
}

#[test]
fn default_marker_is_dark_class() {
    assert_eq!(DEFAULT_MARKER_CLASS, "dark");
}

#[test]
fn marker_edit_follows_mode_and_class() {
    assert_eq!(marker_edit(ThemeMode::Dark, "theme-dark"), MarkerEdit::Add("theme-dark"));
    assert_eq!(marker_edit(ThemeMode::Light, "theme-dark"), MarkerEdit::Remove("theme-dark"));
}

#[test]
fn bootstrap_script_uses_storage_key_and_marker() {
    assert!(BOOTSTRAP_SCRIPT.contains(STORAGE_KEY));
    assert!(BOOTSTRAP_SCRIPT.contains(&format!("classList.add('{DEFAULT_MARKER_CLASS}')")));
}

#[test]
fn apply_and_persist_are_noops_but_callable() {
    apply(ThemeMode::Dark, DEFAULT_MARKER_CLASS);
    apply(ThemeMode::Light, DEFAULT_MARKER_CLASS);
    persist(ThemeMode::Dark);
}
