use super::*;

#[test]
fn defaults_match_reveal_contract() {
    let opts = ToggleOptions::default();
    assert_eq!(opts.duration_ms, 700.0);
    assert_eq!(opts.easing, "ease-in-out");
    assert_eq!(opts.pseudo_element, "::view-transition-new(root)");
}

#[test]
fn overriding_duration_keeps_remaining_defaults() {
    let opts = ToggleOptions { duration_ms: 350.0, ..ToggleOptions::default() };
    assert_eq!(opts.duration_ms, 350.0);
    assert_eq!(opts.easing, DEFAULT_EASING);
    assert_eq!(opts.pseudo_element, DEFAULT_PSEUDO_ELEMENT);
    assert_ne!(opts, ToggleOptions::default());
}
