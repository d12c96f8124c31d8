use super::*;

fn viewport() -> Viewport {
    Viewport { width: 1000.0, height: 800.0 }
}

#[test]
fn radius_reaches_farthest_corner() {
    let origin = PointerOrigin { x: 200.0, y: 600.0 };
    assert_eq!(reveal_radius(origin, viewport()), 1000.0);
}

#[test]
fn radius_from_top_left_corner_is_diagonal() {
    let origin = PointerOrigin { x: 0.0, y: 0.0 };
    let expected = (1000.0_f64 * 1000.0 + 800.0 * 800.0).sqrt();
    assert!((reveal_radius(origin, viewport()) - expected).abs() < 1e-9);
}

#[test]
fn radius_from_center_is_half_diagonal() {
    let origin = PointerOrigin { x: 500.0, y: 400.0 };
    assert!((reveal_radius(origin, viewport()) - (500.0_f64 * 500.0 + 400.0 * 400.0).sqrt()).abs() < 1e-9);
}

#[test]
fn center_of_bounding_box() {
    let origin = PointerOrigin::center_of(10.0, 20.0, 40.0, 30.0);
    assert_eq!(origin, PointerOrigin { x: 30.0, y: 35.0 });
}

#[test]
fn animation_carries_options() {
    let opts = ToggleOptions::default();
    let anim = RevealAnimation::new(PointerOrigin { x: 200.0, y: 600.0 }, viewport(), &opts);
    assert_eq!(anim.radius, 1000.0);
    assert_eq!(anim.duration_ms, 700.0);
    assert_eq!(anim.easing, "ease-in-out");
    assert_eq!(anim.pseudo_element, "::view-transition-new(root)");
}

#[test]
fn keyframes_grow_from_zero_to_radius() {
    let opts = ToggleOptions::default();
    let anim = RevealAnimation::new(PointerOrigin { x: 200.0, y: 600.0 }, viewport(), &opts);
    let [from, to] = anim.clip_path_keyframes();
    assert_eq!(from, "circle(0px at 200px 600px)");
    assert_eq!(to, "circle(1000px at 200px 600px)");
}
