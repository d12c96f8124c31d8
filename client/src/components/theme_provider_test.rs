use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::toggle::{
    Activation, ControlAnchor, PointerOrigin, RootMarker, Subscription, ToggleController, ToggleError, ToggleOptions,
    TransitionCapability, TransitionHost, Viewport,
};

#[test]
fn new_context_reports_initial_mode() {
    let ctx = ThemeContext::new(ThemeMode::Dark);
    assert_eq!(ctx.theme(), ThemeMode::Dark);
    assert_eq!(ctx.mode().get_untracked(), ThemeMode::Dark);
}

#[test]
fn set_theme_updates_signal() {
    let ctx = ThemeContext::new(ThemeMode::Light);
    ctx.set_theme(ThemeMode::Dark);
    assert_eq!(ctx.theme(), ThemeMode::Dark);
    ctx.set_theme(ThemeMode::Dark);
    assert_eq!(ctx.theme(), ThemeMode::Dark);
}

#[test]
fn seed_updates_signal() {
    let ctx = ThemeContext::new(ThemeMode::Light);
    ctx.seed(ThemeMode::Dark);
    assert_eq!(ctx.theme(), ThemeMode::Dark);
}

#[test]
fn custom_marker_is_shared_by_writer_and_observer() {
    let ctx = ThemeContext::with_marker(ThemeMode::Light, "theme-dark");
    assert_eq!(ctx.marker_class(), "theme-dark");

    ctx.set_theme(ThemeMode::Dark);
    assert_eq!(dark_mode::marker_edit(ctx.theme(), ctx.marker_class()), dark_mode::MarkerEdit::Add("theme-dark"));
    ctx.set_theme(ThemeMode::Light);
    assert_eq!(dark_mode::marker_edit(ctx.theme(), ctx.marker_class()), dark_mode::MarkerEdit::Remove("theme-dark"));
}

#[test]
fn default_context_uses_dark_marker() {
    assert_eq!(ThemeContext::new(ThemeMode::Light).marker_class(), dark_mode::DEFAULT_MARKER_CLASS);
}

struct StaticRoot(bool);

impl RootMarker for StaticRoot {
    fn has_marker(&self) -> bool {
        self.0
    }

    fn watch(&self, _on_change: Box<dyn Fn(bool)>) -> Result<Subscription, ToggleError> {
        Ok(Subscription::new(|| {}))
    }
}

struct NoTransitions;

impl TransitionHost for NoTransitions {
    fn capability(&self) -> TransitionCapability<'_> {
        TransitionCapability::Immediate
    }

    fn viewport(&self) -> Viewport {
        Viewport { width: 100.0, height: 100.0 }
    }
}

struct Fixed;

impl ControlAnchor for Fixed {
    fn center(&self) -> Option<PointerOrigin> {
        Some(PointerOrigin { x: 50.0, y: 50.0 })
    }
}

#[test]
fn controller_drives_context_store() {
    let ctx = ThemeContext::new(ThemeMode::Light);
    let renders = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&renders);
    let ctl = ToggleController::new(ctx, ToggleOptions::default(), move |dark| sink.borrow_mut().push(dark));
    ctl.mount(&StaticRoot(false)).unwrap();

    let outcome = block_on(ctl.activate(&NoTransitions, &Fixed)).unwrap();
    assert_eq!(outcome, Activation::Immediate(ThemeMode::Dark));
    assert_eq!(ctx.theme(), ThemeMode::Dark);
    assert_eq!(*renders.borrow(), vec![false, true]);
}
