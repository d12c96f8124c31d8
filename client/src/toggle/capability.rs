//! Host capabilities the toggle controller is written against.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches the DOM directly. The browser adapters in
//! `util::browser` implement these traits under `hydrate`; tests supply
//! in-memory fakes.

#[cfg(test)]
#[path = "capability_test.rs"]
mod capability_test;

use std::fmt;

use futures::future::LocalBoxFuture;

use super::error::ToggleError;
use super::reveal::{PointerOrigin, RevealAnimation, Viewport};
use crate::state::theme::ThemeMode;

/// Owner of the application's current theme.
pub trait ThemeStore {
    fn theme(&self) -> ThemeMode;

    /// Synchronous and idempotent for the same value.
    fn set_theme(&self, mode: ThemeMode);
}

impl<T: ThemeStore + ?Sized> ThemeStore for std::rc::Rc<T> {
    fn theme(&self) -> ThemeMode {
        (**self).theme()
    }

    fn set_theme(&self, mode: ThemeMode) {
        (**self).set_theme(mode);
    }
}

/// Root element marker that mirrors the resolved theme.
pub trait RootMarker {
    /// One synchronous read of marker presence.
    fn has_marker(&self) -> bool;

    /// Registers `on_change` to run after every change to the marker, with the
    /// marker presence at notification time.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the registration.
    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Result<Subscription, ToggleError>;
}

/// The interactive control the reveal is anchored on.
pub trait ControlAnchor {
    /// Center of the control in client coordinates, or `None` once detached.
    fn center(&self) -> Option<PointerOrigin>;
}

/// Resolves once the old and new visual snapshots are captured.
pub type ReadyFuture = LocalBoxFuture<'static, Result<(), ToggleError>>;

/// Animated view transition support.
pub trait ViewTransitionApi {
    /// Runs `update` inside a view transition and returns its readiness signal.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition could not be started at all.
    fn start(&self, update: Box<dyn FnOnce()>) -> Result<ReadyFuture, ToggleError>;

    /// Plays the reveal over the new snapshot layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the animation call throws.
    fn animate_reveal(&self, reveal: &RevealAnimation) -> Result<(), ToggleError>;
}

/// Outcome of feature detection for one activation.
pub enum TransitionCapability<'a> {
    Animated(&'a dyn ViewTransitionApi),
    Immediate,
}

impl fmt::Debug for TransitionCapability<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Animated(_) => f.write_str("Animated"),
            Self::Immediate => f.write_str("Immediate"),
        }
    }
}

/// Environment an activation runs in.
pub trait TransitionHost {
    fn capability(&self) -> TransitionCapability<'_>;

    fn viewport(&self) -> Viewport;
}

/// Scoped registration handle; releases on drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// Releases the registration now. Later calls and the eventual drop are no-ops.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}
