//! Theme toggle controller.
//!
//! Owns the observed dark flag for one toggle control. The flag is seeded from
//! the root marker at mount, kept live through a marker subscription, and
//! flipped by activations. An activation updates the theme store and the flag
//! in one synchronous step, either directly or inside a view transition whose
//! readiness gates the circular reveal.
//!
//! ACTIVATION RULES
//! ================
//! - A detached control (unmounted, or no anchor geometry) does nothing.
//! - Activations while a transition is pending are ignored.
//! - The flip happens exactly once even when the transition is rejected.
//! - Unmounting while a transition is pending cancels the reveal.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::capability::{ControlAnchor, RootMarker, Subscription, ThemeStore, TransitionCapability, TransitionHost};
use super::error::ToggleError;
use super::options::ToggleOptions;
use super::reveal::RevealAnimation;
use crate::state::theme::ThemeMode;

/// What a single activation did.
#[derive(Clone, Debug, PartialEq)]
pub enum Activation {
    /// The control was not attached; nothing changed.
    Detached,
    /// A transition was already pending; nothing changed.
    Ignored,
    /// Applied without animation.
    Immediate(ThemeMode),
    /// Applied inside a view transition, but the control went away before the reveal.
    Cancelled(ThemeMode),
    /// Applied inside a view transition and revealed.
    Animated { mode: ThemeMode, reveal: RevealAnimation },
}

impl Activation {
    /// The mode applied by this activation, if any.
    pub fn mode(&self) -> Option<ThemeMode> {
        match self {
            Self::Detached | Self::Ignored => None,
            Self::Immediate(mode) | Self::Cancelled(mode) | Self::Animated { mode, .. } => Some(*mode),
        }
    }
}

struct Shared<S> {
    store: S,
    options: ToggleOptions,
    dark: Cell<bool>,
    pending: Cell<bool>,
    mounted: Cell<bool>,
    subscription: RefCell<Option<Subscription>>,
    on_change: Box<dyn Fn(bool)>,
}

impl<S: ThemeStore> Shared<S> {
    fn sync(&self, dark: bool) {
        self.dark.set(dark);
        if self.mounted.get() {
            (self.on_change)(dark);
        }
    }

    fn apply(&self, mode: ThemeMode) {
        self.store.set_theme(mode);
        self.sync(mode.is_dark());
    }
}

/// Clears the pending marker when the activation finishes or is dropped.
struct PendingGuard<'a>(&'a Cell<bool>);

impl<'a> PendingGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Controller behind one theme toggle control. Clones share state.
pub struct ToggleController<S> {
    shared: Rc<Shared<S>>,
}

impl<S> Clone for ToggleController<S> {
    fn clone(&self) -> Self {
        Self { shared: Rc::clone(&self.shared) }
    }
}

impl<S: ThemeStore + 'static> ToggleController<S> {
    /// `on_change` receives every new flag value while mounted.
    pub fn new(store: S, options: ToggleOptions, on_change: impl Fn(bool) + 'static) -> Self {
        Self {
            shared: Rc::new(Shared {
                store,
                options,
                dark: Cell::new(false),
                pending: Cell::new(false),
                mounted: Cell::new(false),
                subscription: RefCell::new(None),
                on_change: Box::new(on_change),
            }),
        }
    }

    /// Seeds the flag from `root` and subscribes to marker changes.
    ///
    /// Mounting again replaces (and releases) the previous subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the subscription cannot be registered. The flag is
    /// still seeded in that case.
    pub fn mount<R: RootMarker + ?Sized>(&self, root: &R) -> Result<(), ToggleError> {
        self.shared.mounted.set(true);
        self.shared.sync(root.has_marker());

        let weak = Rc::downgrade(&self.shared);
        let subscription = root.watch(Box::new(move |present| {
            if let Some(shared) = weak.upgrade() {
                if shared.mounted.get() {
                    shared.sync(present);
                }
            }
        }))?;
        drop(self.shared.subscription.replace(Some(subscription)));
        Ok(())
    }

    /// Releases the subscription and cancels any pending reveal.
    pub fn unmount(&self) {
        self.shared.mounted.set(false);
        let subscription = self.shared.subscription.borrow_mut().take();
        drop(subscription);
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.mounted.get()
    }

    pub fn is_dark(&self) -> bool {
        self.shared.dark.get()
    }

    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.is_dark())
    }

    /// Whether a view transition started by this control has not yet settled.
    pub fn is_pending(&self) -> bool {
        self.shared.pending.get()
    }

    pub fn options(&self) -> &ToggleOptions {
        &self.shared.options
    }

    /// Flips the theme, animating the swap when the host supports view transitions.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition cannot start, its readiness signal
    /// rejects, or the reveal animation throws. The theme has been flipped in
    /// every error case.
    pub async fn activate<H, A>(&self, host: &H, anchor: &A) -> Result<Activation, ToggleError>
    where
        H: TransitionHost + ?Sized,
        A: ControlAnchor + ?Sized,
    {
        let shared = &self.shared;
        if !shared.mounted.get() || anchor.center().is_none() {
            return Ok(Activation::Detached);
        }
        if shared.pending.get() {
            return Ok(Activation::Ignored);
        }

        let next = ThemeMode::from_dark(shared.dark.get()).toggled();
        let api = match host.capability() {
            TransitionCapability::Immediate => {
                shared.apply(next);
                return Ok(Activation::Immediate(next));
            }
            TransitionCapability::Animated(api) => api,
        };

        let _pending = PendingGuard::enter(&shared.pending);
        let applied = Rc::new(Cell::new(false));
        let update = {
            let shared = Rc::clone(shared);
            let applied = Rc::clone(&applied);
            Box::new(move || {
                if !applied.replace(true) {
                    shared.apply(next);
                }
            })
        };

        let ready = match api.start(update) {
            Ok(ready) => ready.await,
            Err(err) => Err(err),
        };
        if !applied.replace(true) {
            shared.apply(next);
        }
        ready?;

        if !shared.mounted.get() {
            return Ok(Activation::Cancelled(next));
        }
        let Some(origin) = anchor.center() else {
            return Ok(Activation::Cancelled(next));
        };
        let reveal = RevealAnimation::new(origin, host.viewport(), &shared.options);
        api.animate_reveal(&reveal)?;
        Ok(Activation::Animated { mode: next, reveal })
    }
}
