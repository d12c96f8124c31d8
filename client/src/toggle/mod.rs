//! Theme toggle core: controller, reveal geometry, and host capabilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module is browser-agnostic. `components::theme_toggler` wires it to
//! Leptos and `util::browser` supplies the DOM-backed capabilities.

pub mod capability;
pub mod controller;
pub mod error;
pub mod options;
pub mod reveal;

pub use capability::{
    ControlAnchor, ReadyFuture, RootMarker, Subscription, ThemeStore, TransitionCapability, TransitionHost,
    ViewTransitionApi,
};
pub use controller::{Activation, ToggleController};
pub use error::{ThemeError, ToggleError};
pub use options::ToggleOptions;
pub use reveal::{PointerOrigin, RevealAnimation, Viewport, reveal_radius};
