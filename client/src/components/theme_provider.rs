//! Theme store provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemeProvider` owns the application's resolved mode and the marker class
//! that mirrors it. Writes go through `ThemeStore::set_theme`, which mirrors
//! the mode onto that class on `<html>` and persists it; the toggler observes
//! the same class (via `ThemeContext::marker_class`) rather than this signal.

#[cfg(test)]
#[path = "theme_provider_test.rs"]
mod theme_provider_test;

use leptos::prelude::*;

use crate::state::theme::ThemeMode;
use crate::toggle::ThemeStore;
use crate::util::dark_mode;

/// Handle to the shared theme signal.
#[derive(Clone, Copy, Debug)]
pub struct ThemeContext {
    mode: RwSignal<ThemeMode>,
    marker_class: &'static str,
}

impl ThemeContext {
    pub fn new(initial: ThemeMode) -> Self {
        Self::with_marker(initial, dark_mode::DEFAULT_MARKER_CLASS)
    }

    pub fn with_marker(initial: ThemeMode, marker_class: &'static str) -> Self {
        Self { mode: RwSignal::new(initial), marker_class }
    }

    /// Root class written by this store; observers must watch the same one.
    pub fn marker_class(&self) -> &'static str {
        self.marker_class
    }

    /// Reactive read of the current mode.
    pub fn mode(&self) -> ReadSignal<ThemeMode> {
        self.mode.read_only()
    }

    /// Adopt a mode resolved at startup without persisting it as a user choice.
    pub fn seed(&self, mode: ThemeMode) {
        self.mode.set(mode);
        dark_mode::apply(mode, self.marker_class);
    }
}

impl ThemeStore for ThemeContext {
    fn theme(&self) -> ThemeMode {
        self.mode.get_untracked()
    }

    fn set_theme(&self, mode: ThemeMode) {
        if self.mode.get_untracked() != mode {
            self.mode.set(mode);
        }
        dark_mode::apply(mode, self.marker_class);
        dark_mode::persist(mode);
    }
}

/// Fetch the theme store provided by `ThemeProvider`.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Provides `ThemeContext` to its children.
///
/// On hydration the stored preference (or system scheme) is adopted.
#[component]
pub fn ThemeProvider(
    /// Root class that marks dark mode; defaults to `dark`.
    #[prop(optional)]
    marker_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = ThemeContext::with_marker(
        ThemeMode::default(),
        marker_class.unwrap_or(dark_mode::DEFAULT_MARKER_CLASS),
    );
    provide_context(theme);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let mode = dark_mode::read_preference();
        log::debug!("theme preference resolved to {mode}");
        theme.seed(mode);
    });

    children()
}
