//! Theme persistence and root marker application.
//!
//! Reads the user's preference from `localStorage` and toggles a marker class
//! (`dark` unless the theme provider picks another) on the `<html>` element. Writes go back to `localStorage`.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemeMode;

/// `localStorage` key holding the persisted mode name.
pub const STORAGE_KEY: &str = "daybreak_theme";

/// Inline `<head>` script that applies the stored or system theme before the
/// WASM bundle loads, so the first paint already has the default marker.
pub const BOOTSTRAP_SCRIPT: &str = "(function(){try{var t=localStorage.getItem('daybreak_theme');\
var d=t==='dark'||(t!=='light'&&window.matchMedia('(prefers-color-scheme: dark)').matches);\
if(d){document.documentElement.classList.add('dark');}}catch(e){}})();";

/// Class on `<html>` whose presence means dark mode is active, unless the
/// theme provider is given another.
pub const DEFAULT_MARKER_CLASS: &str = "dark";

/// Change to the root class list that mirrors a mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerEdit<'a> {
    Add(&'a str),
    Remove(&'a str),
}

pub fn marker_edit(mode: ThemeMode, marker_class: &str) -> MarkerEdit<'_> {
    if mode.is_dark() { MarkerEdit::Add(marker_class) } else { MarkerEdit::Remove(marker_class) }
}

/// Pick a mode from a stored preference, falling back to the system scheme.
///
/// Unparseable stored values are ignored.
pub fn resolve_preference(stored: Option<&str>, prefers_dark: bool) -> ThemeMode {
    match stored.map(str::parse::<ThemeMode>) {
        Some(Ok(mode)) => mode,
        Some(Err(err)) => {
            log::warn!("ignoring stored theme preference: {err}");
            ThemeMode::from_dark(prefers_dark)
        }
        None => ThemeMode::from_dark(prefers_dark),
    }
}

/// Read the theme preference.
///
/// Returns the stored mode if the user picked one, otherwise the system
/// `prefers-color-scheme`. Always light outside the browser.
pub fn read_preference() -> ThemeMode {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ThemeMode::Light;
        };

        let stored = match window.local_storage() {
            Ok(Some(storage)) => storage.get_item(STORAGE_KEY).unwrap_or_default(),
            _ => None,
        };
        let prefers_dark = matches!(
            window.match_media("(prefers-color-scheme: dark)"),
            Ok(Some(mq)) if mq.matches()
        );
        resolve_preference(stored.as_deref(), prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeMode::Light
    }
}

/// Add or remove `marker_class` on `<html>` and set `color-scheme`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn apply(mode: ThemeMode, marker_class: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        let class_list = root.class_list();
        let marked = match marker_edit(mode, marker_class) {
            MarkerEdit::Add(class) => class_list.add_1(class),
            MarkerEdit::Remove(class) => class_list.remove_1(class),
        };
        if let Err(err) = marked {
            log::warn!("failed to update theme marker: {err:?}");
        }

        if let Some(html) = root.dyn_ref::<web_sys::HtmlElement>() {
            if let Err(err) = html.style().set_property("color-scheme", mode.as_str()) {
                log::warn!("failed to set color-scheme: {err:?}");
            }
        }
    }
}

/// Save the mode to localStorage.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn persist(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Err(err) = storage.set_item(STORAGE_KEY, mode.as_str()) {
                    log::warn!("failed to persist theme: {err:?}");
                }
            }
        }
    }
}
