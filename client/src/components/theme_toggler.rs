//! Animated light/dark toggle button.
//!
//! SYSTEM CONTEXT
//! ==============
//! The button mirrors the `<html>` marker class rather than the theme signal,
//! so changes made elsewhere (another control, devtools) show up without a
//! click. Activation goes through `ToggleController`, which plays a circular
//! view-transition reveal from the button when the browser supports it.
//!
//! Extra attributes given at the use site (`aria-label`, `data-*`) are spread
//! onto the `<button>` by Leptos.

#[cfg(test)]
#[path = "theme_toggler_test.rs"]
mod theme_toggler_test;

use leptos::prelude::*;

use crate::components::theme_provider::use_theme;
#[cfg(feature = "hydrate")]
use crate::toggle::ToggleController;
use crate::toggle::ToggleOptions;
#[cfg(feature = "hydrate")]
use crate::util::browser::{BrowserHost, DocumentRoot, ElementAnchor};

/// Glyph for the current flag: the sun offers light while dark, the moon offers dark.
pub fn toggle_glyph(dark: bool) -> &'static str {
    if dark { "☀" } else { "☾" }
}

fn button_class(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() { "theme-toggler".to_owned() } else { format!("theme-toggler {extra}") }
}

/// Theme toggle button with a circular reveal animation.
#[component]
pub fn AnimatedThemeToggler(
    /// Extra classes appended to the button's own.
    #[prop(into, optional)]
    class: String,
    /// Reveal animation settings; the root marker comes from the theme store.
    #[prop(optional)]
    options: ToggleOptions,
) -> impl IntoView {
    let theme = use_theme();
    let is_dark = RwSignal::new(theme.mode().get_untracked().is_dark());
    let button_ref = NodeRef::<leptos::html::Button>::new();
    #[cfg(not(feature = "hydrate"))]
    drop(options);

    #[cfg(feature = "hydrate")]
    let controller = StoredValue::new_local(ToggleController::new(theme, options, move |dark| {
        is_dark.set(dark);
    }));

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            controller.with_value(|ctl| {
                let mounted = DocumentRoot::from_window(theme.marker_class()).and_then(|root| ctl.mount(&root));
                if let Err(err) = mounted {
                    log::warn!("theme toggler could not observe the root marker: {err}");
                }
            });
        });
        on_cleanup(move || {
            controller.try_with_value(ToggleController::unmount);
        });
    }

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(ctl) = controller.try_with_value(Clone::clone) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let host = match BrowserHost::detect() {
                    Ok(host) => host,
                    Err(err) => {
                        log::warn!("theme toggle unavailable: {err}");
                        return;
                    }
                };
                let anchor = ElementAnchor::new(button_ref.try_get_untracked().flatten().map(Into::into));
                match ctl.activate(&host, &anchor).await {
                    Ok(outcome) => log::debug!("theme toggle: {outcome:?}"),
                    Err(err) => log::warn!("theme toggle: {err}"),
                }
            });
        }
    };

    view! {
        <button
            type="button"
            node_ref=button_ref
            class=button_class(&class)
            title="Toggle theme"
            aria-pressed=move || if is_dark.get() { "true" } else { "false" }
            on:click=on_click
        >
            <span class="sr-only">"Toggle theme"</span>
            <span class="theme-toggler__icon" aria-hidden="true">
                {move || toggle_glyph(is_dark.get())}
            </span>
        </button>
    }
}
