//! Landing page.

use leptos::prelude::*;

use crate::components::theme_provider::use_theme;

/// Home page showing the active theme.
#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme();
    let mode = theme.mode();

    view! {
        <section class="home">
            <h1 class="home__title">"Daybreak"</h1>
            <p class="home__mode">"Current theme: " {move || mode.get().as_str()}</p>
        </section>
    }
}
