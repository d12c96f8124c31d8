//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::theme_provider::ThemeProvider;
use crate::components::theme_toggler::AnimatedThemeToggler;
use crate::pages::home::HomePage;
use crate::util::dark_mode::BOOTSTRAP_SCRIPT;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=BOOTSTRAP_SCRIPT></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Errors raised anywhere below are caught by the boundary; the theme store
/// wraps everything else.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/daybreak.css"/>
        <Title text="Daybreak"/>

        <ErrorBoundary fallback=|errors| {
            view! {
                <div class="error-screen">
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, err)| view! { <li>{err.to_string()}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            }
        }>
            <ThemeProvider>
                <Router>
                    <header class="app-header">
                        <a href="/" class="app-header__title">"Daybreak"</a>
                        <span class="app-header__spacer"></span>
                        <AnimatedThemeToggler class="app-header__theme"/>
                    </header>
                    <main class="app-main">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=HomePage/>
                        </Routes>
                    </main>
                </Router>
            </ThemeProvider>
        </ErrorBoundary>
    }
}
