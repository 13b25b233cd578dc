//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::config::AuthConfig;
use crate::pages::home::HomePage;
use crate::util::browser::GateCapabilities;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ja">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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
/// Provides the auth config and browser capabilities, then routes every path
/// to the gated home page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(AuthConfig::default());
    provide_context(GateCapabilities::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-gate.css"/>
        <Title text="Login"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=WildcardSegment("path") view=HomePage/>
            </Routes>
        </Router>
    }
}
