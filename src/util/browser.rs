//! Browser capabilities the gate depends on: reading cookies and navigating.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cookie store and `window.location` are page-global state. Components
//! reach them only through these traits, provided via Leptos context, so
//! tests can swap in fakes. The browser implementations no-op outside the
//! `hydrate` build.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use std::sync::Arc;

/// Source of the raw `document.cookie` string.
pub trait CookieSource: Send + Sync {
    fn cookie_string(&self) -> Option<String>;
}

/// Full-page navigation.
pub trait Navigator: Send + Sync {
    fn navigate(&self, href: &str);
}

/// Reads `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

impl CookieSource for BrowserCookies {
    fn cookie_string(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()?.document()?;
            let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
            html.cookie().ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// Assigns `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, href: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(href);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = href;
        }
    }
}

/// Capabilities handed to the gate through context.
#[derive(Clone)]
pub struct GateCapabilities {
    pub cookies: Arc<dyn CookieSource>,
    pub navigator: Arc<dyn Navigator>,
}

impl Default for GateCapabilities {
    fn default() -> Self {
        Self {
            cookies: Arc::new(BrowserCookies),
            navigator: Arc::new(BrowserNavigator),
        }
    }
}
