#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn browser_cookies_are_absent_in_non_hydrate_tests() {
    assert_eq!(BrowserCookies.cookie_string(), None);
}

#[test]
fn browser_navigator_is_noop_but_callable() {
    BrowserNavigator.navigate("http://localhost:8000/api/auth/login?state=/");
}

#[test]
fn default_capabilities_use_browser_implementations() {
    let caps = GateCapabilities::default();
    assert_eq!(caps.cookies.cookie_string(), None);
    caps.navigator.navigate("/");
}
