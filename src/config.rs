//! Endpoint and cookie configuration for the auth gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment at runtime, so overrides are read
//! at compile time through `option_env!` and fall back to the local dev
//! backend. The resolved config is provided to components via Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

const DEFAULT_API_BASE: &str = "http://localhost:8000";
const DEFAULT_IDENTITY_PATH: &str = "/api/auth/me";
const DEFAULT_LOGIN_PATH: &str = "/api/auth/login";
const DEFAULT_TOKEN_COOKIE: &str = "access_token";

/// Where the identity service lives and how the gate talks to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// Scheme + host (+ port) of the identity service, without a trailing slash.
    pub api_base: String,
    /// Path of the identity-check endpoint. Any 2xx response means "logged in".
    pub identity_path: String,
    /// Path of the login redirect endpoint.
    pub login_path: String,
    /// Cookie holding the access token echoed as a bearer credential.
    pub token_cookie: String,
    /// Upper bound on the identity check. `None` waits for the browser indefinitely.
    pub check_timeout: Option<Duration>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl AuthConfig {
    /// Resolve config from `AUTH_GATE_*` variables captured at build time.
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("AUTH_GATE_API_BASE"),
            option_env!("AUTH_GATE_IDENTITY_PATH"),
            option_env!("AUTH_GATE_LOGIN_PATH"),
            option_env!("AUTH_GATE_TOKEN_COOKIE"),
            option_env!("AUTH_GATE_CHECK_TIMEOUT_MS"),
        )
    }

    fn from_overrides(
        api_base: Option<&str>,
        identity_path: Option<&str>,
        login_path: Option<&str>,
        token_cookie: Option<&str>,
        check_timeout_ms: Option<&str>,
    ) -> Self {
        let pick = |value: Option<&str>, fallback: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
                .to_owned()
        };
        Self {
            api_base: pick(api_base, DEFAULT_API_BASE).trim_end_matches('/').to_owned(),
            identity_path: normalize_path(&pick(identity_path, DEFAULT_IDENTITY_PATH)),
            login_path: normalize_path(&pick(login_path, DEFAULT_LOGIN_PATH)),
            token_cookie: pick(token_cookie, DEFAULT_TOKEN_COOKIE),
            check_timeout: check_timeout_ms
                .and_then(|ms| ms.trim().parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis),
        }
    }

    /// Absolute URL of the identity-check endpoint.
    pub fn identity_url(&self) -> String {
        format!("{}{}", self.api_base, self.identity_path)
    }

    /// Absolute URL that starts the login redirect flow and returns to `return_path`.
    ///
    /// Slashes in the return path are kept literal so the default lands on
    /// `.../api/auth/login?state=/`.
    pub fn login_url(&self, return_path: &str) -> String {
        let state = urlencoding::encode(&normalize_return_path(return_path)).replace("%2F", "/");
        format!("{}{}?state={state}", self.api_base, self.login_path)
    }
}

/// Clamp a post-login return path to a same-origin absolute path.
///
/// Anything that is not a single-slash path (empty, `https://...`, `//host`,
/// `/\host`) collapses to `/`.
pub fn normalize_return_path(path: &str) -> String {
    let path = path.trim();
    if path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\") {
        path.to_owned()
    } else {
        "/".to_owned()
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}
