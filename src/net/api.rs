//! Identity check against the external auth service.
//!
//! Client-side (hydrate): one real `GET` via `gloo-net`, sent with
//! `credentials: include` and, when a token cookie was found, a bearer header.
//! Server-side (SSR): returns [`IdentityCheckError::Unavailable`] since the
//! session only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure kind collapses to "not logged in" at the gate; the variants
//! exist so the console log can say why. None of them carry the token.
//! The check has no cancellation and no timeout unless
//! [`AuthConfig::check_timeout`] is set.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use thiserror::Error;

use super::types::UserProfile;
use crate::config::AuthConfig;
use crate::state::auth::{AccessToken, GateEvent};

/// Why an identity check did not prove a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityCheckError {
    #[error("identity request failed: {0}")]
    Network(String),
    #[error("identity check rejected: {0}")]
    Status(u16),
    #[error("identity check timed out after {}ms", .0.as_millis())]
    TimedOut(Duration),
    #[error("identity check not available outside the browser")]
    Unavailable,
}

impl IdentityCheckError {
    /// `true` when the service answered and said no, as opposed to being unreachable.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Status(401 | 403))
    }
}

/// Map a settled check onto the gate state machine.
pub fn check_event(result: Result<Option<UserProfile>, IdentityCheckError>) -> GateEvent {
    match result {
        Ok(profile) => GateEvent::CheckSucceeded(profile),
        Err(_) => GateEvent::CheckFailed,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Parse a success body leniently; empty or foreign bodies yield no profile.
#[cfg(any(test, feature = "hydrate"))]
fn parse_profile(body: &str) -> Option<UserProfile> {
    serde_json::from_str::<UserProfile>(body)
        .ok()
        .filter(|profile| !profile.is_empty())
}

/// Ask the identity service whether this browser has a session.
///
/// Resolves exactly once. `Ok` carries the profile when the body had one.
///
/// # Errors
///
/// Returns [`IdentityCheckError`] on network failure, non-2xx status, timeout,
/// or when called outside the browser.
pub async fn check_identity(
    config: &AuthConfig,
    token: Option<&AccessToken>,
) -> Result<Option<UserProfile>, IdentityCheckError> {
    #[cfg(feature = "hydrate")]
    {
        let request = send_identity_request(config.identity_url(), token.map(AccessToken::bearer_header));
        match config.check_timeout {
            None => request.await,
            Some(limit) => {
                use futures::future::{Either, select};

                let request = std::pin::pin!(request);
                let deadline = std::pin::pin!(gloo_timers::future::sleep(limit));
                match select(request, deadline).await {
                    Either::Left((result, _)) => result,
                    Either::Right(((), _)) => Err(IdentityCheckError::TimedOut(limit)),
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(IdentityCheckError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn send_identity_request(
    url: String,
    bearer: Option<String>,
) -> Result<Option<UserProfile>, IdentityCheckError> {
    let mut builder = gloo_net::http::Request::get(&url).credentials(web_sys::RequestCredentials::Include);
    if let Some(value) = bearer.as_deref() {
        builder = builder.header("Authorization", value);
    }
    let resp = builder
        .send()
        .await
        .map_err(|e| IdentityCheckError::Network(e.to_string()))?;
    if !is_success_status(resp.status()) {
        return Err(IdentityCheckError::Status(resp.status()));
    }
    let body = resp.text().await.unwrap_or_default();
    Ok(parse_profile(&body))
}
