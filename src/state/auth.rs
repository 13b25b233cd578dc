//! Auth-gate state: what the current page knows about the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three inputs drive this state: the token cookie read at mount, the single
//! identity check, and the user's login click. The check and the click can
//! arrive in either order; a successful check always wins, so once the page is
//! `Authenticated` nothing moves it back.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;

use crate::net::types::UserProfile;

/// Access token read from the cookie store.
///
/// `Debug` is redacted so the token never leaks into logs or panic messages.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw token value. Only the request builder should need this.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value carrying this token.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Progress of the one identity check issued at mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckPhase {
    #[default]
    Pending,
    Settled,
}

/// The single view the gate renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    /// Login button.
    Unauthenticated,
    /// Spinner while the login navigation is pending.
    LoggingIn,
    /// Confirmation view.
    Authenticated,
}

/// Inputs to the gate state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateEvent {
    TokenLoaded(Option<AccessToken>),
    CheckSucceeded(Option<UserProfile>),
    CheckFailed,
    LoginRequested,
}

/// Transient auth state for one mounted gate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GateState {
    pub authenticated: bool,
    pub login_in_progress: bool,
    pub access_token: Option<AccessToken>,
    pub profile: Option<UserProfile>,
    pub check: CheckPhase,
}

impl GateState {
    /// Apply `event`, returning whether anything changed.
    ///
    /// A `LoginRequested` that returns `false` must not trigger navigation.
    pub fn apply(&mut self, event: GateEvent) -> bool {
        match event {
            GateEvent::TokenLoaded(token) => {
                if self.access_token.is_some() || token.is_none() {
                    return false;
                }
                self.access_token = token;
                true
            }
            GateEvent::CheckSucceeded(profile) => {
                let changed = !self.authenticated || self.check == CheckPhase::Pending;
                self.authenticated = true;
                self.check = CheckPhase::Settled;
                if profile.is_some() {
                    self.profile = profile;
                }
                changed
            }
            GateEvent::CheckFailed => {
                if self.check == CheckPhase::Settled {
                    return false;
                }
                self.check = CheckPhase::Settled;
                true
            }
            GateEvent::LoginRequested => {
                if self.authenticated || self.login_in_progress {
                    return false;
                }
                self.login_in_progress = true;
                true
            }
        }
    }

    /// Which view to render. Login button and confirmation are exclusive, and
    /// the spinner only shows after a click on an unauthenticated page.
    pub fn view(&self) -> GateView {
        if self.authenticated {
            GateView::Authenticated
        } else if self.login_in_progress {
            GateView::LoggingIn
        } else {
            GateView::Unauthenticated
        }
    }
}
