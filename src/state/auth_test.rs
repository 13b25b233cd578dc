use super::*;

fn profile(username: &str) -> UserProfile {
    UserProfile {
        username: Some(username.to_owned()),
        ..UserProfile::default()
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_unauthenticated_and_pending() {
    let state = GateState::default();
    assert!(!state.authenticated);
    assert!(!state.login_in_progress);
    assert!(state.access_token.is_none());
    assert_eq!(state.check, CheckPhase::Pending);
    assert_eq!(state.view(), GateView::Unauthenticated);
}

// =============================================================
// Identity check outcomes
// =============================================================

#[test]
fn check_success_authenticates_from_any_prior_view() {
    let mut idle = GateState::default();
    assert!(idle.apply(GateEvent::CheckSucceeded(None)));
    assert_eq!(idle.view(), GateView::Authenticated);

    let mut logging_in = GateState::default();
    logging_in.apply(GateEvent::LoginRequested);
    assert!(logging_in.apply(GateEvent::CheckSucceeded(None)));
    assert_eq!(logging_in.view(), GateView::Authenticated);
}

#[test]
fn check_success_keeps_returned_profile() {
    let mut state = GateState::default();
    state.apply(GateEvent::CheckSucceeded(Some(profile("taro"))));
    assert_eq!(state.profile, Some(profile("taro")));
    assert_eq!(state.check, CheckPhase::Settled);
}

#[test]
fn check_failure_shows_login_button_not_spinner() {
    let mut state = GateState::default();
    assert!(state.apply(GateEvent::CheckFailed));
    assert!(!state.authenticated);
    assert_eq!(state.view(), GateView::Unauthenticated);
}

#[test]
fn late_failure_never_revokes_success() {
    let mut state = GateState::default();
    state.apply(GateEvent::CheckSucceeded(None));
    assert!(!state.apply(GateEvent::CheckFailed));
    assert_eq!(state.view(), GateView::Authenticated);
}

// =============================================================
// Login click
// =============================================================

#[test]
fn login_click_moves_to_spinner_once() {
    let mut state = GateState::default();
    assert!(state.apply(GateEvent::LoginRequested));
    assert_eq!(state.view(), GateView::LoggingIn);
    assert!(!state.apply(GateEvent::LoginRequested));
    assert_eq!(state.view(), GateView::LoggingIn);
}

#[test]
fn login_click_after_success_is_ignored() {
    let mut state = GateState::default();
    state.apply(GateEvent::CheckSucceeded(None));
    assert!(!state.apply(GateEvent::LoginRequested));
    assert!(!state.login_in_progress);
    assert_eq!(state.view(), GateView::Authenticated);
}

#[test]
fn authenticated_wins_regardless_of_order() {
    let mut click_first = GateState::default();
    click_first.apply(GateEvent::LoginRequested);
    click_first.apply(GateEvent::CheckSucceeded(None));

    let mut check_first = GateState::default();
    check_first.apply(GateEvent::CheckSucceeded(None));
    check_first.apply(GateEvent::LoginRequested);

    assert_eq!(click_first.view(), GateView::Authenticated);
    assert_eq!(check_first.view(), GateView::Authenticated);
}

#[test]
fn failure_after_click_keeps_spinner() {
    let mut state = GateState::default();
    state.apply(GateEvent::LoginRequested);
    state.apply(GateEvent::CheckFailed);
    assert_eq!(state.view(), GateView::LoggingIn);
}

// =============================================================
// Token
// =============================================================

#[test]
fn token_is_loaded_once() {
    let mut state = GateState::default();
    assert!(!state.apply(GateEvent::TokenLoaded(None)));
    assert!(state.apply(GateEvent::TokenLoaded(Some(AccessToken::new("XYZ123")))));
    assert!(!state.apply(GateEvent::TokenLoaded(Some(AccessToken::new("other")))));
    assert_eq!(state.access_token.as_ref().map(AccessToken::expose), Some("XYZ123"));
}

#[test]
fn token_debug_output_is_redacted() {
    let mut state = GateState::default();
    state.apply(GateEvent::TokenLoaded(Some(AccessToken::new("XYZ123"))));
    let rendered = format!("{state:?}");
    assert!(!rendered.contains("XYZ123"));
    assert!(rendered.contains("<redacted>"));
}

#[test]
fn bearer_header_wraps_token() {
    assert_eq!(AccessToken::new("XYZ123").bearer_header(), "Bearer XYZ123");
}
