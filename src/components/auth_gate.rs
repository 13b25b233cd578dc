//! Auth gate: login button, login spinner, or signed-in confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once per page view. On mount it reads the token cookie and spawns a
//! single identity check; clicking the button hands the page to the external
//! login flow through a full navigation.
//!
//! TRADE-OFFS
//! ==========
//! The check is never retried or cancelled. A result that arrives after the
//! gate is torn down is dropped. Until the check settles the login button is
//! shown, because the spinner only follows a click.

#[cfg(test)]
#[path = "auth_gate_test.rs"]
mod auth_gate_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::spinner::Spinner;
use crate::config::AuthConfig;
use crate::net::types::UserProfile;
use crate::state::auth::{AccessToken, GateEvent, GateState, GateView};
use crate::util::browser::{CookieSource, GateCapabilities, Navigator};
use crate::util::cookie::read_cookie;

/// Heading of the signed-in view.
pub const AUTHENTICATED_HEADING: &str = "ログインが完了しました！";
const LOGIN_LABEL: &str = "Login";

/// Build the state a freshly mounted gate starts from.
pub fn load_initial_state(cookies: &dyn CookieSource, config: &AuthConfig) -> GateState {
    let token = cookies
        .cookie_string()
        .and_then(|raw| read_cookie(&raw, &config.token_cookie))
        .map(AccessToken::new);
    let mut state = GateState::default();
    state.apply(GateEvent::TokenLoaded(token));
    state
}

/// Enter the logging-in state and navigate to `href`.
///
/// Navigates only when the state actually changed, so repeated clicks or a
/// click on an authenticated page never start a second redirect.
pub fn begin_login(state: &mut GateState, navigator: &dyn Navigator, href: &str) -> bool {
    if !state.apply(GateEvent::LoginRequested) {
        return false;
    }
    navigator.navigate(href);
    true
}

fn signed_in_label(profile: Option<&UserProfile>) -> Option<String> {
    profile
        .and_then(UserProfile::display_name)
        .map(|name| format!("Signed in as {name}"))
}

/// Gate that checks the session on mount and offers login when there is none.
///
/// `return_path` is sent as the login `state` so the user lands back here.
#[component]
pub fn AuthGate(#[prop(into)] return_path: String) -> impl IntoView {
    let config = use_context::<AuthConfig>().unwrap_or_default();
    let caps = use_context::<GateCapabilities>().unwrap_or_default();
    let gate = RwSignal::new(load_initial_state(caps.cookies.as_ref(), &config));

    #[cfg(feature = "hydrate")]
    spawn_identity_check(gate, config.clone());

    let login_href = config.login_url(&return_path);
    let navigator = caps.navigator.clone();
    let on_login = Callback::new(move |()| {
        let started = gate
            .try_update(|s| begin_login(s, navigator.as_ref(), &login_href))
            .unwrap_or(false);
        if started {
            leptos::logging::log!("login redirect started (state={return_path})");
        }
    });

    view! { <GateBody gate on_login/> }
}

/// Markup for whichever view `gate` currently selects.
#[component]
pub fn GateBody(gate: RwSignal<GateState>, on_login: Callback<()>) -> impl IntoView {
    view! {
        <div class="auth-gate">
            {move || match gate.with(GateState::view) {
                GateView::Unauthenticated => view! {
                    <button class="auth-gate__login" type="button" on:click=move |_| on_login.run(())>
                        {LOGIN_LABEL}
                    </button>
                }
                .into_any(),
                GateView::LoggingIn => view! { <Spinner/> }.into_any(),
                GateView::Authenticated => {
                    let label = gate.with(|s| signed_in_label(s.profile.as_ref()));
                    view! {
                        <div class="auth-gate__done">
                            <h1>{AUTHENTICATED_HEADING}</h1>
                            {label.map(|text| view! { <p class="auth-gate__who">{text}</p> })}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

/// Issue the mount-time identity check exactly once for this gate instance.
#[cfg(feature = "hydrate")]
fn spawn_identity_check(gate: RwSignal<GateState>, config: AuthConfig) {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::net::api::{check_event, check_identity};

    let alive = Arc::new(AtomicBool::new(true));
    let alive_task = alive.clone();
    let token = gate.with_untracked(|s| s.access_token.clone());
    leptos::task::spawn_local(async move {
        let result = check_identity(&config, token.as_ref()).await;
        if !alive_task.load(Ordering::Relaxed) {
            leptos::logging::log!("identity check settled after teardown; result dropped");
            return;
        }
        match &result {
            Ok(_) => leptos::logging::log!("identity check ok"),
            Err(e) if e.is_rejection() => leptos::logging::log!("not signed in ({e})"),
            Err(e) => leptos::logging::warn!("{e}"),
        }
        let _ = gate.try_update(|s| s.apply(check_event(result)));
    });
    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}
