//! Landing page guarded by the auth gate.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::auth_gate::AuthGate;

/// Renders the gate for whatever path the user opened, so the login flow
/// returns them there.
#[component]
pub fn HomePage() -> impl IntoView {
    let return_path = use_location().pathname.get_untracked();

    view! {
        <main class="home-page">
            <AuthGate return_path/>
        </main>
    }
}
