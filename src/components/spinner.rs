//! Indeterminate progress indicator.

use leptos::prelude::*;

/// Spinning ring shown while a full-page navigation is pending.
#[component]
pub fn Spinner() -> impl IntoView {
    view! { <div class="spinner" role="progressbar" aria-busy="true" aria-label="Loading"></div> }
}
