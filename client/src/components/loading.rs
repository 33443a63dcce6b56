//! Placeholder shown while a guard or page waits on the session.

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="loading__spinner"></span>
            <span class="loading__label">"Loading..."</span>
        </div>
    }
}
