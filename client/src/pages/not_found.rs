//! Fallback page for unmatched paths.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Server render: answer with 404 instead of 200.
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href="/">"Go home"</a>
        </section>
    }
}
