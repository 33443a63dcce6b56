//! Sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guest-only route. A successful sign-in stores the token through the session
//! provider, confirms the user, and lands on that user's dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form::{Notice, NoticeKind, TextField};
use crate::net::types::LoginRequest;
use crate::state::session::Session;
use crate::state::session_context::use_session;
use crate::util::validation::FieldErrors;

/// Check the form before calling the backend.
///
/// # Errors
///
/// Returns per-field messages for a malformed email or an empty password.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.email("email", email);
    errors.required("password", password, "Password is required.");
    errors.finish(|| LoginRequest { email: email.trim().to_owned(), password: password.to_owned() })
}

/// Where a finished sign-in lands.
pub fn landing_path(session: &Session) -> &'static str {
    session.user().map_or("/", |user| user.role.dashboard_path())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let notice = RwSignal::new(None::<(NoticeKind, String)>);
    let busy = RwSignal::new(false);
    let landing = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        if let Some(path) = landing.get() {
            navigate(path, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        notice.set(None);
        busy.set(true);

        leptos::task::spawn_local(async move {
            match session.login(request).await {
                Ok(confirmed) => landing.set(Some(landing_path(&confirmed))),
                Err(err) => {
                    leptos::logging::warn!("login failed: {err}");
                    notice.set(Some((NoticeKind::Error, err.user_message())));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <TextField
                        label="Email"
                        name="email"
                        input_type="email"
                        placeholder="you@example.com"
                        value=email
                        on_input=Callback::new(move |v| email.set(v))
                        errors=errors
                    />
                    <TextField
                        label="Password"
                        name="password"
                        input_type="password"
                        value=password
                        on_input=Callback::new(move |v| password.set(v))
                        errors=errors
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Notice message=notice/>
                <p class="auth-links">
                    <a href="/forgot-password">"Forgot your password?"</a>
                    " · "
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </section>
    }
}
