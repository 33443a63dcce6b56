//! Password reset request page.
//!
//! TRADE-OFFS
//! ==========
//! The backend answers the same way for known and unknown addresses, so the
//! page always shows the same confirmation. A resend cooldown keeps users from
//! hammering the endpoint.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;

use crate::components::form::{Notice, NoticeKind, TextField};
use crate::config::RESEND_COOLDOWN_SECS;
use crate::net::api::AuthApi;
use crate::net::types::PasswordResetRequest;
use crate::state::session_context::use_session;
use crate::util::cooldown::Cooldown;
use crate::util::validation::FieldErrors;

pub const RESET_SENT_MESSAGE: &str = "If an account exists for that email, a reset link is on its way.";

/// Check the address before calling the backend.
///
/// # Errors
///
/// Returns the email field message when the address is missing or malformed.
pub fn validate_reset_email(email: &str) -> Result<PasswordResetRequest, FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.email("email", email);
    errors.finish(|| PasswordResetRequest { email: email.trim().to_owned() })
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let session = use_session();
    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let notice = RwSignal::new(None::<(NoticeKind, String)>);
    let busy = RwSignal::new(false);
    let cooldown = RwSignal::new(Cooldown::default());

    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    let alive_on_cleanup = alive.clone();
    on_cleanup(move || alive_on_cleanup.store(false, std::sync::atomic::Ordering::Relaxed));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || cooldown.get_untracked().is_active() {
            return;
        }
        let request = match validate_reset_email(&email.get_untracked()) {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            match session.api().request_password_reset(&request).await {
                Ok(()) => {
                    notice.set(Some((NoticeKind::Info, RESET_SENT_MESSAGE.to_owned())));
                    cooldown.update(|c| c.start(RESEND_COOLDOWN_SECS));
                    busy.set(false);
                    run_cooldown(cooldown, alive).await;
                }
                Err(err) => {
                    leptos::logging::warn!("password reset request failed: {err}");
                    notice.set(Some((NoticeKind::Error, err.user_message())));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Reset your password"</h1>
                <p class="auth-card__subtitle">"We will email you a link to choose a new password."</p>
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
                    <button
                        class="auth-button"
                        type="submit"
                        disabled=move || busy.get() || cooldown.get().is_active()
                    >
                        {move || cooldown.get().label()}
                    </button>
                </form>
                <Notice message=notice/>
                <p class="auth-links">
                    <a href="/login">"Back to sign in"</a>
                </p>
            </div>
        </section>
    }
}

/// Tick the cooldown once a second until it ends or the page unmounts.
async fn run_cooldown(cooldown: RwSignal<Cooldown>, alive: std::sync::Arc<std::sync::atomic::AtomicBool>) {
    #[cfg(feature = "hydrate")]
    loop {
        gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
        if !alive.load(std::sync::atomic::Ordering::Relaxed) {
            break;
        }
        let Some(running) = cooldown.try_update(Cooldown::tick) else {
            break;
        };
        if !running {
            break;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cooldown, alive);
    }
}
