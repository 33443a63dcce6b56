//! Two-step registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guest-only route rendering [`RegistrationWizard`]. The wizard is the single
//! source of truth for both drafts; inputs read from and write into it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form::{Notice, NoticeKind, TextField};
use crate::net::api::{ApiError, AuthApi};
use crate::net::types::Role;
use crate::state::registration::{AccountForm, ProfileForm, RegistrationWizard, WizardStep};
use crate::state::session_context::use_session;
use crate::util::validation::FieldErrors;

type Wizard = RwSignal<RegistrationWizard>;

fn account_input(
    wizard: Wizard,
    get: fn(&AccountForm) -> &String,
    set: fn(&mut AccountForm, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || wizard.with(|w| get(w.account()).clone())),
        Callback::new(move |value| wizard.update(|w| w.update_account(|a| set(a, value)))),
    )
}

fn profile_input(
    wizard: Wizard,
    get: fn(&ProfileForm) -> Option<&String>,
    set: fn(&mut ProfileForm, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || wizard.with(|w| get(w.profile()).cloned().unwrap_or_default())),
        Callback::new(move |value| wizard.update(|w| w.update_profile(|p| set(p, value)))),
    )
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let wizard: Wizard = RwSignal::new(RegistrationWizard::new());
    let errors = Signal::derive(move || wizard.with(|w| w.errors().clone()));
    let notice = RwSignal::new(None::<(NoticeKind, String)>);
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let on_account_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        notice.set(None);
        wizard.update(|w| {
            w.submit_account();
        });
    };

    let on_profile_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(request) = wizard.try_update(RegistrationWizard::submit_profile).flatten() else {
            return;
        };
        busy.set(true);
        notice.set(None);

        leptos::task::spawn_local(async move {
            match session.api().register(&request).await {
                Ok(()) => {
                    leptos::logging::log!("registered {} as {}", request.email, request.profile.role().as_str());
                    registered.set(true);
                }
                Err(err) => {
                    leptos::logging::warn!("registration failed: {err}");
                    if matches!(err, ApiError::Status { status: 409, .. }) {
                        wizard.update(|w| {
                            w.back();
                            w.set_error("email", err.user_message());
                        });
                    } else {
                        notice.set(Some((NoticeKind::Error, err.user_message())));
                    }
                    busy.set(false);
                }
            }
        });
    };

    let on_back = move |_| wizard.update(RegistrationWizard::back);
    let on_role = move |ev: leptos::ev::Event| {
        if let Some(role) = Role::parse(&event_target_value(&ev)) {
            wizard.update(|w| w.update_account(|a| a.role = role));
        }
    };

    let is_account_step = move || wizard.with(|w| w.step() == WizardStep::Account);
    let is_employer = move || wizard.with(|w| matches!(w.profile(), ProfileForm::Employer(_)));

    view! {
        <section class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Create an account"</h1>
                <p class="auth-card__step">
                    {move || if is_account_step() { "Step 1 of 2: Account" } else { "Step 2 of 2: Profile" }}
                </p>
                <Show
                    when=is_account_step
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=on_profile_submit novalidate>
                                <Show when=is_employer fallback=move || view! { <CandidateFields wizard=wizard errors=errors/> }>
                                    <EmployerFields wizard=wizard errors=errors/>
                                </Show>
                                <div class="auth-form__actions">
                                    <button class="auth-button auth-button--secondary" type="button" on:click=on_back>
                                        "Back"
                                    </button>
                                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                                        {move || if busy.get() { "Creating..." } else { "Create account" }}
                                    </button>
                                </div>
                            </form>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_account_submit novalidate>
                        <AccountFields wizard=wizard errors=errors/>
                        <div class="field">
                            <label class="field__label" for="role">"I am a"</label>
                            <select
                                class="field__input"
                                id="role"
                                prop:value=move || wizard.with(|w| w.account().role.as_str())
                                on:change=on_role
                            >
                                <option value=Role::Candidate.as_str()>"Job seeker"</option>
                                <option value=Role::Employer.as_str()>"Employer"</option>
                            </select>
                            <Show when=move || errors.with(|e| e.get("role").is_some())>
                                <p class="field__error">
                                    {move || errors.with(|e| e.get("role").map(str::to_owned))}
                                </p>
                            </Show>
                        </div>
                        <button class="auth-button" type="submit">"Continue"</button>
                    </form>
                </Show>
                <Notice message=notice/>
                <p class="auth-links">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </section>
    }
}

#[component]
fn AccountFields(wizard: Wizard, errors: Signal<FieldErrors>) -> impl IntoView {
    let (name, set_name) = account_input(wizard, |a| &a.name, |a, v| a.name = v);
    let (email, set_email) = account_input(wizard, |a| &a.email, |a, v| a.email = v);
    let (password, set_password) = account_input(wizard, |a| &a.password, |a, v| a.password = v);
    let (confirm, set_confirm) =
        account_input(wizard, |a| &a.confirm_password, |a, v| a.confirm_password = v);

    view! {
        <TextField label="Full name" name="name" value=name on_input=set_name errors=errors/>
        <TextField label="Email" name="email" input_type="email" value=email on_input=set_email errors=errors/>
        <TextField
            label="Password"
            name="password"
            input_type="password"
            value=password
            on_input=set_password
            errors=errors
        />
        <TextField
            label="Confirm password"
            name="confirmPassword"
            input_type="password"
            value=confirm
            on_input=set_confirm
            errors=errors
        />
    }
}

#[component]
fn CandidateFields(wizard: Wizard, errors: Signal<FieldErrors>) -> impl IntoView {
    let (headline, set_headline) = profile_input(
        wizard,
        |p| match p {
            ProfileForm::Candidate(form) => Some(&form.headline),
            ProfileForm::Employer(_) => None,
        },
        |p, v| {
            if let ProfileForm::Candidate(form) = p {
                form.headline = v;
            }
        },
    );
    let (location, set_location) = profile_input(
        wizard,
        |p| match p {
            ProfileForm::Candidate(form) => Some(&form.location),
            ProfileForm::Employer(_) => None,
        },
        |p, v| {
            if let ProfileForm::Candidate(form) = p {
                form.location = v;
            }
        },
    );

    view! {
        <TextField
            label="Headline"
            name="headline"
            placeholder="Backend engineer"
            value=headline
            on_input=set_headline
            errors=errors
        />
        <TextField label="Location" name="location" value=location on_input=set_location errors=errors/>
    }
}

#[component]
fn EmployerFields(wizard: Wizard, errors: Signal<FieldErrors>) -> impl IntoView {
    let (company, set_company) = profile_input(
        wizard,
        |p| match p {
            ProfileForm::Employer(form) => Some(&form.company_name),
            ProfileForm::Candidate(_) => None,
        },
        |p, v| {
            if let ProfileForm::Employer(form) = p {
                form.company_name = v;
            }
        },
    );
    let (website, set_website) = profile_input(
        wizard,
        |p| match p {
            ProfileForm::Employer(form) => Some(&form.company_website),
            ProfileForm::Candidate(_) => None,
        },
        |p, v| {
            if let ProfileForm::Employer(form) = p {
                form.company_website = v;
            }
        },
    );

    view! {
        <TextField label="Company name" name="companyName" value=company on_input=set_company errors=errors/>
        <TextField
            label="Company website"
            name="companyWebsite"
            input_type="url"
            placeholder="https://example.com"
            value=website
            on_input=set_website
            errors=errors
        />
    }
}
