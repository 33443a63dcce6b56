//! Role dashboards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each dashboard sits behind an authenticated guard and a role guard, so by
//! the time one renders the session holds a confirmed user of that role.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session_context::use_session;

/// Heading shared by the three dashboards.
#[component]
fn DashboardHeader(role: Role) -> impl IntoView {
    let session = use_session();
    let greeting = move || {
        session
            .current_user()
            .map_or_else(|| "Welcome back".to_owned(), |user| format!("Welcome back, {}", user.name))
    };
    view! {
        <header class="dashboard__header">
            <p class="dashboard__role">{role.label()}</p>
            <h1>{greeting}</h1>
        </header>
    }
}

#[component]
pub fn CandidateDashboardPage() -> impl IntoView {
    view! {
        <section class="dashboard">
            <DashboardHeader role=Role::Candidate/>
            <div class="dashboard__panel">
                <h2>"Applications"</h2>
                <p>"Jobs you apply to appear here with their status."</p>
                <a class="dashboard__action" href="/jobs">"Browse jobs"</a>
            </div>
            <div class="dashboard__panel">
                <h2>"Profile"</h2>
                <p>"Keep your headline and location current so employers can find you."</p>
            </div>
        </section>
    }
}

#[component]
pub fn EmployerDashboardPage() -> impl IntoView {
    view! {
        <section class="dashboard">
            <DashboardHeader role=Role::Employer/>
            <div class="dashboard__panel">
                <h2>"Your postings"</h2>
                <p>"Open roles and the candidates who applied to them."</p>
                <a class="dashboard__action" href="/post-job">"Post a job"</a>
            </div>
            <div class="dashboard__panel">
                <h2>"Company"</h2>
                <p>"Your public company page is listed under Companies."</p>
                <a class="dashboard__action" href="/companies">"View companies"</a>
            </div>
        </section>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <section class="dashboard">
            <DashboardHeader role=Role::Admin/>
            <div class="dashboard__panel">
                <h2>"Moderation"</h2>
                <ul class="dashboard__links">
                    <li><a href="/candidates">"Candidates"</a></li>
                    <li><a href="/companies">"Companies"</a></li>
                    <li><a href="/jobs">"Jobs"</a></li>
                </ul>
            </div>
        </section>
    }
}
