//! Public listing and detail pages for jobs, companies and candidates.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Listing shell with a title and a blurb.
#[component]
fn Listing(title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <section class="listing">
            <h1>{title}</h1>
            <p class="listing__blurb">{blurb}</p>
            <ul class="listing__items"></ul>
        </section>
    }
}

#[component]
fn Detail(kind: &'static str, back_href: &'static str, back_label: &'static str) -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").unwrap_or_default());
    view! {
        <section class="detail">
            <a class="detail__back" href=back_href>{back_label}</a>
            <h1>{kind} " " <span class="detail__id">{id}</span></h1>
        </section>
    }
}

#[component]
pub fn JobsPage() -> impl IntoView {
    view! { <Listing title="Jobs" blurb="Open roles from companies hiring now."/> }
}

#[component]
pub fn JobDetailPage() -> impl IntoView {
    view! { <Detail kind="Job" back_href="/jobs" back_label="All jobs"/> }
}

#[component]
pub fn CompaniesPage() -> impl IntoView {
    view! { <Listing title="Companies" blurb="Employers with a profile on the board."/> }
}

#[component]
pub fn CompanyDetailPage() -> impl IntoView {
    view! { <Detail kind="Company" back_href="/companies" back_label="All companies"/> }
}

#[component]
pub fn CandidatesPage() -> impl IntoView {
    view! { <Listing title="Candidates" blurb="People open to new roles."/> }
}

#[component]
pub fn CandidateDetailPage() -> impl IntoView {
    view! { <Detail kind="Candidate" back_href="/candidates" back_label="All candidates"/> }
}
