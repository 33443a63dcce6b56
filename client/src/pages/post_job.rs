//! Job posting page for employers.

use leptos::prelude::*;

#[component]
pub fn PostJobPage() -> impl IntoView {
    view! {
        <section class="post-job">
            <h1>"Post a job"</h1>
            <p>"Describe the role; it is published under your company once submitted."</p>
            <a href="/dashboard/employer">"Back to dashboard"</a>
        </section>
    }
}
