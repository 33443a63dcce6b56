//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h1>"Find your next role"</h1>
            <p class="home__lead">"Browse open jobs, meet the companies behind them, or post a role of your own."</p>
            <div class="home__actions">
                <a class="home__cta" href="/jobs">"Browse jobs"</a>
                <a class="home__cta home__cta--secondary" href="/register">"Create an account"</a>
            </div>
        </section>
    }
}
