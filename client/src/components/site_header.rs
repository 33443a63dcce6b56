//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links come from the route table filtered by the current session, so the
//! header never offers a route whose guards would bounce the user.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::{AppRoute, nav_links};
use crate::state::guard::LOGIN_PATH;
use crate::state::session::Session;
use crate::state::session_context::use_session;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;

    // Until the token is read, only public links are shown.
    let visible_session = move || if session.ready() { session.session() } else { Session::LoggingIn };
    let current = move || AppRoute::resolve(&pathname.get()).section();

    let links = move || {
        nav_links(&visible_session())
            .into_iter()
            .map(|route| {
                let href = route.path();
                let label = route.label();
                let active = move || current() == route.section();
                view! {
                    <a
                        class=move || if active() { "site-header__link site-header__link--active" } else { "site-header__link" }
                        href=href
                    >
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"JobBoard"</a>
            <nav class="site-header__nav">{links}</nav>
            <Show when=move || session.ready() && session.is_authenticated()>
                <div class="site-header__account">
                    <span class="site-header__user">
                        {move || session.current_user().map(|u| format!("{} ({})", u.name, u.role.label()))}
                    </span>
                    <a class="site-header__sign-out" href=LOGIN_PATH on:click=move |_| session.sign_out()>
                        "Sign out"
                    </a>
                </div>
            </Show>
        </header>
    }
}
