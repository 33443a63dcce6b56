//! Root application component with routing and the session provider.
//!
//! ROUTING
//! =======
//! Guards compose by nesting. The dashboard parent route carries the
//! authenticated guard and each child adds its role guard, so a role check
//! only mounts after the token check has allowed.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::route_guard::RouteGuard;
use crate::components::site_header::SiteHeader;
use crate::net::types::Role;
use crate::pages::dashboard::{AdminDashboardPage, CandidateDashboardPage, EmployerDashboardPage};
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::home::HomePage;
use crate::pages::listings::{
    CandidateDetailPage, CandidatesPage, CompaniesPage, CompanyDetailPage, JobDetailPage, JobsPage,
};
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::post_job::PostJobPage;
use crate::pages::register::RegisterPage;
use crate::state::guard::Guard;
use crate::state::session_context::provide_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();

    view! {
        <Stylesheet id="leptos" href="/pkg/jobboard.css"/>
        <Title text="JobBoard"/>

        <Router>
            <SiteHeader/>
            <main class="page">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("jobs") view=JobsPage/>
                    <Route path=(StaticSegment("jobs"), ParamSegment("id")) view=JobDetailPage/>
                    <Route path=StaticSegment("companies") view=CompaniesPage/>
                    <Route path=(StaticSegment("companies"), ParamSegment("id")) view=CompanyDetailPage/>
                    <Route path=StaticSegment("candidates") view=CandidatesPage/>
                    <Route path=(StaticSegment("candidates"), ParamSegment("id")) view=CandidateDetailPage/>

                    <Route path=StaticSegment("login") view=guest(LoginPage)/>
                    <Route path=StaticSegment("register") view=guest(RegisterPage)/>
                    <Route path=StaticSegment("forgot-password") view=guest(ForgotPasswordPage)/>

                    <ParentRoute path=StaticSegment("dashboard") view=AuthenticatedOutlet>
                        <Route path=StaticSegment("candidate") view=role(Role::Candidate, CandidateDashboardPage)/>
                        <Route path=StaticSegment("employer") view=role(Role::Employer, EmployerDashboardPage)/>
                        <Route path=StaticSegment("admin") view=role(Role::Admin, AdminDashboardPage)/>
                    </ParentRoute>
                    <ParentRoute path=StaticSegment("post-job") view=AuthenticatedOutlet>
                        <Route path=StaticSegment("") view=role(Role::Employer, PostJobPage)/>
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}

/// Outer guard for every signed-in route.
#[component]
fn AuthenticatedOutlet() -> impl IntoView {
    view! {
        <RouteGuard guard=Guard::Authenticated>
            <Outlet/>
        </RouteGuard>
    }
}

fn guest<V: IntoView + Send + 'static>(page: fn() -> V) -> impl Fn() -> AnyView + Clone + Send + Sync + 'static {
    move || view! { <RouteGuard guard=Guard::Guest>{page()}</RouteGuard> }.into_any()
}

fn role<V: IntoView + Send + 'static>(
    role: Role,
    page: fn() -> V,
) -> impl Fn() -> AnyView + Clone + Send + Sync + 'static {
    move || view! { <RouteGuard guard=Guard::Role(role)>{page()}</RouteGuard> }.into_any()
}
