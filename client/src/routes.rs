//! Route table.
//!
//! `app.rs` declares the same paths for the router; this table is the plain
//! data the header and tests use to reason about access without a router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;
use crate::state::guard::{Decision, Guard, evaluate_chain};
use crate::state::session::Session;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Jobs,
    JobDetail(String),
    Companies,
    CompanyDetail(String),
    Candidates,
    CandidateDetail(String),
    Login,
    Register,
    ForgotPassword,
    CandidateDashboard,
    EmployerDashboard,
    AdminDashboard,
    PostJob,
    NotFound,
}

/// Who may open a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    GuestOnly,
    Role(Role),
}

impl AppRoute {
    /// Match a location path. Query strings, fragments and a trailing slash
    /// are ignored.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["jobs"] => Self::Jobs,
            ["jobs", id] => Self::JobDetail((*id).to_owned()),
            ["companies"] => Self::Companies,
            ["companies", id] => Self::CompanyDetail((*id).to_owned()),
            ["candidates"] => Self::Candidates,
            ["candidates", id] => Self::CandidateDetail((*id).to_owned()),
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["forgot-password"] => Self::ForgotPassword,
            ["dashboard", "candidate"] => Self::CandidateDashboard,
            ["dashboard", "employer"] => Self::EmployerDashboard,
            ["dashboard", "admin"] => Self::AdminDashboard,
            ["post-job"] => Self::PostJob,
            _ => Self::NotFound,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Jobs => "/jobs".to_owned(),
            Self::JobDetail(id) => format!("/jobs/{id}"),
            Self::Companies => "/companies".to_owned(),
            Self::CompanyDetail(id) => format!("/companies/{id}"),
            Self::Candidates => "/candidates".to_owned(),
            Self::CandidateDetail(id) => format!("/candidates/{id}"),
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::ForgotPassword => "/forgot-password".to_owned(),
            Self::CandidateDashboard => Role::Candidate.dashboard_path().to_owned(),
            Self::EmployerDashboard => Role::Employer.dashboard_path().to_owned(),
            Self::AdminDashboard => Role::Admin.dashboard_path().to_owned(),
            Self::PostJob => "/post-job".to_owned(),
            Self::NotFound => "/404".to_owned(),
        }
    }

    #[must_use]
    pub fn access(&self) -> Access {
        match self {
            Self::Login | Self::Register | Self::ForgotPassword => Access::GuestOnly,
            Self::CandidateDashboard => Access::Role(Role::Candidate),
            Self::EmployerDashboard | Self::PostJob => Access::Role(Role::Employer),
            Self::AdminDashboard => Access::Role(Role::Admin),
            Self::Home
            | Self::Jobs
            | Self::JobDetail(_)
            | Self::Companies
            | Self::CompanyDetail(_)
            | Self::Candidates
            | Self::CandidateDetail(_)
            | Self::NotFound => Access::Public,
        }
    }

    /// Guards wrapping this route, outermost first.
    #[must_use]
    pub fn guards(&self) -> Vec<Guard> {
        match self.access() {
            Access::Public => Vec::new(),
            Access::GuestOnly => vec![Guard::Guest],
            Access::Role(role) => vec![Guard::Authenticated, Guard::Role(role)],
        }
    }

    /// Whether the session already satisfies every guard. Pending lookups
    /// count as not visible.
    #[must_use]
    pub fn visible_to(&self, session: &Session) -> bool {
        evaluate_chain(&self.guards(), session) == Decision::Allow
    }

    /// Listing a detail page belongs to, for nav highlighting.
    #[must_use]
    pub fn section(&self) -> Self {
        match self {
            Self::JobDetail(_) => Self::Jobs,
            Self::CompanyDetail(_) => Self::Companies,
            Self::CandidateDetail(_) => Self::Candidates,
            other => other.clone(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Jobs | Self::JobDetail(_) => "Jobs",
            Self::Companies | Self::CompanyDetail(_) => "Companies",
            Self::Candidates | Self::CandidateDetail(_) => "Candidates",
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::ForgotPassword => "Reset password",
            Self::CandidateDashboard | Self::EmployerDashboard | Self::AdminDashboard => "Dashboard",
            Self::PostJob => "Post a job",
            Self::NotFound => "Not found",
        }
    }
}

/// Header links in display order.
pub const NAV_LINKS: [AppRoute; 9] = [
    AppRoute::Jobs,
    AppRoute::Companies,
    AppRoute::Candidates,
    AppRoute::CandidateDashboard,
    AppRoute::EmployerDashboard,
    AppRoute::PostJob,
    AppRoute::AdminDashboard,
    AppRoute::Login,
    AppRoute::Register,
];

/// Header links the session may follow right now.
#[must_use]
pub fn nav_links(session: &Session) -> Vec<AppRoute> {
    NAV_LINKS
        .iter()
        .filter(|route| route.visible_to(session))
        .cloned()
        .collect()
}
