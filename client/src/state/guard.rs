//! Route access decisions.
//!
//! ARCHITECTURE
//! ============
//! [`evaluate`] is a pure function from a guard and a session to a
//! [`Decision`]. [`GuardMachine`] wraps it with the per-mount lifecycle
//! (fetch, wait, render or redirect once). The Leptos adapter in
//! `components::route_guard` is the only place that performs fetches and
//! navigation.
//!
//! FAILURE MODEL
//! =============
//! Guards fail closed: an unconfirmed identity never satisfies a role check,
//! and a denied guard never renders its subtree.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/login";

/// Access requirement for a route subtree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Guard {
    /// A token must be present.
    Authenticated,
    /// No confirmed user (login, register, password reset). A token whose
    /// lookup failed still counts as a guest so the visitor can sign in again.
    Guest,
    /// The confirmed user must have this role.
    Role(Role),
    /// The confirmed user must have one of these roles.
    AnyRole(Vec<Role>),
}

impl Guard {
    /// Whether the decision depends on the user record rather than token presence.
    #[must_use]
    pub fn needs_user(&self) -> bool {
        !matches!(self, Self::Authenticated)
    }

    fn admits(&self, role: Role) -> bool {
        match self {
            Self::Role(required) => *required == role,
            Self::AnyRole(roles) => roles.contains(&role),
            Self::Authenticated | Self::Guest => false,
        }
    }
}

/// Outcome of evaluating a guard against a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The user lookup has not resolved.
    Pending,
    Allow,
    /// Redirect target.
    Deny(&'static str),
}

impl Decision {
    /// Evaluate `inner` only if `self` allows. Used for nested guards.
    #[must_use]
    pub fn and_then(self, inner: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Allow => inner(),
            Self::Pending | Self::Deny(_) => self,
        }
    }
}

/// Decide access for `guard` given the current `session`.
#[must_use]
pub fn evaluate(guard: &Guard, session: &Session) -> Decision {
    match guard {
        Guard::Authenticated => {
            if session.is_authenticated() {
                Decision::Allow
            } else {
                Decision::Deny(LOGIN_PATH)
            }
        }
        Guard::Guest => match session {
            Session::LoggedOut | Session::Unverified => Decision::Allow,
            Session::LoggingIn => Decision::Pending,
            Session::LoggedIn(user) => Decision::Deny(user.role.dashboard_path()),
        },
        Guard::Role(_) | Guard::AnyRole(_) => match session {
            Session::LoggedOut | Session::Unverified => Decision::Deny(LOGIN_PATH),
            Session::LoggingIn => Decision::Pending,
            Session::LoggedIn(user) if guard.admits(user.role) => Decision::Allow,
            Session::LoggedIn(user) => Decision::Deny(user.role.dashboard_path()),
        },
    }
}

/// Evaluate guards outermost first; inner guards are skipped unless every
/// outer guard allows.
#[must_use]
pub fn evaluate_chain(guards: &[Guard], session: &Session) -> Decision {
    guards
        .iter()
        .fold(Decision::Allow, |decision, guard| decision.and_then(|| evaluate(guard, session)))
}

/// Lifecycle phase of one mounted guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPhase {
    Initial,
    /// Waiting for the user lookup started at mount.
    Loading,
    Allowed,
    Redirecting(&'static str),
}

/// What the adapter should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Refresh the session, then call [`GuardMachine::fetch_settled`].
    Fetch,
    /// Render a placeholder.
    Wait,
    /// Render the protected subtree.
    Render,
    /// Navigate to the target. Emitted once per mount.
    Navigate(&'static str),
    /// Render nothing; navigation was already requested.
    Hold,
}

impl Step {
    #[must_use]
    pub fn renders_children(self) -> bool {
        matches!(self, Self::Render)
    }
}

/// Per-mount guard state. A fresh mount starts from [`GuardPhase::Initial`].
#[derive(Clone, Debug)]
pub struct GuardMachine {
    guard: Guard,
    phase: GuardPhase,
}

impl GuardMachine {
    #[must_use]
    pub fn new(guard: Guard) -> Self {
        Self { guard, phase: GuardPhase::Initial }
    }

    #[must_use]
    pub fn guard(&self) -> &Guard {
        &self.guard
    }

    #[must_use]
    pub fn phase(&self) -> GuardPhase {
        self.phase
    }

    /// Enter the lifecycle. Guards that depend on the user record always
    /// fetch first when a token exists, so the decision reflects a lookup
    /// made during this mount.
    pub fn mount(&mut self, session: &Session) -> Step {
        if self.phase != GuardPhase::Initial {
            return self.observe();
        }
        if self.guard.needs_user() && session.is_authenticated() {
            self.phase = GuardPhase::Loading;
            return Step::Fetch;
        }
        self.settle(evaluate(&self.guard, session))
    }

    /// The refresh requested by [`Step::Fetch`] finished (either way).
    pub fn fetch_settled(&mut self, session: &Session) -> Step {
        if self.phase != GuardPhase::Loading {
            return self.observe();
        }
        match evaluate(&self.guard, session) {
            // The lookup was superseded by a newer sign-in; look up again.
            Decision::Pending => Step::Fetch,
            decision => self.settle(decision),
        }
    }

    /// Current step without changing state, for re-renders.
    #[must_use]
    pub fn observe(&self) -> Step {
        match self.phase {
            GuardPhase::Initial | GuardPhase::Loading => Step::Wait,
            GuardPhase::Allowed => Step::Render,
            GuardPhase::Redirecting(_) => Step::Hold,
        }
    }

    fn settle(&mut self, decision: Decision) -> Step {
        match decision {
            Decision::Allow => {
                self.phase = GuardPhase::Allowed;
                Step::Render
            }
            Decision::Deny(target) => {
                leptos::logging::log!("guard {:?} denied; redirecting to {target}", self.guard);
                self.phase = GuardPhase::Redirecting(target);
                Step::Navigate(target)
            }
            Decision::Pending => {
                self.phase = GuardPhase::Loading;
                Step::Fetch
            }
        }
    }
}
