//! Shared redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guard redirects the same way: once, replacing the history entry so
//! the back button does not land on a page that bounces again.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::guard::Step;

/// Navigation target for a step, if it asks for one.
#[must_use]
pub fn redirect_target(step: Step) -> Option<&'static str> {
    match step {
        Step::Navigate(target) => Some(target),
        Step::Fetch | Step::Wait | Step::Render | Step::Hold => None,
    }
}

/// Options for guard redirects.
#[must_use]
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Navigate when `step` becomes [`Step::Navigate`], then park it on
/// [`Step::Hold`] so later runs of the effect do nothing.
pub fn install_guard_redirect<F>(step: RwSignal<Step>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || follow_redirect(step, &navigate));
}

/// One run of the redirect effect.
fn follow_redirect(step: RwSignal<Step>, navigate: &impl Fn(&str, NavigateOptions)) {
    if let Some(target) = redirect_target(step.get()) {
        step.set(Step::Hold);
        navigate(target, redirect_options());
    }
}
