//! Leptos adapter for [`GuardMachine`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a route subtree. This is the only component that refreshes the
//! session on a guard's behalf and the only one that navigates on denial.
//!
//! LIFECYCLE
//! =========
//! The machine is mounted once the session provider is ready. A `Fetch` step
//! spawns a refresh; its result is applied only while the component is still
//! mounted. Denials go through `install_guard_redirect`, which navigates once.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::Loading;
use crate::state::guard::{Guard, GuardMachine, Step};
use crate::state::session_context::{SessionContext, use_session};
use crate::util::auth::install_guard_redirect;

/// Render `children` only when `guard` allows the current session.
#[component]
pub fn RouteGuard(guard: Guard, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let machine = StoredValue::new(GuardMachine::new(guard));
    let step = RwSignal::new(Step::Wait);

    install_guard_redirect(step, use_navigate());

    let alive = Arc::new(AtomicBool::new(true));
    let alive_on_cleanup = alive.clone();
    on_cleanup(move || alive_on_cleanup.store(false, Ordering::Relaxed));

    Effect::new(move || {
        if !session.ready() {
            return;
        }
        let Some(next) = machine.try_update_value(|m| m.mount(&session.session_untracked())) else {
            return;
        };
        if next == Step::Fetch {
            step.set(Step::Wait);
            spawn_fetch(session, machine, step, alive.clone());
        } else {
            step.set(next);
        }
    });

    view! {
        <Show
            when=move || step.get().renders_children()
            fallback=move || (step.get() == Step::Wait).then(|| view! { <Loading/> })
        >
            {children()}
        </Show>
    }
}

/// Refresh until the machine settles. Stops early once unmounted.
fn spawn_fetch(
    session: SessionContext,
    machine: StoredValue<GuardMachine>,
    step: RwSignal<Step>,
    alive: Arc<AtomicBool>,
) {
    leptos::task::spawn_local(async move {
        loop {
            session.refresh().await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            match machine.try_update_value(|m| m.fetch_settled(&session.session_untracked())) {
                Some(Step::Fetch) => {}
                Some(next) => {
                    step.set(next);
                    return;
                }
                None => return,
            }
        }
    });
}
