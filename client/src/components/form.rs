//! Small form building blocks shared by the auth pages.

use leptos::prelude::*;

use crate::util::validation::FieldErrors;

/// Labelled text input with its validation message.
#[component]
pub fn TextField(
    label: &'static str,
    /// Error key, also used as the input id.
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] errors: Signal<FieldErrors>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let message = move || errors.with(|e| e.get(name).map(str::to_owned));
    view! {
        <div class=move || if message().is_some() { "field field--invalid" } else { "field" }>
            <label class="field__label" for=name>{label}</label>
            <input
                class="field__input"
                id=name
                name=name
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || message().is_some()>
                <p class="field__error">{move || message().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "notice notice--info",
            Self::Error => "notice notice--error",
        }
    }
}

/// Transient message below a form. Hidden when `message` is empty.
#[component]
pub fn Notice(message: RwSignal<Option<(NoticeKind, String)>>) -> impl IntoView {
    view! {
        {move || {
            message
                .get()
                .map(|(kind, text)| view! { <p class=kind.class() role="alert">{text}</p> })
        }}
    }
}
