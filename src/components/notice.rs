//! Inline Notice Component

use leptos::prelude::*;

/// Per-view error notice; renders nothing while `message` is `None`.
#[component]
pub fn Notice(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! { <div class="notice" role="alert">{text}</div> }
        })
    }
}

/// Muted "Loading..." line shown while a view's fetch is in flight.
#[component]
pub fn LoadingHint(#[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <p class="muted loading">"Loading..."</p>
        </Show>
    }
}
