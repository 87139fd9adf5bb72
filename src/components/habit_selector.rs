//! Habit Selector Component
//!
//! Drop-down choosing the habit every tab is scoped to.

use habit_client::models::find_habit;
use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HabitSelector() -> impl IntoView {
    let store = use_app_store();

    let selected_key = move || {
        store
            .active_habit()
            .with(|id| id.as_ref().map(ToString::to_string).unwrap_or_default())
    };

    let on_change = move |ev: web_sys::Event| {
        let key = event_target_value(&ev);
        // Keep the id in the form the backend sent it
        let chosen = store
            .habits()
            .with(|h| find_habit(&h.data, &key).map(|habit| habit.id.clone()));
        tracing::debug!(key = %key, "habit selected");
        store.active_habit().set(chosen);
    };

    view! {
        <select class="habit-select" prop:value=selected_key on:change=on_change>
            <option value="">"Select habit"</option>
            <For
                each=move || store.habits().with(|h| h.data.clone())
                key=|habit| habit.id.clone()
                children=move |habit| {
                    let key = habit.id.to_string();
                    let is_selected = {
                        let key = key.clone();
                        move || selected_key() == key
                    };
                    view! {
                        <option value=key selected=is_selected>{habit.name}</option>
                    }
                }
            />
        </select>
    }
}
