//! Dashboard Component
//!
//! Habit overview plus static tips.

use leptos::prelude::*;

use crate::components::{LoadingHint, Notice};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let notice = Signal::derive(move || store.habits().with(|h| h.notice.clone()));
    let loading = Signal::derive(move || store.habits().with(|h| h.is_loading()));

    view! {
        <div class="card-grid two-col">
            <div class="panel">
                <h3>"Your Habits"</h3>
                <Notice message=notice />
                <LoadingHint loading=loading />
                <Show when=move || store.habits().with(|h| h.data.is_empty() && !h.is_loading())>
                    <p class="muted">"No habits yet. Add one to get started."</p>
                </Show>
                <ul class="habit-list">
                    <For
                        each=move || store.habits().with(|h| h.data.clone())
                        key=|habit| habit.id.clone()
                        children=move |habit| {
                            let id = habit.id.clone();
                            let open_id = habit.id.clone();
                            let row_class = move || {
                                let active = store.active_habit().with(|a| a.as_ref() == Some(&id));
                                if active { "habit-row active" } else { "habit-row" }
                            };
                            view! {
                                <li class=row_class>
                                    <div>
                                        <div class="habit-name">{habit.name}</div>
                                        <div class="habit-desc">{habit.description}</div>
                                    </div>
                                    <button
                                        class="link-btn"
                                        on:click=move |_| {
                                            store.active_habit().set(Some(open_id.clone()))
                                        }
                                    >
                                        "Open"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
            <div class="panel">
                <h3>"Quick Tips"</h3>
                <p>"Stay consistent. Keep tasks tiny. Track progress visually for motivation."</p>
            </div>
        </div>
    }
}
