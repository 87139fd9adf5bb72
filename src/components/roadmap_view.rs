//! Roadmap View Component
//!
//! Milestones for the active habit with a rough completion bar.

use habit_client::display::{roadmap_fill_percent, roadmap_status_label};
use habit_client::{RequestSequencer, RoadmapItem, ViewState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{LoadingHint, Notice};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RoadmapView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let state = RwSignal::new(ViewState::<Vec<RoadmapItem>>::default());

    // Refetch whenever the active habit changes
    let sequencer = RequestSequencer::new();
    Effect::new(move |_| {
        let Some(pending) = sequencer.begin(store.active_habit().get()) else {
            return;
        };
        state.update(ViewState::begin);
        let api = ctx.api();
        spawn_local(async move {
            if let Some(result) = pending.run(|id| async move { api.roadmap(&id).await }).await {
                state.update(|s| s.settle(result));
            }
        });
    });

    let notice = Signal::derive(move || state.with(|s| s.notice.clone()));
    let loading = Signal::derive(move || state.with(ViewState::is_loading));

    view! {
        <div class="roadmap">
            <Notice message=notice />
            <LoadingHint loading=loading />
            <Show when=move || store.active_habit().with(Option::is_none)>
                <p class="muted">"Select a habit to see its roadmap."</p>
            </Show>
            <div class="card-grid two-col">
                // Rendered wholesale: ids may repeat across habits
                {move || {
                    state.with(|s| {
                        s.data
                            .iter()
                            .cloned()
                            .map(|item| view! { <RoadmapCard item=item /> })
                            .collect_view()
                    })
                }}
            </div>
        </div>
    }
}

#[component]
fn RoadmapCard(item: RoadmapItem) -> impl IntoView {
    let percent = roadmap_fill_percent(&item);
    let label = roadmap_status_label(&item);
    let badge_class = if item.completed { "badge done" } else { "badge pending" };

    view! {
        <div class="card">
            <div class="card-header">
                <h4>{item.title}</h4>
                <span class=badge_class>{label}</span>
            </div>
            <p class="card-desc">{item.description}</p>
            <div class="bar">
                <div class="bar-fill" style=format!("width: {percent}%")></div>
            </div>
        </div>
    }
}
