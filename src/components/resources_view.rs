//! Resources View Component
//!
//! External links for the active habit.

use habit_client::{RequestSequencer, Resource, ViewState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{LoadingHint, Notice};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ResourcesView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let state = RwSignal::new(ViewState::<Vec<Resource>>::default());

    let sequencer = RequestSequencer::new();
    Effect::new(move |_| {
        let Some(pending) = sequencer.begin(store.active_habit().get()) else {
            return;
        };
        state.update(ViewState::begin);
        let api = ctx.api();
        spawn_local(async move {
            if let Some(result) = pending.run(|id| async move { api.resources(&id).await }).await {
                state.update(|s| s.settle(result));
            }
        });
    });

    let notice = Signal::derive(move || state.with(|s| s.notice.clone()));
    let loading = Signal::derive(move || state.with(ViewState::is_loading));

    view! {
        <div class="resources">
            <Notice message=notice />
            <LoadingHint loading=loading />
            <div class="card-grid two-col">
                {move || {
                    state.with(|s| s.data.clone()).into_iter().map(|resource| {
                        view! {
                            <a
                                class="card resource-card"
                                href=resource.url
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                <div class="resource-kind">{resource.kind}</div>
                                <div class="resource-title">{resource.title}</div>
                                <div class="resource-provider">{resource.provider}</div>
                            </a>
                        }
                    }).collect_view()
                }}
            </div>
        </div>
    }
}
