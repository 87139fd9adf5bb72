//! Habit Genius App
//!
//! Shell: hero banner, tab bar, habit selector and the selected tab's view.

use habit_client::{initial_selection, ApiConfig, RequestSequencer};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{
    AddHabitModal, AskAiView, Dashboard, HabitSelector, Hero, ProgressTracker, ResourcesView,
    RoadmapView, Tab, TabBar,
};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (habits_trigger, set_habits_trigger) = signal(0u32);
    let (tab, set_tab) = signal(Tab::Dashboard);
    let (adding, set_adding) = signal(false);

    let config = ApiConfig::from_build_env();
    tracing::info!(backend = config.base_url(), "using backend");
    let ctx = AppContext::new(config, set_habits_trigger);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load habits on mount and after each creation
    let sequencer = RequestSequencer::new();
    Effect::new(move |_| {
        let trigger = habits_trigger.get();
        let ticket = sequencer.issue();
        let sequencer = sequencer.clone();
        let api = ctx.api();
        tracing::debug!(trigger, "loading habits");
        store.habits().update(|h| h.begin());
        spawn_local(async move {
            let result = api.list_habits().await;
            if !sequencer.is_latest(ticket) {
                return;
            }
            if let Ok(habits) = &result {
                tracing::debug!(count = habits.len(), "habits loaded");
                let current = store.active_habit().get_untracked();
                if let Some(first) = initial_selection(current.as_ref(), habits) {
                    store.active_habit().set(Some(first));
                }
            }
            store.habits().update(|h| h.settle(result));
        });
    });

    view! {
        <div class="app-layout">
            <Hero />

            <main class="main-panel">
                <div class="toolbar">
                    <TabBar tab=tab set_tab=set_tab />
                    <div class="toolbar-actions">
                        <HabitSelector />
                        <button class="primary-btn pill" on:click=move |_| set_adding.set(true)>
                            "Add Habit"
                        </button>
                    </div>
                </div>

                <section class="tab-content">
                    {move || match tab.get() {
                        Tab::Dashboard => view! { <Dashboard /> }.into_any(),
                        Tab::Roadmap => view! { <RoadmapView /> }.into_any(),
                        Tab::Resources => view! { <ResourcesView /> }.into_any(),
                        Tab::AskAi => view! { <AskAiView /> }.into_any(),
                        Tab::Progress => view! { <ProgressTracker /> }.into_any(),
                    }}
                </section>
            </main>

            <AddHabitModal open=adding set_open=set_adding />
        </div>
    }
}
