//! Progress Tracker Component
//!
//! Streak ring, a note/photo submission form and the entry gallery. The list
//! and streak are refetched after every successful submission.

use habit_client::display::format_timestamp;
use habit_client::{
    read_attachment, NewProgress, ProgressEntry, ProgressSummary, RequestSequencer, ViewState,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{read_file, ImagePicker, LoadingHint, Notice, StreakRing};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProgressTracker() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let state = RwSignal::new(ViewState::<ProgressSummary>::default());
    let (refresh, set_refresh) = signal(0u32);
    let (note, set_note) = signal(String::new());
    let image = RwSignal::new_local(None::<web_sys::File>);
    let (submit_notice, set_submit_notice) = signal::<Option<String>>(None);

    // Load on mount, on habit change and after each submission
    let sequencer = RequestSequencer::new();
    Effect::new(move |_| {
        let _ = refresh.get();
        let Some(pending) = sequencer.begin(store.active_habit().get()) else {
            return;
        };
        state.update(ViewState::begin);
        let api = ctx.api();
        spawn_local(async move {
            if let Some(result) = pending.run(|id| async move { api.progress(&id).await }).await {
                state.update(|s| s.settle(result));
            }
        });
    });

    let add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(habit_id) = store.active_habit().get_untracked() else {
            set_submit_notice.set(Some("Select a habit first.".to_string()));
            return;
        };
        let text = note.get_untracked();
        let file = image.get_untracked();
        let api = ctx.api();
        spawn_local(async move {
            let data_url = match read_attachment(file.map(read_file)).await {
                Ok(data_url) => data_url,
                Err(err) => {
                    tracing::warn!(error = %err, "failed to read image");
                    set_submit_notice.set(Some("Couldn't read the selected image.".to_string()));
                    return;
                }
            };
            let entry = NewProgress {
                habit_id: &habit_id,
                note: &text,
                image_base64: data_url.as_deref(),
            };
            match api.add_progress(&entry).await {
                Ok(()) => {
                    tracing::info!(habit = %habit_id, "progress recorded");
                    set_note.set(String::new());
                    image.set(None);
                    set_submit_notice.set(None);
                    set_refresh.update(|n| *n += 1);
                }
                Err(err) => set_submit_notice.set(Some(err.notice())),
            }
        });
    };

    let streak = Signal::derive(move || state.with(|s| s.data.streak));
    let load_notice = Signal::derive(move || state.with(|s| s.notice.clone()));
    let loading = Signal::derive(move || state.with(ViewState::is_loading));

    view! {
        <div class="progress">
            <div class="streak-row">
                <StreakRing streak=streak />
                <div class="muted">"Streak counts consecutive days with any progress."</div>
            </div>
            <Notice message=load_notice />
            <LoadingHint loading=loading />

            <form class="panel progress-form" on:submit=add>
                <textarea
                    placeholder="Add a note..."
                    prop:value=move || note.get()
                    on:input=move |ev| set_note.set(event_target_value(&ev))
                ></textarea>
                <Notice message=submit_notice />
                <div class="progress-actions">
                    <ImagePicker selected=image />
                    <button type="submit" class="primary-btn">"Add Progress"</button>
                </div>
            </form>

            <div class="card-grid four-col">
                {move || {
                    state.with(|s| {
                        s.data
                            .items
                            .iter()
                            .cloned()
                            .map(|entry| view! { <ProgressCard entry=entry /> })
                            .collect_view()
                    })
                }}
            </div>
        </div>
    }
}

#[component]
fn ProgressCard(entry: ProgressEntry) -> impl IntoView {
    let note = entry.visible_note().map(str::to_string);
    let when = entry.created_at.as_deref().map(format_timestamp);

    view! {
        <div class="card progress-card">
            {entry.image_base64.map(|src| view! { <img class="progress-photo" src=src /> })}
            {note.map(|text| view! { <div class="progress-note">{text}</div> })}
            {when.map(|text| view! { <div class="progress-time">{text}</div> })}
        </div>
    }
}
