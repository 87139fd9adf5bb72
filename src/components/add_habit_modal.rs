//! Add Habit Modal Component
//!
//! Creates a habit, then reloads the habit list. The modal closes only when
//! the backend accepted the habit.

use habit_client::models::DEFAULT_TARGET_DAYS;
use habit_client::NewHabit;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Notice;
use crate::context::use_app_context;

#[component]
pub fn AddHabitModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (days, set_days) = signal(DEFAULT_TARGET_DAYS);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let close = move || {
        set_notice.set(None);
        set_open.set(false);
    };

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let habit = NewHabit {
            name: name.get_untracked(),
            description: description.get_untracked(),
            target_days_per_week: days.get_untracked(),
        };
        let api = ctx.api();
        spawn_local(async move {
            match api.create_habit(&habit).await {
                Ok(()) => {
                    tracing::info!(name = %habit.name, "habit created");
                    set_name.set(String::new());
                    set_description.set(String::new());
                    set_days.set(DEFAULT_TARGET_DAYS);
                    close();
                    ctx.reload_habits();
                }
                Err(err) => set_notice.set(Some(err.notice())),
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <form class="modal" on:submit=create>
                    <h3>"Add Habit"</h3>
                    <Notice message=notice />
                    <input
                        type="text"
                        placeholder="Habit name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                    <div class="days-row">
                        <label>"Days/week"</label>
                        // 1-7 is a hint only
                        <input
                            type="number"
                            min="1"
                            max="7"
                            prop:value=move || days.get().to_string()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                    set_days.set(value);
                                }
                            }
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary-btn">"Create"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
