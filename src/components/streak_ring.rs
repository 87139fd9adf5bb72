//! Streak Ring Component
//!
//! Circular indicator that fills over 30 days.

use habit_client::display::{streak_dash_array, streak_label};
use leptos::prelude::*;

#[component]
pub fn StreakRing(#[prop(into)] streak: Signal<i64>) -> impl IntoView {
    let dash = move || format!("stroke-dasharray: {}", streak_dash_array(streak.get()));

    view! {
        <div class="streak-ring">
            <svg viewBox="0 0 36 36">
                <path
                    class="ring-track"
                    stroke-width="4"
                    stroke="currentColor"
                    fill="none"
                    d="M18 2a16 16 0 110 32 16 16 0 010-32z"
                />
                <path
                    class="ring-fill"
                    stroke-width="4"
                    stroke-linecap="round"
                    stroke="currentColor"
                    fill="none"
                    pathLength="100"
                    d="M18 2a16 16 0 110 32 16 16 0 010-32z"
                    style=dash
                />
            </svg>
            <div class="streak-label">{move || streak_label(streak.get())}</div>
        </div>
    }
}
