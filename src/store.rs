//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use habit_client::{Habit, RecordId, ViewState};
use leptos::prelude::*;
use reactive_stores::Store;

/// State shared by the shell and every tab
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Habit collection as last returned by the backend
    pub habits: ViewState<Vec<Habit>>,
    /// Habit every view is scoped to
    pub active_habit: Option<RecordId>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
