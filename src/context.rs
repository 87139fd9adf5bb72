//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use habit_client::{ApiConfig, HabitApi};
use leptos::prelude::*;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend origin
    config: StoredValue<ApiConfig>,
    /// Trigger to reload the habit list
    set_habits_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(config: ApiConfig, set_habits_trigger: WriteSignal<u32>) -> Self {
        Self {
            config: StoredValue::new(config),
            set_habits_trigger,
        }
    }

    /// Client bound to the configured backend
    pub fn api(&self) -> HabitApi {
        HabitApi::new(self.config.get_value())
    }

    /// Refetch the habit collection
    pub fn reload_habits(&self) {
        self.set_habits_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
