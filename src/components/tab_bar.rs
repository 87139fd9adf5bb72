//! Tab Bar Component
//!
//! Switching tabs is purely local state.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Roadmap,
    Resources,
    AskAi,
    Progress,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Roadmap,
        Tab::Resources,
        Tab::AskAi,
        Tab::Progress,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Roadmap => "Roadmap",
            Tab::Resources => "Resources",
            Tab::AskAi => "Ask AI",
            Tab::Progress => "Progress Tracker",
        }
    }
}

#[component]
pub fn TabBar(tab: ReadSignal<Tab>, set_tab: WriteSignal<Tab>) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {Tab::ALL.into_iter().map(|t| {
                let tab_class = move || if tab.get() == t { "tab-btn active" } else { "tab-btn" };
                view! {
                    <button class=tab_class on:click=move |_| set_tab.set(t)>
                        {t.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_are_in_display_order() {
        let labels: Vec<_> = Tab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            ["Dashboard", "Roadmap", "Resources", "Ask AI", "Progress Tracker"]
        );
    }
}
