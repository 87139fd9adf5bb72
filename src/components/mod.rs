//! UI Components
//!
//! Shell pieces and one view per tab.

mod add_habit_modal;
mod ask_ai_view;
mod dashboard;
mod habit_selector;
mod hero;
mod image_picker;
mod notice;
mod progress_tracker;
mod resources_view;
mod roadmap_view;
mod streak_ring;
mod tab_bar;

pub use add_habit_modal::AddHabitModal;
pub use ask_ai_view::AskAiView;
pub use dashboard::Dashboard;
pub use habit_selector::HabitSelector;
pub use hero::Hero;
pub use image_picker::{read_file, ImagePicker};
pub use notice::{LoadingHint, Notice};
pub use progress_tracker::ProgressTracker;
pub use resources_view::ResourcesView;
pub use roadmap_view::RoadmapView;
pub use streak_ring::StreakRing;
pub use tab_bar::{Tab, TabBar};
