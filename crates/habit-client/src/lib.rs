//! Habit Genius Client
//!
//! Platform-neutral half of the Habit Genius UI:
//! - models: wire records mirrored from the backend
//! - api: typed HTTP client for every endpoint
//! - image / display: data-URL encoding and the display heuristics
//! - sequence / state: latest-request-wins guard and per-view state holders

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod image;
pub mod models;
pub mod sequence;
pub mod state;

pub use api::HabitApi;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use image::{read_attachment, ImageUpload, DEFAULT_IMAGE_MIME};
pub use models::{
    AskAnswer, AskRequest, ChatMessage, ChatRole, Habit, NewHabit, NewProgress, ProgressEntry,
    ProgressSummary, RecordId, Resource, RoadmapItem,
};
pub use sequence::{PendingFetch, RequestSequencer, RequestTicket};
pub use state::{initial_selection, LoadStatus, Transcript, ViewState};
