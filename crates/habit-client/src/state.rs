//! View State
//!
//! Plain state holders behind each view. The UI keeps them in signals; the
//! rules for applying responses live here.

use crate::error::{ApiError, Result};
use crate::models::{ChatMessage, ChatRole, Habit, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Data shown by one view plus its load status and inline notice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState<T> {
    pub data: T,
    pub status: LoadStatus,
    pub notice: Option<String>,
}

impl<T> ViewState<T> {
    pub fn begin(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Success replaces the data wholesale. Failure keeps the previous data
    /// and records a notice.
    pub fn settle(&mut self, result: Result<T>) {
        match result {
            Ok(data) => {
                self.data = data;
                self.status = LoadStatus::Loaded;
                self.notice = None;
            }
            Err(err) => self.fail(&err),
        }
    }

    fn fail(&mut self, err: &ApiError) {
        tracing::warn!(error = %err, "view request failed");
        self.status = LoadStatus::Failed;
        self.notice = Some(err.notice());
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }
}

/// Habit to activate after the habit list loads: the first one, and only when
/// nothing is selected yet.
pub fn initial_selection(current: Option<&RecordId>, habits: &[Habit]) -> Option<RecordId> {
    match current {
        Some(_) => None,
        None => habits.first().map(|h| h.id.clone()),
    }
}

/// Append-only Ask-AI conversation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Record one completed round trip: the user turn, then the answer.
    pub fn record_exchange(
        &mut self,
        question: impl Into<String>,
        image_base64: Option<String>,
        answer: impl Into<String>,
    ) {
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: question.into(),
            image_base64,
        });
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content: answer.into(),
            image_base64: None,
        });
    }
}
