//! Request Sequencing
//!
//! Latest-request-wins guard. Each view owns a sequencer; every fetch takes a
//! ticket and its response is applied only while that ticket is still the
//! newest one issued.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::Result;
use crate::models::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Cheap to clone; clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Make every outstanding ticket stale without starting a new request.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    /// Start a habit-scoped fetch. With no habit selected nothing is fetched
    /// and any in-flight response is discarded.
    pub fn begin(&self, habit: Option<RecordId>) -> Option<PendingFetch> {
        match habit {
            Some(habit_id) => Some(PendingFetch {
                habit_id,
                ticket: self.issue(),
                sequencer: self.clone(),
            }),
            None => {
                self.invalidate();
                None
            }
        }
    }
}

/// A fetch that has been issued but not yet applied.
#[derive(Debug)]
pub struct PendingFetch {
    habit_id: RecordId,
    ticket: RequestTicket,
    sequencer: RequestSequencer,
}

impl PendingFetch {
    /// Run the request. Returns `None` when a newer request was issued while
    /// this one was in flight, so the caller must not apply it.
    pub async fn run<T, F, Fut>(self, fetch: F) -> Option<Result<T>>
    where
        F: FnOnce(RecordId) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let habit_id = self.habit_id.clone();
        let result = fetch(self.habit_id).await;
        if self.sequencer.is_latest(self.ticket) {
            Some(result)
        } else {
            tracing::debug!(habit = %habit_id, ticket = self.ticket.0, "dropping stale response");
            None
        }
    }
}
