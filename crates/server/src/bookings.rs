// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory registry of live booking sessions.
//!
//! Sessions are never persisted. Each one owns at most one pending
//! feedback timer, which clears its message after the configured delay.
//! Sessions left idle longer than the idle TTL are dropped the next time
//! a session is opened.

use red_curtain::BookingSession;
use red_curtain_api::{ApiError, BookingCommandOutcome, reset_feedback};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Default delay before a feedback message is cleared.
pub const DEFAULT_FEEDBACK_TTL: Duration = Duration::from_secs(3);

/// Default time an untouched session stays live.
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

struct BookingSlot {
    session: BookingSession,
    feedback_timer: Option<JoinHandle<()>>,
    last_touched: Instant,
}

impl BookingSlot {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.feedback_timer.take() {
            timer.abort();
        }
    }
}

/// Live booking sessions keyed by an opaque identifier.
pub struct BookingRegistry {
    slots: Mutex<HashMap<u64, BookingSlot>>,
    next_id: AtomicU64,
    feedback_ttl: Duration,
    idle_ttl: Duration,
}

impl BookingRegistry {
    /// Creates an empty registry.
    ///
    /// # Arguments
    ///
    /// * `feedback_ttl` - How long a message stays on a session
    /// * `idle_ttl` - How long a session may go untouched before it is dropped
    #[must_use]
    pub fn new(feedback_ttl: Duration, idle_ttl: Duration) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            feedback_ttl,
            idle_ttl,
        }
    }

    /// Registers a freshly opened session and returns its identifier.
    ///
    /// Sessions idle for longer than the idle TTL are dropped first.
    pub async fn open(&self, session: BookingSession) -> u64 {
        let booking_id: u64 = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now: Instant = Instant::now();

        let mut slots = self.slots.lock().await;
        let before: usize = slots.len();
        slots.retain(|_, slot| {
            let live: bool = now.duration_since(slot.last_touched) <= self.idle_ttl;
            if !live {
                slot.cancel_timer();
            }
            live
        });
        let dropped: usize = before - slots.len();
        if dropped > 0 {
            debug!(dropped, "Dropped idle booking sessions");
        }

        slots.insert(
            booking_id,
            BookingSlot {
                session,
                feedback_timer: None,
                last_touched: now,
            },
        );
        booking_id
    }

    /// Returns a snapshot of a session, marking it as used.
    pub async fn get(&self, booking_id: u64) -> Option<BookingSession> {
        self.slots.lock().await.get_mut(&booking_id).map(|slot| {
            slot.last_touched = Instant::now();
            slot.session.clone()
        })
    }

    /// Runs a booking command against a session and stores the result.
    ///
    /// The registry lock is held for the whole command, so commands on
    /// one session are serialized. A command that emits a message
    /// replaces any pending feedback timer with a fresh one; a command
    /// that leaves the session without a message cancels it.
    ///
    /// # Returns
    ///
    /// `None` if no session carries the identifier.
    ///
    /// # Errors
    ///
    /// Returns the command's error. The stored session is left unchanged.
    pub async fn update<F>(
        self: &Arc<Self>,
        booking_id: u64,
        command: F,
    ) -> Result<Option<BookingCommandOutcome>, ApiError>
    where
        F: FnOnce(&BookingSession) -> Result<BookingCommandOutcome, ApiError>,
    {
        let mut slots = self.slots.lock().await;
        let Some(slot) = slots.get_mut(&booking_id) else {
            return Ok(None);
        };

        slot.last_touched = Instant::now();
        let outcome: BookingCommandOutcome = command(&slot.session)?;
        slot.session = outcome.session.clone();

        if outcome.emitted_message() || outcome.session.message().is_none() {
            slot.cancel_timer();
        }
        if outcome.emitted_message() {
            slot.feedback_timer = Some(self.schedule_clear(booking_id));
        }

        Ok(Some(outcome))
    }

    /// Removes a session, cancelling its pending timer.
    ///
    /// # Returns
    ///
    /// Whether a session was removed.
    pub async fn discard(&self, booking_id: u64) -> bool {
        let removed: Option<BookingSlot> = self.slots.lock().await.remove(&booking_id);
        match removed {
            Some(mut slot) => {
                slot.cancel_timer();
                true
            }
            None => false,
        }
    }

    /// Returns the number of live sessions.
    pub async fn live_count(&self) -> usize {
        self.slots.lock().await.len()
    }

    fn schedule_clear(self: &Arc<Self>, booking_id: u64) -> JoinHandle<()> {
        let registry: Arc<Self> = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(registry.feedback_ttl).await;

            let mut slots = registry.slots.lock().await;
            let Some(slot) = slots.get_mut(&booking_id) else {
                return;
            };
            slot.feedback_timer = None;
            match reset_feedback(&slot.session) {
                Ok(outcome) => {
                    slot.session = outcome.session;
                    debug!(booking_id, "Feedback message expired");
                }
                Err(e) => warn!(booking_id, error = %e, "Failed to clear feedback message"),
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use red_curtain::generate_inventory_with;
    use red_curtain_domain::{Movie, MovieId, Rating, SeatLayout};

    fn create_test_session() -> BookingSession {
        let movie: Movie = Movie::new(
            MovieId::new("5"),
            "Hangover",
            "https://example.com/hangover.jpg",
            "A bachelor party goes wrong.",
            Rating::new(4).unwrap(),
        );
        let layout: SeatLayout = SeatLayout::new(&['A'], 4).unwrap();
        BookingSession::new(movie, generate_inventory_with(&layout, |_| false))
    }

    #[tokio::test]
    async fn test_idle_sessions_dropped_on_open() {
        let registry: BookingRegistry =
            BookingRegistry::new(DEFAULT_FEEDBACK_TTL, Duration::from_millis(50));

        let stale: u64 = registry.open(create_test_session()).await;
        tokio::time::sleep(Duration::from_millis(150)).await;
        let fresh: u64 = registry.open(create_test_session()).await;

        assert!(registry.get(stale).await.is_none());
        assert!(registry.get(fresh).await.is_some());
        assert_eq!(registry.live_count().await, 1);
    }

    #[tokio::test]
    async fn test_touched_sessions_survive_sweep() {
        let registry: BookingRegistry =
            BookingRegistry::new(DEFAULT_FEEDBACK_TTL, Duration::from_millis(400));

        let kept: u64 = registry.open(create_test_session()).await;
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(registry.get(kept).await.is_some());
        tokio::time::sleep(Duration::from_millis(250)).await;
        registry.open(create_test_session()).await;

        assert!(registry.get(kept).await.is_some());
        assert_eq!(registry.live_count().await, 2);
    }
}
