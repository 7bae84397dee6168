//! Soft-movement timer — approximates when a cover stops travelling.
//!
//! Covers rarely report "motion finished", so after a directional command the
//! controller assumes the cover is moving for a fixed duration. The timer is a
//! two-state machine:
//!
//! ```text
//!          start()                 expiry / stop()
//!   Idle ──────────▶ Moving(task) ─────────────────▶ Idle
//!                     │    ▲
//!                     └────┘ start() supersedes the running task
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::AbortHandle;

enum Movement {
    Idle,
    Moving(AbortHandle),
}

struct Inner {
    state: Movement,
    /// Bumped on every start so a superseded task cannot clear a newer one.
    generation: u64,
}

/// Owns at most one scheduled "movement finished" task.
pub struct MovementTimer {
    duration: Option<Duration>,
    inner: Arc<Mutex<Inner>>,
}

impl MovementTimer {
    /// A timer that runs for `duration`; `None` disables it entirely.
    #[must_use]
    pub fn new(duration: Option<Duration>) -> Self {
        Self {
            duration,
            inner: Arc::new(Mutex::new(Inner {
                state: Movement::Idle,
                generation: 0,
            })),
        }
    }

    /// Whether the cover is assumed to be moving.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        matches!(lock(&self.inner).state, Movement::Moving(_))
    }

    /// Enter `Moving`, replacing any running timer. No-op when disabled.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) {
        let Some(duration) = self.duration else {
            return;
        };

        let mut inner = lock(&self.inner);
        if let Movement::Moving(previous) = std::mem::replace(&mut inner.state, Movement::Idle) {
            previous.abort();
        }
        inner.generation = inner.generation.wrapping_add(1);
        let generation = inner.generation;

        let shared = Arc::clone(&self.inner);
        let task = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut inner = lock(&shared);
            if inner.generation == generation {
                inner.state = Movement::Idle;
                tracing::debug!("cover supposedly stopped moving");
            }
        });
        inner.state = Movement::Moving(task.abort_handle());
    }

    /// Return to `Idle`, cancelling the running timer. Idempotent.
    ///
    /// Returns whether a timer was running.
    pub fn stop(&self) -> bool {
        let mut inner = lock(&self.inner);
        match std::mem::replace(&mut inner.state, Movement::Idle) {
            Movement::Moving(task) => {
                task.abort();
                true
            }
            Movement::Idle => false,
        }
    }
}

impl Drop for MovementTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
