//! Cancellable one-shot timer for the contact form reset.
//!
//! Arming a timer yields two halves:
//!
//! - a [`ResetTimer`] guard kept by the owner of the form state
//! - a [`PendingReset`] future handed to the runtime via `Task::perform`
//!
//! The deadline is fixed when the timer is armed. Dropping the guard aborts
//! the future, which then resolves to `Err(Aborted)` and produces no message.

use std::time::Duration;

use futures_util::future::{AbortHandle, Abortable, BoxFuture, abortable};
use tokio::time::Instant;

/// Delay between a submission and the automatic form reset.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

/// Identifies one armed timer. Later submissions always get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResetTicket(u64);

impl ResetTicket {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// The ticket issued after this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Future that resolves to the ticket once the deadline passes.
pub type PendingReset = Abortable<BoxFuture<'static, ResetTicket>>;

/// Guard for an armed reset. Aborts the pending future on drop.
#[derive(Debug)]
pub struct ResetTimer {
    ticket: ResetTicket,
    deadline: Instant,
    handle: AbortHandle,
}

impl ResetTimer {
    /// Arm a timer that fires `delay` after now.
    pub fn arm(ticket: ResetTicket, delay: Duration) -> (Self, PendingReset) {
        let deadline = Instant::now() + delay;
        let sleep: BoxFuture<'static, ResetTicket> = Box::pin(async move {
            tokio::time::sleep_until(deadline).await;
            ticket
        });
        let (pending, handle) = abortable(sleep);

        tracing::debug!(ticket = ticket.value(), ?delay, "Armed reset timer");

        (
            Self {
                ticket,
                deadline,
                handle,
            },
            pending,
        )
    }

    pub fn ticket(&self) -> ResetTicket {
        self.ticket
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Whether the pending future has been aborted.
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

/// Wait for a pending reset. An aborted timer yields `None`.
pub async fn await_reset(reset: PendingReset) -> Option<ResetTicket> {
    reset.await.ok()
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        if !self.is_cancelled() {
            tracing::trace!(ticket = self.ticket.value(), "Releasing reset timer");
            self.handle.abort();
        }
    }
}
