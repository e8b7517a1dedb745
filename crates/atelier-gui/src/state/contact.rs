//! Contact form state machine.
//!
//! Two phases:
//!
//! | Phase | Fields | Timer |
//! |-------|--------|-------|
//! | Idle | editable | none |
//! | Submitted | frozen, still displayed | armed, fires after [`RESET_DELAY`] |
//!
//! A submission is only logged. When the timer's ticket comes back the
//! fields are cleared and the form returns to Idle.

use std::time::Duration;

use crate::service::reset_timer::{PendingReset, RESET_DELAY, ResetTicket, ResetTimer};

/// Contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Message => "Your Message",
        }
    }
}

/// Contact form values, stored exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitted {
        ticket: ResetTicket,
    },
}

/// Result of a successful submit.
pub struct Submission {
    /// Field values at the moment of submission.
    pub payload: ContactForm,
    pub ticket: ResetTicket,
    /// Resolves to `ticket` after the reset delay, or to `Aborted` if the
    /// controller is dropped first.
    pub reset: PendingReset,
}

impl std::fmt::Debug for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Submission")
            .field("payload", &self.payload)
            .field("ticket", &self.ticket)
            .finish_non_exhaustive()
    }
}

/// Owns the form, its phase and the armed reset timer.
#[derive(Debug)]
pub struct ContactController {
    form: ContactForm,
    phase: SubmissionPhase,
    next_ticket: ResetTicket,
    timer: Option<ResetTimer>,
    reset_delay: Duration,
}

impl Default for ContactController {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactController {
    pub fn new() -> Self {
        Self::with_reset_delay(RESET_DELAY)
    }

    pub fn with_reset_delay(reset_delay: Duration) -> Self {
        Self {
            form: ContactForm::default(),
            phase: SubmissionPhase::Idle,
            next_ticket: ResetTicket::new(1),
            timer: None,
            reset_delay,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitted { .. })
    }

    /// The armed timer, while Submitted.
    pub fn pending_timer(&self) -> Option<&ResetTimer> {
        self.timer.as_ref()
    }

    /// Set one field verbatim. Ignored while Submitted.
    ///
    /// Returns `true` when the value was applied.
    pub fn update_field(&mut self, field: ContactField, value: String) -> bool {
        if self.is_submitted() {
            tracing::debug!(?field, "Ignoring edit while submission is pending");
            return false;
        }
        if self.form.get(field) == value {
            return false;
        }
        self.form.set(field, value);
        true
    }

    /// Submit from Idle: log the payload and arm the reset timer.
    ///
    /// Returns `None` while a submission is already pending. The pending
    /// timer is left untouched in that case.
    pub fn submit(&mut self) -> Option<Submission> {
        if let SubmissionPhase::Submitted { ticket } = self.phase {
            tracing::debug!(ticket = ticket.value(), "Submit ignored, reset pending");
            return None;
        }

        let ticket = self.next_ticket;
        self.next_ticket = ticket.next();

        let payload = self.form.clone();
        tracing::info!(
            target: "atelier::contact",
            name = %payload.name,
            email = %payload.email,
            message = %payload.message,
            "Contact form submitted"
        );

        let (timer, reset) = ResetTimer::arm(ticket, self.reset_delay);
        self.timer = Some(timer);
        self.phase = SubmissionPhase::Submitted { ticket };

        Some(Submission {
            payload,
            ticket,
            reset,
        })
    }

    /// Apply a fired timer. Only the ticket of the pending submission counts.
    ///
    /// Returns `true` when the form was reset to Idle.
    pub fn complete_reset(&mut self, ticket: ResetTicket) -> bool {
        match self.phase {
            SubmissionPhase::Submitted { ticket: pending } if pending == ticket => {
                self.form = ContactForm::default();
                self.phase = SubmissionPhase::Idle;
                self.timer = None;
                tracing::debug!(ticket = ticket.value(), "Contact form reset");
                true
            }
            _ => {
                tracing::warn!(
                    ticket = ticket.value(),
                    phase = ?self.phase,
                    "Ignoring stale reset"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::Aborted;

    fn filled() -> ContactController {
        let mut controller = ContactController::new();
        controller.update_field(ContactField::Name, "Jane".to_string());
        controller.update_field(ContactField::Email, "j@x.com".to_string());
        controller.update_field(ContactField::Message, "Hi".to_string());
        controller
    }

    fn jane() -> ContactForm {
        ContactForm {
            name: "Jane".to_string(),
            email: "j@x.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[test]
    fn test_fields_accept_any_text() {
        let mut controller = ContactController::new();
        assert!(controller.update_field(ContactField::Email, "not an email".to_string()));
        assert_eq!(controller.form().email, "not an email");
        assert!(!controller.update_field(ContactField::Email, "not an email".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_submission_is_accepted() {
        let mut controller = ContactController::new();
        let submission = controller.submit().unwrap();
        assert!(submission.payload.is_empty());
        assert!(controller.is_submitted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_then_reset_after_delay() {
        let mut controller = filled();
        let submission = controller.submit().unwrap();
        assert_eq!(submission.payload, jane());
        assert!(controller.is_submitted());

        let handle = tokio::spawn(submission.reset);

        tokio::time::advance(Duration::from_millis(2999)).await;
        tokio::task::yield_now().await;
        assert!(!handle.is_finished());
        assert!(controller.is_submitted());
        assert_eq!(controller.form(), &jane());

        tokio::time::advance(Duration::from_millis(1)).await;
        let ticket = handle.await.unwrap().unwrap();
        assert!(controller.complete_reset(ticket));
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
        assert!(controller.form().is_empty());
        assert!(controller.pending_timer().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_submit_keeps_first_timer() {
        let mut controller = filled();
        let first = controller.submit().unwrap();
        let deadline = controller.pending_timer().unwrap().deadline();

        tokio::time::advance(Duration::from_millis(500)).await;
        assert!(controller.submit().is_none());
        assert_eq!(controller.pending_timer().unwrap().deadline(), deadline);
        assert_eq!(
            controller.phase(),
            SubmissionPhase::Submitted {
                ticket: first.ticket
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_edits_ignored_while_submitted() {
        let mut controller = filled();
        let _submission = controller.submit().unwrap();
        assert!(!controller.update_field(ContactField::Name, "Mallory".to_string()));
        assert_eq!(controller.form().name, "Jane");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_ticket_is_ignored() {
        let mut controller = filled();
        let first = controller.submit().unwrap();
        assert!(controller.complete_reset(first.ticket));

        let second = controller.submit().unwrap();
        assert_ne!(first.ticket, second.ticket);
        assert!(!controller.complete_reset(first.ticket));
        assert!(controller.is_submitted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_reset() {
        let mut controller = filled();
        let submission = controller.submit().unwrap();
        let handle = tokio::spawn(submission.reset);

        tokio::time::advance(Duration::from_millis(1000)).await;
        drop(controller);

        tokio::time::advance(Duration::from_millis(2000)).await;
        assert_eq!(handle.await.unwrap(), Err(Aborted));
    }
}
