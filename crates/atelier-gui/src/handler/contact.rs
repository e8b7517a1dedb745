//! Contact form submission and reset.

use iced::Task;

use super::MessageHandler;
use crate::message::{ContactMessage, Message};
use crate::service::await_reset;
use crate::state::AppState;

/// Handler for contact form messages.
pub struct ContactHandler;

impl MessageHandler<ContactMessage> for ContactHandler {
    fn handle(&self, state: &mut AppState, msg: ContactMessage) -> Task<Message> {
        match msg {
            ContactMessage::FieldChanged(field, value) => {
                state.portfolio.update_field(field, value);
                Task::none()
            }

            ContactMessage::Submit => {
                let Some(submission) = state.portfolio.submit() else {
                    return Task::none();
                };
                // An aborted timer yields no message.
                Task::perform(await_reset(submission.reset), std::convert::identity).and_then(
                    |ticket| Task::done(Message::Contact(ContactMessage::ResetElapsed(ticket))),
                )
            }

            ContactMessage::ResetElapsed(ticket) => {
                state.portfolio.complete_reset(ticket);
                Task::none()
            }
        }
    }
}
