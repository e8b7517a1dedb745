//! Gallery filter and card actions.

use iced::Task;

use super::MessageHandler;
use crate::message::{GalleryMessage, Message};
use crate::state::AppState;

/// Handler for gallery messages.
pub struct GalleryHandler;

impl MessageHandler<GalleryMessage> for GalleryHandler {
    fn handle(&self, state: &mut AppState, msg: GalleryMessage) -> Task<Message> {
        match msg {
            GalleryMessage::SelectCategory(category) => {
                state.portfolio.select_category(&category);
                Task::none()
            }

            GalleryMessage::OpenItem(id) => match state.portfolio.content().item(id) {
                Some(item) => Task::done(Message::OpenUrl(item.image.clone())),
                None => {
                    tracing::warn!(id, "Gallery item not found");
                    Task::none()
                }
            },
        }
    }
}
