//! Navigation bar, compact menu and smooth page scrolling.

use iced::Task;
use iced::time::Instant;
use iced::widget::operation::scroll_to;
use iced::widget::scrollable::AbsoluteOffset;

use super::MessageHandler;
use crate::message::{Message, NavigationMessage};
use crate::state::AppState;

/// Id of the page scrollable.
pub const PAGE_SCROLL_ID: &str = "atelier_page";

/// Handler for navigation messages.
pub struct NavigationHandler;

impl MessageHandler<NavigationMessage> for NavigationHandler {
    fn handle(&self, state: &mut AppState, msg: NavigationMessage) -> Task<Message> {
        match msg {
            NavigationMessage::ToggleMenu => {
                state.portfolio.toggle_menu();
                Task::none()
            }

            NavigationMessage::GoTo(section) => {
                if let Some(target) = state.portfolio.go_to(section.as_id()) {
                    tracing::debug!(%section, target, "Scrolling to section");
                    state.scroll.animate_to(target, Instant::now());
                }
                Task::none()
            }

            NavigationMessage::Scrolled(offset) => {
                state.scroll.observe(offset);
                Task::none()
            }
        }
    }
}

/// Advance the running scroll animation by one frame.
pub fn scroll_page_to(state: &mut AppState, now: Instant) -> Task<Message> {
    match state.scroll.tick(now) {
        Some(offset) => scroll_to(PAGE_SCROLL_ID, AbsoluteOffset { x: 0.0, y: offset }),
        None => Task::none(),
    }
}
