//! Message handlers for the portfolio page.
//!
//! Each handler implements [`MessageHandler`] for one section's message type,
//! keeping `App::update()` a thin dispatcher:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Gallery(msg) => GalleryHandler.handle(&mut self.state, msg),
//!         Message::Contact(msg) => ContactHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod contact;
mod gallery;
mod navigation;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use contact::ContactHandler;
pub use gallery::GalleryHandler;
pub use navigation::{NavigationHandler, PAGE_SCROLL_ID, scroll_page_to};

/// Trait for handling messages in the Iced architecture.
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
