//! Main application module for the Atelier Portfolio.
//!
//! This module implements the Iced 0.14.0 application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **Page behaviour lives in `PortfolioView`** - Handlers only translate messages
//! - **No channels/polling** - The reset timer runs through `Task::perform`
//!
//! # Module Structure
//!
//! - `subscription` - Window, frame and system theme subscriptions

mod subscription;

use iced::{Element, Size, Subscription, Task, Theme};

use crate::constants::APP_NAME;
use crate::error::GuiError;
use crate::handler::{
    ContactHandler, GalleryHandler, MessageHandler, NavigationHandler, scroll_page_to,
};
use crate::message::Message;
use crate::service::open_url;
use crate::state::{AppState, Settings, Viewport};
use crate::theme::atelier_theme;

/// Initial window size.
pub const DEFAULT_WINDOW_SIZE: Size = Size {
    width: 1280.0,
    height: 800.0,
};

/// Smallest window size. Narrow enough for the compact layout.
pub const MIN_WINDOW_SIZE: Size = Size {
    width: 360.0,
    height: 560.0,
};

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Loads settings and site content.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let viewport = Viewport::new(DEFAULT_WINDOW_SIZE.width, DEFAULT_WINDOW_SIZE.height);
        (Self::with_state(AppState::with_settings(settings, viewport)), Task::none())
    }

    /// Wrap existing state and attach the render observer.
    pub fn with_state(mut state: AppState) -> Self {
        state.portfolio.subscribe(|revision: u64| {
            tracing::trace!(revision, "Portfolio state changed");
        });
        Self { state }
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture - all state changes happen here.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Page sections
            // =================================================================
            Message::Navigation(msg) => NavigationHandler.handle(&mut self.state, msg),

            Message::Gallery(msg) => GalleryHandler.handle(&mut self.state, msg),

            Message::Contact(msg) => ContactHandler.handle(&mut self.state, msg),

            // =================================================================
            // External actions
            // =================================================================
            Message::OpenUrl(url) => {
                if let Err(e) = open_url(&url) {
                    tracing::warn!("{e}");
                    self.state.notice = Some(e);
                }
                Task::none()
            }

            // =================================================================
            // Window & system events
            // =================================================================
            Message::WindowResized(size) => {
                self.state
                    .portfolio
                    .resize(Viewport::new(size.width, size.height));
                Task::none()
            }

            Message::AnimationFrame(now) => scroll_page_to(&mut self.state, now),

            Message::SystemThemeChanged(mode) => {
                self.state.system_is_dark = matches!(mode, iced::theme::Mode::Dark);
                Task::none()
            }

            Message::CycleThemeMode => {
                let theme_mode = self.state.settings.display.theme_mode.next();
                self.state.settings.display.theme_mode = theme_mode;
                tracing::info!(mode = %theme_mode, "Theme mode changed");

                if let Err(e) = self.state.settings.save() {
                    tracing::warn!("Failed to save settings: {e}");
                    self.state.notice = Some(GuiError::settings_save(e));
                }
                Task::none()
            }

            Message::DismissNotice => {
                self.state.notice = None;
                Task::none()
            }
        }
    }

    /// Render the page.
    pub fn view(&self) -> Element<'_, Message> {
        crate::view::view_page(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        let brand = &self.state.portfolio.content().brand;
        if brand.is_empty() {
            APP_NAME.to_string()
        } else {
            format!("{brand} \u{b7} {APP_NAME}")
        }
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        atelier_theme(
            self.state.settings.display.theme_mode,
            self.state.system_is_dark,
        )
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ContactMessage, GalleryMessage, NavigationMessage};
    use crate::service::ResetTicket;
    use crate::state::{ContactField, SectionId, SubmissionPhase};
    use std::sync::Arc;

    fn app() -> App {
        let content = Arc::new(atelier_content::SiteContent::bundled().unwrap());
        App::with_state(AppState::with_content(
            content,
            Viewport::new(DEFAULT_WINDOW_SIZE.width, DEFAULT_WINDOW_SIZE.height),
        ))
    }

    #[test]
    fn test_filter_message() {
        let mut app = app();
        let _ = app.update(Message::Gallery(GalleryMessage::SelectCategory(
            "Thari".to_string(),
        )));
        let ids: Vec<u32> = app
            .state
            .portfolio
            .visible_items()
            .iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn test_go_to_starts_scroll_and_closes_menu() {
        let mut app = app();
        let _ = app.update(Message::Navigation(NavigationMessage::ToggleMenu));
        assert!(app.state.portfolio.is_menu_open());

        let _ = app.update(Message::Navigation(NavigationMessage::GoTo(
            SectionId::About,
        )));
        assert!(!app.state.portfolio.is_menu_open());
        assert!(app.state.scroll.is_animating());
    }

    #[test]
    fn test_resize_switches_layout() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(600.0, 900.0)));
        assert!(app.state.portfolio.layout_mode().is_compact());
    }

    #[test]
    fn test_dismiss_notice() {
        let mut app = app();
        app.state.notice = Some(GuiError::content_load("broken"));
        let _ = app.update(Message::DismissNotice);
        assert!(app.state.notice.is_none());
    }

    #[test]
    fn test_system_theme_tracking() {
        let mut app = app();
        let _ = app.update(Message::SystemThemeChanged(iced::theme::Mode::Dark));
        assert!(app.state.system_is_dark);
    }

    #[tokio::test(start_paused = true)]
    async fn test_contact_submit_freezes_form() {
        let mut app = app();
        let _ = app.update(Message::Contact(ContactMessage::FieldChanged(
            ContactField::Name,
            "Jane".to_string(),
        )));
        let _ = app.update(Message::Contact(ContactMessage::Submit));
        assert!(app.state.portfolio.contact().is_submitted());

        let _ = app.update(Message::Contact(ContactMessage::FieldChanged(
            ContactField::Name,
            "Mallory".to_string(),
        )));
        assert_eq!(app.state.portfolio.form().name, "Jane");
    }

    fn pending_ticket(app: &App) -> ResetTicket {
        match app.state.portfolio.contact().phase() {
            SubmissionPhase::Submitted { ticket } => ticket,
            SubmissionPhase::Idle => panic!("no submission pending"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_elapsed_returns_form_to_idle() {
        let mut app = app();
        let _ = app.update(Message::Contact(ContactMessage::FieldChanged(
            ContactField::Email,
            "jane@example.com".to_string(),
        )));
        let _ = app.update(Message::Contact(ContactMessage::Submit));
        let ticket = pending_ticket(&app);

        let _ = app.update(Message::Contact(ContactMessage::ResetElapsed(ticket)));
        assert_eq!(app.state.portfolio.contact().phase(), SubmissionPhase::Idle);
        assert!(app.state.portfolio.form().is_empty());
        assert!(app.state.portfolio.contact().pending_timer().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_reset_leaves_submission_pending() {
        let mut app = app();
        let _ = app.update(Message::Contact(ContactMessage::FieldChanged(
            ContactField::Name,
            "Jane".to_string(),
        )));
        let _ = app.update(Message::Contact(ContactMessage::Submit));
        let ticket = pending_ticket(&app);

        let _ = app.update(Message::Contact(ContactMessage::ResetElapsed(
            ticket.next(),
        )));
        assert_eq!(
            app.state.portfolio.contact().phase(),
            SubmissionPhase::Submitted { ticket }
        );
        assert_eq!(app.state.portfolio.form().name, "Jane");
        assert!(app.state.portfolio.contact().pending_timer().is_some());
    }

    #[test]
    fn test_title_uses_brand() {
        assert_eq!(app().title(), "LOGITHA VARSHINI RAMESH \u{b7} Atelier Portfolio");
    }
}
