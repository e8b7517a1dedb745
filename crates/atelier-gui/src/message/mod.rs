//! Message module for the Atelier Portfolio.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and events flow through these message types.

pub mod contact;
pub mod gallery;
pub mod navigation;

use iced::Size;
use iced::time::Instant;

pub use contact::ContactMessage;
pub use gallery::GalleryMessage;
pub use navigation::NavigationMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Page sections
    // =========================================================================
    /// Navigation bar, menu and page scrolling
    Navigation(NavigationMessage),

    /// Gallery filter and cards
    Gallery(GalleryMessage),

    /// Contact form lifecycle
    Contact(ContactMessage),

    // =========================================================================
    // External actions
    // =========================================================================
    /// Open a URL in the host's default handler
    OpenUrl(String),

    // =========================================================================
    // Window & system events
    // =========================================================================
    /// Main window resized
    WindowResized(Size),

    /// Animation frame while a smooth scroll is running
    AnimationFrame(Instant),

    /// OS light/dark appearance changed
    SystemThemeChanged(iced::theme::Mode),

    /// Cycle light, dark and system appearance
    CycleThemeMode,

    /// Dismiss the notice banner
    DismissNotice,
}
