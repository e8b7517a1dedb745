//! Icon helper components using iced_fonts with Lucide icons.
//!
//! # Usage
//!
//! ```rust,ignore
//! use atelier_gui::component::icon::{icon_mail, icon_menu};
//!
//! row![icon_mail().size(20), text("info@designer.com")]
//! ```
//!
//! See <https://lucide.dev/icons/> for the full icon catalog.

use iced::widget::Text;

// Re-export the Lucide font bytes for loading in main.rs
pub use iced_fonts::LUCIDE_FONT_BYTES;

// =============================================================================
// NAVIGATION
// =============================================================================

/// Hamburger icon - opens the compact menu
pub fn icon_menu() -> Text<'static> {
    iced_fonts::lucide::menu()
}

/// Close icon - closes the compact menu, dismisses notices
pub fn icon_close() -> Text<'static> {
    iced_fonts::lucide::x()
}

/// Chevron right - call-to-action affordance
pub fn icon_chevron_right() -> Text<'static> {
    iced_fonts::lucide::chevron_right()
}

/// External link - opens in the browser
pub fn icon_external_link() -> Text<'static> {
    iced_fonts::lucide::external_link()
}

// =============================================================================
// CONTENT
// =============================================================================

/// File text - technical document
pub fn icon_file_text() -> Text<'static> {
    iced_fonts::lucide::file_text()
}

/// Image - gallery artwork
pub fn icon_image() -> Text<'static> {
    iced_fonts::lucide::image()
}

/// User - biography portrait placeholder
pub fn icon_user() -> Text<'static> {
    iced_fonts::lucide::user()
}

// =============================================================================
// CONTACT
// =============================================================================

pub fn icon_mail() -> Text<'static> {
    iced_fonts::lucide::mail()
}

pub fn icon_phone() -> Text<'static> {
    iced_fonts::lucide::phone()
}

pub fn icon_instagram() -> Text<'static> {
    iced_fonts::lucide::instagram()
}

/// Check - submission acknowledged
pub fn icon_check() -> Text<'static> {
    iced_fonts::lucide::check()
}

// =============================================================================
// APPEARANCE & STATUS
// =============================================================================

pub fn icon_sun() -> Text<'static> {
    iced_fonts::lucide::sun()
}

pub fn icon_moon() -> Text<'static> {
    iced_fonts::lucide::moon()
}

/// Monitor - follow the system appearance
pub fn icon_monitor() -> Text<'static> {
    iced_fonts::lucide::monitor()
}

/// Alert circle - notices
pub fn icon_alert() -> Text<'static> {
    iced_fonts::lucide::circle_alert()
}
