//! Typography definitions for consistent text styling.
//!
//! All font sizes are in pixels (f32).

use iced::Font;
use iced::font::Family;

// =============================================================================
// FONT SIZES
// =============================================================================

/// Caption text - category labels, footnotes
pub const FONT_SIZE_CAPTION: f32 = 12.0;

/// Small text - secondary information
pub const FONT_SIZE_SMALL: f32 = 14.0;

/// Body text - default text size
pub const FONT_SIZE_BODY: f32 = 16.0;

/// Subtitle text - contact channel titles, intro copy
pub const FONT_SIZE_SUBTITLE: f32 = 18.0;

/// Title text - brand, card headings
pub const FONT_SIZE_TITLE: f32 = 24.0;

/// Heading text - section headers
pub const FONT_SIZE_HEADING: f32 = 44.0;

/// Display text - hero headline
pub const FONT_SIZE_DISPLAY: f32 = 64.0;

/// Hero tagline
pub const FONT_SIZE_TAGLINE: f32 = 22.0;

// =============================================================================
// LINE HEIGHTS
// =============================================================================

/// Relaxed line height - biography paragraphs
pub const LINE_HEIGHT_RELAXED: f32 = 1.625;

// =============================================================================
// FONTS
// =============================================================================

/// Serif face for headings and the brand.
pub const SERIF: Font = Font {
    family: Family::Serif,
    ..Font::DEFAULT
};

/// Heading size scaled down for compact windows.
pub fn heading_size(compact: bool) -> f32 {
    if compact {
        FONT_SIZE_HEADING * 0.8
    } else {
        FONT_SIZE_HEADING
    }
}

/// Hero headline size scaled down for compact windows.
pub fn display_size(compact: bool) -> f32 {
    if compact {
        FONT_SIZE_DISPLAY * 0.75
    } else {
        FONT_SIZE_DISPLAY
    }
}
