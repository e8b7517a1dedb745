//! Spacing constants for consistent layout throughout the page.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - card padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - block separations
pub const SPACING_XL: f32 = 32.0;

/// Double extra large spacing - heading to content
pub const SPACING_XXL: f32 = 48.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - rectangular buttons
pub const BORDER_RADIUS_MD: f32 = 8.0;

/// Large radius - cards, portrait
pub const BORDER_RADIUS_LG: f32 = 16.0;

/// Full/pill radius - filter chips, call-to-action
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// BORDER WIDTHS
// =============================================================================

/// Thin border - subtle separators
pub const BORDER_WIDTH_THIN: f32 = 1.0;

// =============================================================================
// PAGE GEOMETRY
// =============================================================================

/// Navigation bar height.
pub const NAV_HEIGHT: f32 = 64.0;

/// Widest the page content gets; wider windows add side margins.
pub const CONTENT_MAX_WIDTH: f32 = 1280.0;

/// Horizontal padding inside a section.
pub const SECTION_PADDING_X: f32 = 24.0;

/// Vertical padding at the top and bottom of a section.
pub const SECTION_PADDING_Y: f32 = 80.0;

/// Gap between gallery cards.
pub const CARD_GAP: f32 = 32.0;

/// Width of the technical portfolio card.
pub const DOCUMENT_CARD_WIDTH: f32 = 896.0;

/// Height of the technical portfolio thumbnail (16:10).
pub const DOCUMENT_THUMB_HEIGHT: f32 = 400.0;

/// Width of the contact form column.
pub const FORM_WIDTH: f32 = 640.0;

/// Height of the message text area.
pub const MESSAGE_AREA_HEIGHT: f32 = 140.0;
