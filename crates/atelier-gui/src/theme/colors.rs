//! Atelier color extension trait for page-specific colors.
//!
//! Provides an extension trait `AtelierColors` that adds the page's surface
//! tints and text shades to Iced's `Theme`. These are colors not covered by
//! Iced's built-in `ExtendedPalette`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::AtelierColors;
//!
//! .style(|theme: &Theme| {
//!     let atelier = theme.atelier();
//!     container::Style {
//!         background: Some(atelier.surface_hero.into()),
//!         ..Default::default()
//!     }
//! })
//! ```

use iced::{Color, Theme};

// =============================================================================
// ATELIER COLOR SET
// =============================================================================

/// Page colors not covered by Iced's ExtendedPalette.
#[derive(Debug, Clone, Copy)]
pub struct AtelierColorSet {
    // === Section Surfaces ===
    /// Hero and about backdrop (amber/rose wash)
    pub surface_warm: Color,
    /// Technical portfolio backdrop (blue/indigo wash)
    pub surface_cool: Color,
    /// Cards and form inputs
    pub surface_card: Color,
    /// Idle filter chips, icon discs
    pub surface_muted: Color,
    /// Hovered filter chips
    pub surface_muted_hover: Color,
    /// Footer background
    pub surface_footer: Color,

    // === Text ===
    /// Body copy on light surfaces
    pub text_body: Color,
    /// Secondary copy, captions
    pub text_muted: Color,
    /// Placeholders, disabled labels
    pub text_disabled: Color,
    /// Text on the accent color
    pub text_on_accent: Color,
    /// Footer text
    pub text_footer: Color,

    // === Accent States ===
    /// Accent button hover
    pub accent_hover: Color,
    /// Accent button disabled
    pub accent_disabled: Color,

    // === Borders & Shadows ===
    pub border_default: Color,
    pub border_focused: Color,
    pub shadow: Color,
    /// Scrim behind gallery card captions
    pub overlay: Color,
}

/// Extension trait for accessing atelier colors from Iced's Theme.
pub trait AtelierColors {
    /// Get the atelier color set for this theme.
    fn atelier(&self) -> AtelierColorSet;
}

impl AtelierColors for Theme {
    fn atelier(&self) -> AtelierColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;
        let accent = palette.primary.base.color;
        let background = palette.background.base.color;

        if is_dark {
            AtelierColorSet {
                surface_warm: Color::from_rgb(0.14, 0.11, 0.10),
                surface_cool: Color::from_rgb(0.10, 0.11, 0.16),
                surface_card: Color::from_rgb(0.16, 0.15, 0.14),
                surface_muted: Color::from_rgb(0.20, 0.19, 0.18),
                surface_muted_hover: Color::from_rgb(0.26, 0.25, 0.23),
                surface_footer: Color::from_rgb(0.05, 0.05, 0.04),
                text_body: Color::from_rgb(0.86, 0.84, 0.80),
                text_muted: Color::from_rgb(0.68, 0.66, 0.62),
                text_disabled: Color::from_rgb(0.48, 0.46, 0.43),
                text_on_accent: background,
                text_footer: Color::from_rgb(0.62, 0.60, 0.57),
                accent_hover: blend_color(accent, Color::BLACK, 0.12),
                accent_disabled: blend_color(accent, background, 0.55),
                border_default: Color::from_rgb(0.28, 0.27, 0.25),
                border_focused: accent,
                shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.45),
                overlay: Color::from_rgba(0.0, 0.0, 0.0, 0.65),
            }
        } else {
            AtelierColorSet {
                surface_warm: Color::from_rgb(1.00, 0.97, 0.94),
                surface_cool: Color::from_rgb(0.93, 0.95, 1.00),
                surface_card: Color::WHITE,
                surface_muted: Color::from_rgb(0.95, 0.96, 0.96),
                surface_muted_hover: Color::from_rgb(0.90, 0.91, 0.92),
                surface_footer: Color::from_rgb(0.07, 0.09, 0.15),
                text_body: Color::from_rgb(0.22, 0.25, 0.32),
                text_muted: Color::from_rgb(0.29, 0.33, 0.39),
                text_disabled: Color::from_rgb(0.61, 0.64, 0.69),
                text_on_accent: Color::WHITE,
                text_footer: Color::from_rgb(0.61, 0.64, 0.69),
                accent_hover: blend_color(accent, Color::WHITE, 0.12),
                accent_disabled: blend_color(accent, Color::WHITE, 0.45),
                border_default: Color::from_rgb(0.82, 0.84, 0.86),
                border_focused: accent,
                shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
                overlay: Color::from_rgba(0.0, 0.0, 0.0, 0.55),
            }
        }
    }
}

/// Blend two colors together.
fn blend_color(base: Color, blend: Color, factor: f32) -> Color {
    Color::from_rgb(
        base.r + (blend.r - base.r) * factor,
        base.g + (blend.g - base.g) * factor,
        base.b + (blend.b - base.b) * factor,
    )
}
