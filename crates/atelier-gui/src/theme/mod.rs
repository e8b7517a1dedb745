//! Theme module for the Atelier Portfolio.
//!
//! - Color palettes for light and dark appearance (`palette`)
//! - Page-specific colors via the `AtelierColors` extension trait (`colors`)
//! - Spacing and page geometry constants (`spacing`)
//! - Typography definitions (`typography`)
//! - Custom widget styles (`atelier`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::{atelier_theme, button_primary, spacing};
//!
//! let theme = atelier_theme(ThemeMode::System, system_is_dark);
//! button(text("Explore Collections")).style(button_primary)
//! ```

pub mod atelier;
pub mod colors;
pub mod palette;
pub mod spacing;
pub mod typography;

// Re-export theme creation function
pub use atelier::atelier_theme;

// Re-export color extension trait
pub use colors::{AtelierColorSet, AtelierColors};

// Re-export palette mode enum
pub use palette::ThemeMode;

// Re-export widget style functions
pub use atelier::{
    Surface, artwork, button_light, button_link, button_primary, button_solid, caption_scrim,
    card, chip_style, footer, heading_rule, icon_disc, nav_bar, notice, section, text_accent,
    text_input_default, text_muted,
};

// Re-export spacing constants
pub use spacing::{
    BORDER_RADIUS_LG, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS, SPACING_XXL,
};
