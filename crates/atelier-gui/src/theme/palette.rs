//! Atelier color palettes.
//!
//! Warm neutrals with a charcoal accent, in a light and a dark variant. Both
//! integrate with Iced's theme system via the `Palette` type.

use iced::Color;
use iced::theme::Palette;
use serde::{Deserialize, Serialize};

// =============================================================================
// THEME MODE
// =============================================================================

/// Theme mode for light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// All available modes, in toggle order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// The mode after this one in toggle order.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Check if this is a dark mode (or resolves to dark).
    pub fn is_dark(&self, system_is_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_is_dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// PALETTE CREATION
// =============================================================================

/// Create the Iced Palette for the given theme mode.
pub fn atelier_palette(theme_mode: ThemeMode, system_is_dark: bool) -> Palette {
    if theme_mode.is_dark(system_is_dark) {
        dark()
    } else {
        light()
    }
}

/// Ivory background, charcoal text and accent.
fn light() -> Palette {
    Palette {
        background: Color::from_rgb(1.00, 1.00, 1.00),
        text: Color::from_rgb(0.07, 0.09, 0.15),    // gray-900
        primary: Color::from_rgb(0.07, 0.09, 0.15), // gray-900
        success: Color::from_rgb(0.09, 0.64, 0.29),
        warning: Color::from_rgb(0.85, 0.47, 0.02),
        danger: Color::from_rgb(0.86, 0.15, 0.15),
    }
}

/// Espresso background, parchment text and accent.
fn dark() -> Palette {
    Palette {
        background: Color::from_rgb(0.09, 0.08, 0.07),
        text: Color::from_rgb(0.96, 0.94, 0.90),
        primary: Color::from_rgb(0.96, 0.94, 0.90),
        success: Color::from_rgb(0.29, 0.78, 0.47),
        warning: Color::from_rgb(0.98, 0.70, 0.25),
        danger: Color::from_rgb(0.97, 0.44, 0.44),
    }
}
