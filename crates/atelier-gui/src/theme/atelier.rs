//! Atelier theme implementation.
//!
//! This module provides the custom theme and widget style functions that
//! give the portfolio its look.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::{button_primary, chip_style};
//!
//! button(text("Send Message")).style(button_primary)
//! button(text("Thari")).style(chip_style(is_selected))
//! ```

use iced::widget::{button, container, text, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use super::colors::AtelierColors;
use super::palette::{ThemeMode, atelier_palette};
use super::spacing;

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the Atelier theme for the given mode.
///
/// * `theme_mode` - Light, Dark, or System mode
/// * `system_is_dark` - Whether the system is in dark mode (for System theme mode)
pub fn atelier_theme(theme_mode: ThemeMode, system_is_dark: bool) -> Theme {
    let palette = atelier_palette(theme_mode, system_is_dark);
    let is_dark = theme_mode.is_dark(system_is_dark);

    let theme_name = format!("Atelier {}", if is_dark { "Dark" } else { "Light" });

    Theme::custom(theme_name, palette)
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

fn filled(background: Color, text_color: Color, radius: f32, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: radius.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow,
        ..Default::default()
    }
}

/// Primary button style - call-to-action and submit.
///
/// Solid accent pill.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let atelier = theme.atelier();
    let radius = spacing::BORDER_RADIUS_FULL;

    match status {
        button::Status::Active => filled(
            palette.primary.base.color,
            atelier.text_on_accent,
            radius,
            Shadow::default(),
        ),
        button::Status::Hovered => filled(
            atelier.accent_hover,
            atelier.text_on_accent,
            radius,
            Shadow {
                color: atelier.shadow,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 6.0,
            },
        ),
        button::Status::Pressed => filled(
            atelier.accent_hover,
            atelier.text_on_accent,
            radius,
            Shadow::default(),
        ),
        button::Status::Disabled => filled(
            atelier.accent_disabled,
            atelier.text_on_accent,
            radius,
            Shadow::default(),
        ),
    }
}

/// Rectangular accent button - "Open PDF".
pub fn button_solid(theme: &Theme, status: button::Status) -> button::Style {
    let pill = button_primary(theme, status);
    button::Style {
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            ..pill.border
        },
        ..pill
    }
}

/// Light pill on a dark scrim - "View Portfolio", "View image".
pub fn button_light(theme: &Theme, status: button::Status) -> button::Style {
    let atelier = theme.atelier();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => atelier.surface_muted,
        _ => atelier.surface_card,
    };
    filled(
        background,
        theme.extended_palette().background.base.text,
        spacing::BORDER_RADIUS_FULL,
        Shadow::default(),
    )
}

/// Text-only navigation link.
pub fn button_link(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let atelier = theme.atelier();

    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.base.text,
        button::Status::Disabled => atelier.text_disabled,
        button::Status::Active => atelier.text_muted,
    };

    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Filter chip style. Selected chips use the accent fill.
pub fn chip_style(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let palette = theme.extended_palette();
        let atelier = theme.atelier();
        let radius = spacing::BORDER_RADIUS_FULL;

        if selected {
            return filled(
                palette.primary.base.color,
                atelier.text_on_accent,
                radius,
                Shadow::default(),
            );
        }

        let background = match status {
            button::Status::Hovered | button::Status::Pressed => atelier.surface_muted_hover,
            _ => atelier.surface_muted,
        };
        filled(background, atelier.text_body, radius, Shadow::default())
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Navigation bar: page background with a bottom shadow.
pub fn nav_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let atelier = theme.atelier();
    container::Style {
        background: Some(palette.background.base.color.into()),
        shadow: Shadow {
            color: atelier.shadow,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Section backdrop.
pub fn section(surface: Surface) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let atelier = theme.atelier();
        let background = match surface {
            Surface::Plain => theme.extended_palette().background.base.color,
            Surface::Warm => atelier.surface_warm,
            Surface::Cool => atelier.surface_cool,
        };
        container::Style {
            background: Some(background.into()),
            ..Default::default()
        }
    }
}

/// Section backdrop tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Plain,
    Warm,
    Cool,
}

/// Elevated card with rounded corners.
pub fn card(theme: &Theme) -> container::Style {
    let atelier = theme.atelier();
    container::Style {
        background: Some(atelier.surface_card.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: atelier.shadow,
            offset: Vector::new(0.0, 12.0),
            blur_radius: 32.0,
        },
        ..Default::default()
    }
}

/// Artwork placeholder behind gallery and document cards.
pub fn artwork(seed: u32) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let atelier = theme.atelier();
        // Cycle through a few warm tints so neighbouring cards differ.
        let tint = match seed % 4 {
            0 => atelier.surface_warm,
            1 => atelier.surface_muted,
            2 => atelier.surface_cool,
            _ => atelier.surface_muted_hover,
        };
        container::Style {
            background: Some(tint.into()),
            border: Border {
                radius: spacing::BORDER_RADIUS_LG.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: atelier.border_default,
            },
            ..Default::default()
        }
    }
}

/// Caption scrim at the bottom of a gallery card.
pub fn caption_scrim(theme: &Theme) -> container::Style {
    let atelier = theme.atelier();
    container::Style {
        background: Some(Background::Color(atelier.overlay)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round disc behind a contact channel icon.
pub fn icon_disc(theme: &Theme) -> container::Style {
    let atelier = theme.atelier();
    container::Style {
        background: Some(atelier.surface_muted.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Footer band.
pub fn footer(theme: &Theme) -> container::Style {
    let atelier = theme.atelier();
    container::Style {
        background: Some(atelier.surface_footer.into()),
        text_color: Some(atelier.text_footer),
        ..Default::default()
    }
}

/// Notice banner for recoverable errors.
pub fn notice(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.warning.weak.color.into()),
        text_color: Some(palette.warning.weak.text),
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let atelier = theme.atelier();

    let (border_color, border_width) = match status {
        text_input::Status::Focused { .. } => (atelier.border_focused, 2.0),
        text_input::Status::Hovered => (atelier.text_disabled, spacing::BORDER_WIDTH_THIN),
        text_input::Status::Active | text_input::Status::Disabled => {
            (atelier.border_default, spacing::BORDER_WIDTH_THIN)
        }
    };

    let background = match status {
        text_input::Status::Disabled => atelier.surface_muted,
        _ => atelier.surface_card,
    };

    text_input::Style {
        background: background.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: border_width,
            color: border_color,
        },
        icon: atelier.text_muted,
        placeholder: atelier.text_disabled,
        value: palette.background.base.text,
        selection: Color {
            a: 0.2,
            ..palette.primary.base.color
        },
    }
}

// =============================================================================
// TEXT STYLES
// =============================================================================

/// Secondary copy: captions, descriptions, contact details.
pub fn text_muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.atelier().text_muted),
    }
}

/// Accent colored text: brand mark, active links.
pub fn text_accent(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().primary.base.color),
    }
}

/// Accent rule under section headings.
pub fn heading_rule(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().primary.base.color.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
