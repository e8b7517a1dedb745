//! Navigation bar and the compact menu.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::component::icon::{icon_close, icon_menu, icon_monitor, icon_moon, icon_sun};
use crate::message::{Message, NavigationMessage};
use crate::state::{AppState, SectionId};
use crate::theme::spacing::{CONTENT_MAX_WIDTH, NAV_HEIGHT, SECTION_PADDING_X};
use crate::theme::typography::{FONT_SIZE_BODY, FONT_SIZE_TITLE, SERIF};
use crate::theme::{SPACING_LG, SPACING_SM, SPACING_XS, ThemeMode, button_link, nav_bar};


/// Sections linked from the bar and the compact menu, home first.
const NAV_SECTIONS: [SectionId; 5] = SectionId::ALL;

fn go_to(section: SectionId) -> Message {
    Message::Navigation(NavigationMessage::GoTo(section))
}

/// Render the navigation bar.
///
/// Wide layouts show inline links. Compact layouts show the menu toggle.
pub fn view_nav(state: &AppState) -> Element<'_, Message> {
    let portfolio = &state.portfolio;
    let compact = portfolio.layout_mode().is_compact();

    let brand = button(
        text(&portfolio.content().brand)
            .size(FONT_SIZE_TITLE)
            .font(SERIF),
    )
    .on_press(go_to(SectionId::Home))
    .padding(0)
    .style(button_link);

    let mut bar = row![brand, Space::new().width(Length::Fill)]
        .spacing(SPACING_LG)
        .align_y(Alignment::Center);

    if !compact {
        for section in NAV_SECTIONS {
            bar = bar.push(nav_link(section));
        }
    }

    bar = bar.push(theme_toggle(state.settings.display.theme_mode));

    if compact {
        let toggle_icon: Element<'_, Message> = if portfolio.is_menu_open() {
            icon_close().size(24).into()
        } else {
            icon_menu().size(24).into()
        };
        bar = bar.push(
            button(toggle_icon)
                .on_press(Message::Navigation(NavigationMessage::ToggleMenu))
                .padding(SPACING_XS)
                .style(button_link),
        );
    }

    container(
        container(bar)
            .max_width(CONTENT_MAX_WIDTH)
            .padding([0.0, SECTION_PADDING_X])
            .center_y(Length::Fill),
    )
    .width(Length::Fill)
    .height(NAV_HEIGHT)
    .center_x(Length::Fill)
    .style(nav_bar)
    .into()
}

/// Render the expanded compact menu. Lists the same sections as the bar.
pub fn view_menu<'a>() -> Element<'a, Message> {
    let links = NAV_SECTIONS.into_iter().map(|section| {
        button(text(section.label()).size(FONT_SIZE_BODY))
            .on_press(go_to(section))
            .width(Length::Fill)
            .padding([SPACING_SM, 0.0])
            .style(button_link)
            .into()
    });

    container(column(links).spacing(SPACING_XS))
        .width(Length::Fill)
        .padding([SPACING_SM, SECTION_PADDING_X])
        .style(nav_bar)
        .into()
}

fn nav_link<'a>(section: SectionId) -> Element<'a, Message> {
    button(text(section.label()).size(FONT_SIZE_BODY))
        .on_press(go_to(section))
        .padding([SPACING_XS, 0.0])
        .style(button_link)
        .into()
}

/// Icon button cycling light, dark and system appearance.
fn theme_toggle<'a>(mode: ThemeMode) -> Element<'a, Message> {
    let icon = match mode {
        ThemeMode::Light => icon_sun(),
        ThemeMode::Dark => icon_moon(),
        ThemeMode::System => icon_monitor(),
    };

    button(icon.size(20))
        .on_press(Message::CycleThemeMode)
        .padding(SPACING_XS)
        .style(button_link)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_lists_every_section_home_first() {
        assert_eq!(NAV_SECTIONS[0], SectionId::Home);
        assert_eq!(NAV_SECTIONS, SectionId::ALL);
        let labels: Vec<&str> = NAV_SECTIONS.iter().map(|section| section.label()).collect();
        assert_eq!(
            labels,
            vec!["Home", "Design Portfolio", "Technical Portfolio", "About", "Contact"]
        );
    }
}
