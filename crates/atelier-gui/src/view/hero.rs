//! Hero banner.

use atelier_content::HeroCopy;
use iced::alignment::Horizontal;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::section_frame;
use crate::component::icon::icon_chevron_right;
use crate::message::{Message, NavigationMessage};
use crate::state::{PageLayout, SectionId};
use crate::theme::typography::{FONT_SIZE_BODY, FONT_SIZE_TAGLINE, SERIF, display_size};
use crate::theme::{SPACING_LG, SPACING_SM, SPACING_XL, Surface, button_primary, text_muted};

/// Render the hero: headline, tagline and the call-to-action into the gallery.
pub fn view_hero<'a>(hero: &'a HeroCopy, layout: &PageLayout) -> Element<'a, Message> {
    let compact = layout.mode().is_compact();

    let cta = button(
        row![
            text(&hero.call_to_action).size(FONT_SIZE_BODY),
            Space::new().width(SPACING_SM),
            icon_chevron_right().size(20),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::Navigation(NavigationMessage::GoTo(
        SectionId::Designs,
    )))
    .padding([12.0, SPACING_XL])
    .style(button_primary);

    let content = column![
        text(&hero.headline)
            .size(display_size(compact))
            .font(SERIF)
            .align_x(Horizontal::Center),
        Space::new().height(SPACING_LG),
        text(&hero.tagline)
            .size(FONT_SIZE_TAGLINE)
            .style(text_muted)
            .align_x(Horizontal::Center),
        Space::new().height(SPACING_XL),
        cta,
    ]
    .align_x(Alignment::Center);

    section_frame(
        SectionId::Home,
        layout,
        Surface::Warm,
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
}
