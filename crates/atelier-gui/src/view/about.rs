//! Biography section.

use atelier_content::Biography;
use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::section_frame;
use crate::component::icon::icon_user;
use crate::message::Message;
use crate::state::{PageLayout, SectionId};
use crate::theme::typography::{FONT_SIZE_BODY, LINE_HEIGHT_RELAXED, SERIF, heading_size};
use crate::theme::{SPACING_LG, SPACING_XXL, Surface, artwork, text_muted};

/// Portrait edge in compact layouts. Wider layouts split the row in half.
const COMPACT_PORTRAIT: f32 = 360.0;

pub fn view_about<'a>(about: &'a Biography, layout: &PageLayout) -> Element<'a, Message> {
    let compact = layout.mode().is_compact();

    let paragraphs = about.paragraphs.iter().map(|paragraph| {
        text(paragraph)
            .size(FONT_SIZE_BODY)
            .line_height(LINE_HEIGHT_RELAXED)
            .style(text_muted)
            .into()
    });

    let copy = column![
        text(&about.heading)
            .size(heading_size(compact))
            .font(SERIF),
        column(paragraphs).spacing(SPACING_LG),
    ]
    .spacing(SPACING_LG)
    .width(Length::FillPortion(1));

    let portrait = container(icon_user().size(96).style(text_muted))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(artwork(3));

    let content: Element<'a, Message> = if compact {
        column![
            copy,
            portrait.width(Length::Fill).height(COMPACT_PORTRAIT),
        ]
        .spacing(SPACING_XXL)
        .into()
    } else {
        row![
            copy,
            Space::new().width(SPACING_XXL),
            portrait
                .width(Length::FillPortion(1))
                .height(Length::Fill),
        ]
        .align_y(Alignment::Center)
        .into()
    };

    section_frame(SectionId::About, layout, Surface::Warm, content)
}
