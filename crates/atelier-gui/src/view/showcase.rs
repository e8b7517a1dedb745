//! Technical portfolio card linking out to the PDF.

use atelier_content::DocumentReference;
use iced::widget::{Space, button, column, container, row, stack, text};
use iced::{Alignment, Element, Length};

use super::section_frame;
use crate::component::SectionHeading;
use crate::component::icon::{icon_external_link, icon_file_text};
use crate::message::Message;
use crate::state::{PageLayout, SectionId};
use crate::theme::spacing::{DOCUMENT_CARD_WIDTH, DOCUMENT_THUMB_HEIGHT};
use crate::theme::typography::{FONT_SIZE_BODY, FONT_SIZE_TITLE, SERIF};
use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, Surface, artwork, button_light, button_solid,
    card, text_muted,
};

const CARD_BLURB: &str = "Click to view my complete technical portfolio including projects, \
                          skills, and achievements.";

pub fn view_showcase<'a>(
    document: &'a DocumentReference,
    layout: &PageLayout,
) -> Element<'a, Message> {
    let compact = layout.mode().is_compact();
    let thumb_height = if compact {
        DOCUMENT_THUMB_HEIGHT * 0.6
    } else {
        DOCUMENT_THUMB_HEIGHT
    };

    let heading = SectionHeading::new("Technical Portfolio")
        .intro(&document.description)
        .compact(compact)
        .view();

    let view_portfolio = button(text("View Portfolio").size(FONT_SIZE_BODY))
        .on_press(Message::OpenUrl(document.pdf_url.clone()))
        .padding([SPACING_MD, SPACING_XL])
        .style(button_light);

    let thumbnail = stack![
        container(icon_file_text().size(72).style(text_muted))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(artwork(0)),
        container(view_portfolio)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_right(Length::Fill)
            .align_bottom(Length::Fill)
            .padding(SPACING_LG),
    ]
    .width(Length::Fill)
    .height(thumb_height);

    let title = if document.title.trim().is_empty() {
        "Technical Portfolio"
    } else {
        document.title.as_str()
    };

    let open_pdf = button(
        row![
            text("Open PDF").size(FONT_SIZE_BODY),
            Space::new().width(SPACING_SM),
            icon_external_link().size(16),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::OpenUrl(document.pdf_url.clone()))
    .padding([12.0, SPACING_LG])
    .style(button_solid);

    let body = column![
        text(title).size(FONT_SIZE_TITLE).font(SERIF),
        text(CARD_BLURB).size(FONT_SIZE_BODY).style(text_muted),
        open_pdf,
    ]
    .spacing(SPACING_MD)
    .padding(SPACING_XL);

    let document_card = container(column![thumbnail, body])
        .max_width(DOCUMENT_CARD_WIDTH)
        .width(Length::Fill)
        .style(card);

    let content = column![
        heading,
        Space::new().height(SPACING_XL),
        container(document_card).center_x(Length::Fill),
    ];

    section_frame(SectionId::Technical, layout, Surface::Cool, content)
}
