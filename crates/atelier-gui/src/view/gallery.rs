//! Design gallery: filter chips above a responsive card grid.

use atelier_content::GalleryItem;
use iced::widget::{Row, Space, button, column, container, row, stack, text};
use iced::{Alignment, Element, Length};

use super::section_frame;
use crate::component::SectionHeading;
use crate::component::icon::{icon_external_link, icon_image};
use crate::message::{GalleryMessage, Message};
use crate::state::{PortfolioView, SectionId};
use crate::theme::spacing::CARD_GAP;
use crate::theme::typography::{
    FONT_SIZE_BODY, FONT_SIZE_CAPTION, FONT_SIZE_SMALL, FONT_SIZE_TITLE, SERIF,
};
use crate::theme::{
    SPACING_LG, SPACING_SM, SPACING_XL, SPACING_XS, Surface, artwork, button_light, caption_scrim,
    card, chip_style, text_muted,
};

/// Render the gallery section for the current filter and layout.
pub fn view_gallery(portfolio: &PortfolioView) -> Element<'_, Message> {
    let layout = portfolio.layout();
    let compact = layout.mode().is_compact();

    let heading = SectionHeading::new("Design Portfolio")
        .compact(compact)
        .view();

    let content = column![
        heading,
        Space::new().height(SPACING_XL),
        view_filter_bar(portfolio),
        Space::new().height(SPACING_XL),
        view_grid(portfolio),
    ]
    .width(Length::Fill);

    section_frame(SectionId::Designs, layout, Surface::Plain, content)
}

/// One chip per category label, "All" first.
fn view_filter_bar(portfolio: &PortfolioView) -> Element<'_, Message> {
    let selected = portfolio.selected_category().label();

    let chips = portfolio.categories().into_iter().map(|label| {
        let chip = button(text(label).size(FONT_SIZE_BODY))
            .on_press(Message::Gallery(GalleryMessage::SelectCategory(
                label.to_string(),
            )))
            .padding([SPACING_SM, SPACING_LG])
            .style(chip_style(label == selected));
        container(chip).padding([SPACING_XS, 0.0]).into()
    });

    container(Row::with_children(chips).spacing(SPACING_SM).wrap())
        .center_x(Length::Fill)
        .into()
}

fn view_grid(portfolio: &PortfolioView) -> Element<'_, Message> {
    let layout = portfolio.layout();
    let visible = portfolio.visible_items();

    if visible.is_empty() {
        return container(
            text("No designs in this collection yet.")
                .size(FONT_SIZE_BODY)
                .style(text_muted),
        )
        .center_x(Length::Fill)
        .into();
    }

    let (width, height) = (layout.card_width(), layout.card_height());
    let rows = visible.chunks(layout.mode().gallery_columns()).map(|chunk| {
        let cards = chunk
            .iter()
            .copied()
            .map(|item| view_card(item, width, height));
        Row::with_children(cards).spacing(CARD_GAP).into()
    });

    container(column(rows).spacing(CARD_GAP))
        .center_x(Length::Fill)
        .into()
}

/// Artwork placeholder with the caption pinned to the bottom edge.
fn view_card(item: &GalleryItem, width: f32, height: f32) -> Element<'_, Message> {
    let art = container(icon_image().size(48).style(text_muted))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(artwork(item.id));

    let mut caption = column![text(item.category.to_uppercase()).size(FONT_SIZE_CAPTION)]
        .spacing(SPACING_XS);
    if !item.title.trim().is_empty() {
        caption = caption.push(text(&item.title).size(FONT_SIZE_TITLE).font(SERIF));
    }
    if !item.description.is_empty() {
        caption = caption.push(text(&item.description).size(FONT_SIZE_SMALL));
    }

    let open = button(
        row![
            text("View image").size(FONT_SIZE_SMALL),
            Space::new().width(SPACING_XS),
            icon_external_link().size(14),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::Gallery(GalleryMessage::OpenItem(item.id)))
    .padding([SPACING_XS, SPACING_SM])
    .style(button_light);

    let caption = container(
        column![caption, open]
            .spacing(SPACING_SM)
            .align_x(Alignment::Start),
    )
    .width(Length::Fill)
    .padding(SPACING_LG)
    .style(caption_scrim);

    container(stack![
        art,
        column![Space::new().height(Length::Fill), caption].height(Length::Fill),
    ])
    .width(width)
    .height(height)
    .style(card)
    .into()
}
