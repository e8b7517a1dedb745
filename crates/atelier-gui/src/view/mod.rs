//! Page views.
//!
//! The window shows the navigation bar above one vertical scrollable that
//! holds every section in page order:
//!
//! | Section | Anchor | Backdrop |
//! |---------|--------|----------|
//! | Hero | `home` | warm |
//! | Design gallery | `dportfolio` | plain |
//! | Technical portfolio | `tportfolio` | cool |
//! | About | `about` | warm |
//! | Contact | `contact` | plain |
//!
//! Section containers take their heights from [`PageLayout`] so the scroll
//! anchors match what is drawn.
//!
//! [`PageLayout`]: crate::state::PageLayout

mod about;
mod contact;
mod footer;
mod gallery;
mod hero;
mod nav;
mod showcase;

use iced::widget::{Space, button, column, container, row, scrollable, stack, text};
use iced::{Alignment, Element, Length};

use crate::component::icon::{icon_alert, icon_close};
use crate::error::GuiError;
use crate::handler::PAGE_SCROLL_ID;
use crate::message::{Message, NavigationMessage};
use crate::state::{AppState, PageLayout, SectionId};
use crate::theme::spacing::{CONTENT_MAX_WIDTH, SECTION_PADDING_X, SECTION_PADDING_Y};
use crate::theme::typography::{FONT_SIZE_CAPTION, FONT_SIZE_SMALL};
use crate::theme::{SPACING_MD, SPACING_SM, Surface, button_link, notice, section};

/// Render the whole page.
pub fn view_page(state: &AppState) -> Element<'_, Message> {
    let portfolio = &state.portfolio;
    let layout = portfolio.layout();
    let content = portfolio.content();

    let sections = column![
        hero::view_hero(&content.hero, layout),
        gallery::view_gallery(portfolio),
        showcase::view_showcase(&content.document, layout),
        about::view_about(&content.about, layout),
        contact::view_contact(portfolio),
        footer::view_footer(content),
    ]
    .width(Length::Fill);

    let page = scrollable(sections)
        .id(PAGE_SCROLL_ID)
        .on_scroll(|viewport| {
            Message::Navigation(NavigationMessage::Scrolled(viewport.absolute_offset().y))
        })
        .width(Length::Fill)
        .height(Length::Fill);

    // Overlays sit on top of the page so they never shift section anchors.
    let mut overlays = column![].width(Length::Fill);
    if portfolio.is_menu_open() && layout.mode().is_compact() {
        overlays = overlays.push(nav::view_menu());
    }
    if let Some(error) = &state.notice {
        overlays = overlays.push(view_notice(error));
    }

    column![
        nav::view_nav(state),
        stack![page, overlays].width(Length::Fill).height(Length::Fill),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Wrap section content in its backdrop at the height the layout gave it.
///
/// Content is centered and capped at the page's maximum width.
fn section_frame<'a>(
    id: SectionId,
    layout: &PageLayout,
    surface: Surface,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let inner = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .max_width(CONTENT_MAX_WIDTH)
        .padding([SECTION_PADDING_Y, SECTION_PADDING_X]);

    container(inner)
        .width(Length::Fill)
        .height(layout.section_height(id))
        .center_x(Length::Fill)
        .clip(true)
        .style(section(surface))
        .into()
}

/// Dismissible banner for a recoverable error.
fn view_notice(error: &GuiError) -> Element<'_, Message> {
    let mut message = column![text(error.to_string()).size(FONT_SIZE_SMALL)].spacing(2);
    if let Some(suggestion) = error.suggestion() {
        message = message.push(text(suggestion).size(FONT_SIZE_CAPTION));
    }

    let dismiss = button(icon_close().size(16))
        .on_press(Message::DismissNotice)
        .padding(SPACING_SM)
        .style(button_link);

    container(
        row![
            icon_alert().size(18),
            Space::new().width(SPACING_SM),
            text(error.category().label()).size(FONT_SIZE_SMALL),
            Space::new().width(SPACING_MD),
            message,
            Space::new().width(Length::Fill),
            dismiss,
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([SPACING_SM, SPACING_MD])
    .style(notice)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Viewport;
    use atelier_content::SiteContent;
    use std::sync::Arc;

    fn state(viewport: Viewport) -> AppState {
        let content = Arc::new(SiteContent::bundled().unwrap());
        AppState::with_content(content, viewport)
    }

    #[test]
    fn test_page_builds_in_every_layout() {
        for width in [375.0, 900.0, 1440.0] {
            let state = state(Viewport::new(width, 800.0));
            let _page = view_page(&state);
        }
    }

    #[test]
    fn test_page_builds_with_overlays() {
        let mut state = state(Viewport::new(375.0, 800.0));
        state.portfolio.toggle_menu();
        state.notice = Some(GuiError::settings_save("disk full"));
        let _page = view_page(&state);
    }

    #[test]
    fn test_page_builds_with_empty_gallery() {
        let mut state = state(Viewport::default());
        state.portfolio.select_category("Embroidery");
        assert!(state.portfolio.visible_items().is_empty());
        let _page = view_page(&state);
    }
}
