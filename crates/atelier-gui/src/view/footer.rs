//! Page footer.

use atelier_content::SiteContent;
use iced::widget::{container, text};
use iced::{Element, Length};

use crate::constants::copyright;
use crate::message::Message;
use crate::state::layout::FOOTER_HEIGHT;
use crate::theme::footer;
use crate::theme::typography::FONT_SIZE_SMALL;

pub fn view_footer(content: &SiteContent) -> Element<'_, Message> {
    container(text(copyright(&content.copyright_holder)).size(FONT_SIZE_SMALL))
        .width(Length::Fill)
        .height(FOOTER_HEIGHT)
        .center_x(Length::Fill)
        .center_y(FOOTER_HEIGHT)
        .style(footer)
        .into()
}
