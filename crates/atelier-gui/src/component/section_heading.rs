//! Section heading component.

use iced::widget::{Space, column, container, text};
use iced::alignment::Horizontal;
use iced::{Alignment, Element, Length};

use crate::theme::typography::{FONT_SIZE_SUBTITLE, SERIF, heading_size};
use crate::theme::{SPACING_MD, SPACING_SM, heading_rule, text_muted};

/// Centered serif heading with an accent rule and optional intro line.
///
/// # Example
/// ```ignore
/// SectionHeading::new("Design Portfolio")
///     .intro("Explore my collection of fashion designs")
///     .compact(layout.mode().is_compact())
///     .view()
/// ```
pub struct SectionHeading<'a> {
    title: &'a str,
    intro: Option<&'a str>,
    compact: bool,
}

impl<'a> SectionHeading<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            intro: None,
            compact: false,
        }
    }

    pub fn intro(mut self, intro: &'a str) -> Self {
        self.intro = Some(intro).filter(|intro| !intro.is_empty());
        self
    }

    /// Use the smaller heading size.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn view<M: 'a>(self) -> Element<'a, M> {
        let rule = container(Space::new())
            .width(96)
            .height(4)
            .style(heading_rule);

        let mut content = column![
            text(self.title).size(heading_size(self.compact)).font(SERIF),
            Space::new().height(SPACING_MD),
            rule,
        ]
        .align_x(Alignment::Center);

        if let Some(intro) = self.intro {
            content = content.push(Space::new().height(SPACING_MD)).push(
                text(intro)
                    .size(FONT_SIZE_SUBTITLE)
                    .style(text_muted)
                    .align_x(Horizontal::Center),
            );
        }

        container(content.padding([0.0, SPACING_SM]))
            .center_x(Length::Fill)
            .into()
    }
}
