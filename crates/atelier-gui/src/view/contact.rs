//! Contact channels and the contact form.

use atelier_content::ContactDetails;
use iced::widget::{Space, Text, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::section_frame;
use crate::component::icon::{icon_check, icon_instagram, icon_mail, icon_phone};
use crate::component::{SectionHeading, TextAreaField, TextField};
use crate::message::{ContactMessage, Message};
use crate::state::{ContactField, PortfolioView, SectionId};
use crate::theme::spacing::{FORM_WIDTH, MESSAGE_AREA_HEIGHT};
use crate::theme::typography::{FONT_SIZE_BODY, FONT_SIZE_SUBTITLE};
use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XXL, Surface, button_link,
    button_primary, icon_disc, text_muted,
};

pub fn view_contact(portfolio: &PortfolioView) -> Element<'_, Message> {
    let layout = portfolio.layout();
    let compact = layout.mode().is_compact();
    let details = &portfolio.content().contact;

    let heading = SectionHeading::new("Get in Touch")
        .intro(&details.intro)
        .compact(compact)
        .view();

    let content = column![
        heading,
        Space::new().height(SPACING_XXL),
        view_channels(details, compact),
        Space::new().height(SPACING_XXL),
        container(view_form(portfolio)).center_x(Length::Fill),
    ];

    section_frame(SectionId::Contact, layout, Surface::Plain, content)
}

/// Email, phone and Instagram. Each detail opens through the host.
fn view_channels(details: &ContactDetails, compact: bool) -> Element<'_, Message> {
    let channels = [
        channel(icon_mail(), "Email", &details.email, details.mailto_url()),
        channel(
            icon_phone(),
            "Phone",
            &details.phone_display,
            details.tel_url(),
        ),
        channel(
            icon_instagram(),
            "Instagram",
            &details.instagram_handle,
            details.instagram_url.clone(),
        ),
    ];

    if compact {
        column(channels).spacing(SPACING_XL).width(Length::Fill).into()
    } else {
        row(channels).spacing(SPACING_XL).width(Length::Fill).into()
    }
}

fn channel<'a>(
    icon: Text<'static>,
    title: &'a str,
    detail: &'a str,
    url: String,
) -> Element<'a, Message> {
    let disc = container(icon.size(28))
        .width(64)
        .height(64)
        .center_x(64)
        .center_y(64)
        .style(icon_disc);

    let link = button(text(detail).size(FONT_SIZE_BODY).style(text_muted))
        .on_press(Message::OpenUrl(url))
        .padding(0)
        .style(button_link);

    column![disc, text(title).size(FONT_SIZE_SUBTITLE), link]
        .spacing(SPACING_SM)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
}

/// Name, email, message and the submit button.
///
/// While a submission is pending the inputs are read-only and the button
/// reads "Message Sent!".
fn view_form(portfolio: &PortfolioView) -> Element<'_, Message> {
    let form = portfolio.form();
    let editable = !portfolio.contact().is_submitted();

    let on_change = |field: ContactField| {
        move |value: String| Message::Contact(ContactMessage::FieldChanged(field, value))
    };

    let name = TextField::new(
        &form.name,
        ContactField::Name.placeholder(),
        on_change(ContactField::Name),
    )
    .enabled(editable)
    .view();

    let email = TextField::new(
        &form.email,
        ContactField::Email.placeholder(),
        on_change(ContactField::Email),
    )
    .enabled(editable)
    .view();

    let message = TextAreaField::new(
        &form.message,
        ContactField::Message.placeholder(),
        on_change(ContactField::Message),
    )
    .height(MESSAGE_AREA_HEIGHT)
    .enabled(editable)
    .view();

    let label: Element<'_, Message> = if editable {
        text("Send Message").size(FONT_SIZE_BODY).into()
    } else {
        row![
            icon_check().size(18),
            Space::new().width(SPACING_SM),
            text("Message Sent!").size(FONT_SIZE_BODY),
        ]
        .align_y(Alignment::Center)
        .into()
    };

    let submit = button(container(label).center_x(Length::Fill))
        .on_press(Message::Contact(ContactMessage::Submit))
        .width(Length::Fill)
        .padding([SPACING_MD, SPACING_LG])
        .style(button_primary);

    column![name, email, message, submit]
        .spacing(SPACING_MD)
        .max_width(FORM_WIDTH)
        .width(Length::Fill)
        .into()
}
