//! Contact form text fields.
//!
//! Inputs that can be frozen while a submission is pending.

use iced::widget::text_input;
use iced::{Element, Length};

use crate::theme::text_input_default;
use crate::theme::typography::FONT_SIZE_BODY;

// =============================================================================
// TEXT FIELD
// =============================================================================

/// A single-line text input.
///
/// # Example
/// ```ignore
/// TextField::new(&form.name, "Your Name", |s| ContactMessage::FieldChanged(ContactField::Name, s))
///     .enabled(!submitted)
///     .view()
/// ```
pub struct TextField<'a, M> {
    value: &'a str,
    placeholder: &'a str,
    on_change: Box<dyn Fn(String) -> M + 'a>,
    enabled: bool,
}

impl<'a, M: Clone + 'a> TextField<'a, M> {
    /// Create a new text field.
    pub fn new(
        value: &'a str,
        placeholder: &'a str,
        on_change: impl Fn(String) -> M + 'a,
    ) -> Self {
        Self {
            value,
            placeholder,
            on_change: Box::new(on_change),
            enabled: true,
        }
    }

    /// Accept input. Disabled fields still show their value.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Build the text field element.
    pub fn view(self) -> Element<'a, M> {
        let mut input = text_input(self.placeholder, self.value)
            .padding([12.0, 16.0])
            .size(FONT_SIZE_BODY)
            .width(Length::Fill)
            .style(text_input_default);
        if self.enabled {
            input = input.on_input(self.on_change);
        }
        input.into()
    }
}

// =============================================================================
// TEXTAREA FIELD (for longer text)
// =============================================================================

/// A taller text input for the message body.
///
/// Note: this uses text_input with extra vertical padding rather than a
/// multi-line editor, so the value stays a plain `String`.
pub struct TextAreaField<'a, M> {
    value: &'a str,
    placeholder: &'a str,
    on_change: Box<dyn Fn(String) -> M + 'a>,
    height: f32,
    enabled: bool,
}

impl<'a, M: Clone + 'a> TextAreaField<'a, M> {
    /// Create a new text area field.
    pub fn new(
        value: &'a str,
        placeholder: &'a str,
        on_change: impl Fn(String) -> M + 'a,
    ) -> Self {
        Self {
            value,
            placeholder,
            on_change: Box::new(on_change),
            height: 120.0,
            enabled: true,
        }
    }

    /// Set the field height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Accept input. Disabled fields still show their value.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Build the text area element.
    pub fn view(self) -> Element<'a, M> {
        // Pad the single line to the requested height.
        let vertical = ((self.height - FONT_SIZE_BODY * 1.3) / 2.0).max(12.0);
        let mut input = text_input(self.placeholder, self.value)
            .padding([vertical, 16.0])
            .size(FONT_SIZE_BODY)
            .width(Length::Fill)
            .style(text_input_default);
        if self.enabled {
            input = input.on_input(self.on_change);
        }
        input.into()
    }
}
