//! Contact form messages.

use crate::service::ResetTicket;
use crate::state::ContactField;

#[derive(Debug, Clone)]
pub enum ContactMessage {
    /// A form input changed.
    FieldChanged(ContactField, String),
    /// The submit button was pressed.
    Submit,
    /// The reset timer for this ticket fired.
    ResetElapsed(ResetTicket),
}
