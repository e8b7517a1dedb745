//! Opening external resources through the host.
//!
//! Gallery images, the technical document and the contact channels are all
//! plain URLs. The host decides how to render them; this module only reports
//! whether it agreed to launch something.

use crate::error::GuiError;

/// Hand a URL (`https:`, `mailto:`, `tel:`) to the host's default handler.
pub fn open_url(url: &str) -> Result<(), GuiError> {
    tracing::info!(%url, "Opening external link");
    open::that(url).map_err(|e| GuiError::OpenLink {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
