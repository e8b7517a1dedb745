//! Navigation bar and page scroll messages.

use crate::state::SectionId;

#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// Open or close the compact menu.
    ToggleMenu,
    /// Scroll to a section.
    GoTo(SectionId),
    /// The page scrollable moved (absolute y offset).
    Scrolled(f32),
}
