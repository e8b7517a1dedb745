//! In-page navigation: section ids and the compact menu.

use crate::state::layout::SectionAnchors;

/// Named, scrollable region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Designs,
    Technical,
    About,
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Designs,
        Self::Technical,
        Self::About,
        Self::Contact,
    ];

    /// Anchor id used for navigation lookups.
    pub fn as_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Designs => "dportfolio",
            Self::Technical => "tportfolio",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.as_id() == id)
    }

    /// Link text in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Designs => "Design Portfolio",
            Self::Technical => "Technical Portfolio",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_id())
    }
}

/// Compact menu state plus section lookup.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    menu_open: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Flip the compact menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Resolve a section id to its scroll target.
    ///
    /// A known id always closes the menu, whatever its previous state. An
    /// unknown id changes nothing and returns `None`.
    pub fn go_to(&mut self, id: &str, anchors: &SectionAnchors) -> Option<f32> {
        let Some(target) = anchors.offset_of(id) else {
            tracing::debug!(%id, "Ignoring navigation to unknown section");
            return None;
        };
        self.menu_open = false;
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::layout::{PageLayout, Viewport};

    fn anchors() -> SectionAnchors {
        PageLayout::compute(Viewport::default(), 5).anchors().clone()
    }

    #[test]
    fn test_section_id_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_id(section.as_id()), Some(section));
        }
        assert_eq!(SectionId::from_id("Home"), None);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut nav = Navigator::new();
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.toggle_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_go_to_closes_open_menu() {
        let mut nav = Navigator::new();
        nav.toggle_menu();
        assert_eq!(nav.go_to("home", &anchors()), Some(0.0));
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_go_to_with_closed_menu_keeps_it_closed() {
        let mut nav = Navigator::new();
        assert!(nav.go_to("contact", &anchors()).is_some());
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_go_to_unknown_section_is_noop() {
        let mut nav = Navigator::new();
        nav.toggle_menu();
        assert_eq!(nav.go_to("gallery", &anchors()), None);
        assert!(nav.is_menu_open());
    }
}
