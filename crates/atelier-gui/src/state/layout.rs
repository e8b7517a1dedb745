//! Responsive page layout and section anchors.
//!
//! The page is one vertical scrollable. Every section is given an explicit
//! height here, so the offset of each section is known without measuring
//! widgets. The views use the same numbers to size their containers.

use crate::state::navigation::SectionId;
use crate::theme::spacing::{
    CARD_GAP, CONTENT_MAX_WIDTH, NAV_HEIGHT, SECTION_PADDING_X, SECTION_PADDING_Y,
};

/// Width below which the compact (single column, menu button) layout is used.
pub const BREAKPOINT_MEDIUM: f32 = 768.0;

/// Width from which the three column gallery is used.
pub const BREAKPOINT_LARGE: f32 = 1024.0;

/// Gallery card aspect ratio, height over width.
pub const CARD_ASPECT: f32 = 5.0 / 4.0;

/// Height of the gallery heading block.
const GALLERY_HEADING_HEIGHT: f32 = 96.0;

/// Smallest hero height, for very short windows.
const HERO_MIN_HEIGHT: f32 = 420.0;

/// Footer height.
pub const FOOTER_HEIGHT: f32 = 96.0;

// =============================================================================
// VIEWPORT
// =============================================================================

/// Window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Height available to the page scrollable below the navigation bar.
    pub fn scroll_height(&self) -> f32 {
        (self.height - NAV_HEIGHT).max(0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

// =============================================================================
// LAYOUT MODE
// =============================================================================

/// Responsive layout bucket derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Narrow window: menu button, one gallery column, stacked sections.
    Compact,
    /// Medium window: inline links, two gallery columns.
    Regular,
    /// Wide window: inline links, three gallery columns.
    Wide,
}

impl LayoutMode {
    pub fn for_width(width: f32) -> Self {
        if width < BREAKPOINT_MEDIUM {
            Self::Compact
        } else if width < BREAKPOINT_LARGE {
            Self::Regular
        } else {
            Self::Wide
        }
    }

    pub fn gallery_columns(self) -> usize {
        match self {
            Self::Compact => 1,
            Self::Regular => 2,
            Self::Wide => 3,
        }
    }

    pub fn is_compact(self) -> bool {
        self == Self::Compact
    }

    fn filter_bar_height(self) -> f32 {
        match self {
            Self::Compact => 136.0,
            Self::Regular => 96.0,
            Self::Wide => 72.0,
        }
    }

    fn document_height(self) -> f32 {
        match self {
            Self::Compact => 860.0,
            Self::Regular | Self::Wide => 900.0,
        }
    }

    fn about_height(self) -> f32 {
        match self {
            Self::Compact => 1120.0,
            Self::Regular => 760.0,
            Self::Wide => 680.0,
        }
    }

    fn contact_height(self) -> f32 {
        match self {
            Self::Compact => 1220.0,
            Self::Regular | Self::Wide => 920.0,
        }
    }
}

// =============================================================================
// SECTION ANCHORS
// =============================================================================

/// Start offset of each section within the page scrollable.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionAnchors {
    entries: Vec<(SectionId, f32)>,
    max_offset: f32,
}

impl SectionAnchors {
    /// Scroll target for a section id, clamped to the scrollable range.
    ///
    /// Returns `None` for ids that name no section.
    pub fn offset_of(&self, id: &str) -> Option<f32> {
        let section = SectionId::from_id(id)?;
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == section)
            .map(|(_, offset)| offset.min(self.max_offset))
    }

    /// Unclamped start offsets in page order.
    pub fn entries(&self) -> &[(SectionId, f32)] {
        &self.entries
    }

    /// Largest reachable scroll offset.
    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }
}

// =============================================================================
// PAGE LAYOUT
// =============================================================================

/// Section heights and anchors for one viewport and gallery size.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    viewport: Viewport,
    mode: LayoutMode,
    card_width: f32,
    hero: f32,
    gallery: f32,
    document: f32,
    about: f32,
    contact: f32,
    anchors: SectionAnchors,
}

impl PageLayout {
    pub fn compute(viewport: Viewport, visible_items: usize) -> Self {
        let mode = LayoutMode::for_width(viewport.width);
        let columns = mode.gallery_columns();

        let content_width =
            (viewport.width.min(CONTENT_MAX_WIDTH) - 2.0 * SECTION_PADDING_X).max(0.0);
        let card_width =
            ((content_width - (columns - 1) as f32 * CARD_GAP) / columns as f32).max(0.0);
        let card_height = card_width * CARD_ASPECT;

        let rows = visible_items.div_ceil(columns);
        let grid_height = if rows == 0 {
            card_height.min(GALLERY_HEADING_HEIGHT)
        } else {
            rows as f32 * card_height + (rows - 1) as f32 * CARD_GAP
        };

        let hero = viewport.scroll_height().max(HERO_MIN_HEIGHT);
        let gallery = 2.0 * SECTION_PADDING_Y
            + GALLERY_HEADING_HEIGHT
            + mode.filter_bar_height()
            + grid_height;
        let document = mode.document_height();
        let about = mode.about_height();
        let contact = mode.contact_height();

        let heights = [
            (SectionId::Home, hero),
            (SectionId::Designs, gallery),
            (SectionId::Technical, document),
            (SectionId::About, about),
            (SectionId::Contact, contact),
        ];

        let mut entries = Vec::with_capacity(heights.len());
        let mut offset = 0.0;
        for (section, height) in heights {
            entries.push((section, offset));
            offset += height;
        }
        let total = offset + FOOTER_HEIGHT;
        let max_offset = (total - viewport.scroll_height()).max(0.0);

        Self {
            viewport,
            mode,
            card_width,
            hero,
            gallery,
            document,
            about,
            contact,
            anchors: SectionAnchors {
                entries,
                max_offset,
            },
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn anchors(&self) -> &SectionAnchors {
        &self.anchors
    }

    pub fn card_width(&self) -> f32 {
        self.card_width
    }

    pub fn card_height(&self) -> f32 {
        self.card_width * CARD_ASPECT
    }

    /// Fixed height of a section container.
    pub fn section_height(&self, section: SectionId) -> f32 {
        match section {
            SectionId::Home => self.hero,
            SectionId::Designs => self.gallery,
            SectionId::Technical => self.document,
            SectionId::About => self.about,
            SectionId::Contact => self.contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_breakpoints() {
        assert_eq!(LayoutMode::for_width(375.0), LayoutMode::Compact);
        assert_eq!(LayoutMode::for_width(767.9), LayoutMode::Compact);
        assert_eq!(LayoutMode::for_width(768.0), LayoutMode::Regular);
        assert_eq!(LayoutMode::for_width(1023.0), LayoutMode::Regular);
        assert_eq!(LayoutMode::for_width(1024.0), LayoutMode::Wide);
    }

    #[test]
    fn test_gallery_columns() {
        assert_eq!(LayoutMode::Compact.gallery_columns(), 1);
        assert_eq!(LayoutMode::Regular.gallery_columns(), 2);
        assert_eq!(LayoutMode::Wide.gallery_columns(), 3);
    }

    #[test]
    fn test_anchors_start_at_zero_and_increase() {
        let layout = PageLayout::compute(Viewport::default(), 5);
        let entries = layout.anchors().entries();
        assert_eq!(entries[0], (SectionId::Home, 0.0));
        for pair in entries.windows(2) {
            assert!(pair[1].1 > pair[0].1, "{pair:?}");
        }
        let order: Vec<SectionId> = entries.iter().map(|(id, _)| *id).collect();
        assert_eq!(order, SectionId::ALL.to_vec());
    }

    #[test]
    fn test_gallery_grows_with_rows() {
        let viewport = Viewport::default();
        let three = PageLayout::compute(viewport, 3);
        let four = PageLayout::compute(viewport, 4);
        let one = PageLayout::compute(viewport, 1);
        assert_eq!(
            one.section_height(SectionId::Designs),
            three.section_height(SectionId::Designs)
        );
        assert!(four.section_height(SectionId::Designs) > three.section_height(SectionId::Designs));
        assert!(
            four.anchors().offset_of("about").unwrap() > three.anchors().offset_of("about").unwrap()
        );
    }

    #[test]
    fn test_hero_fills_scroll_viewport() {
        let layout = PageLayout::compute(Viewport::new(1280.0, 900.0), 5);
        assert_eq!(layout.section_height(SectionId::Home), 900.0 - NAV_HEIGHT);
        assert_eq!(layout.anchors().offset_of("dportfolio"), Some(900.0 - NAV_HEIGHT));
    }

    #[test]
    fn test_unknown_anchor() {
        let layout = PageLayout::compute(Viewport::default(), 5);
        assert_eq!(layout.anchors().offset_of("pricing"), None);
        assert_eq!(layout.anchors().offset_of(""), None);
    }

    #[test]
    fn test_target_clamped_to_scroll_range() {
        // Very tall window: the last sections cannot scroll to the top.
        let layout = PageLayout::compute(Viewport::new(1280.0, 4000.0), 0);
        let anchors = layout.anchors();
        let contact = anchors.offset_of("contact").unwrap();
        assert!(contact <= anchors.max_offset());
        let raw = anchors
            .entries()
            .iter()
            .find(|(id, _)| *id == SectionId::Contact)
            .map(|(_, offset)| *offset)
            .unwrap();
        assert!(raw > anchors.max_offset());
    }

    #[test]
    fn test_card_aspect() {
        let layout = PageLayout::compute(Viewport::new(1100.0, 800.0), 5);
        assert_eq!(layout.mode(), LayoutMode::Wide);
        assert!((layout.card_height() / layout.card_width() - 1.25).abs() < 1e-4);
    }
}
