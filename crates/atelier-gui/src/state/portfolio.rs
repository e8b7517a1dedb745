//! The portfolio page state.
//!
//! [`PortfolioView`] owns every piece of behavioural state on the page: the
//! gallery filter, the compact menu, the contact form and the page layout.
//! Each public mutator reports whether it changed anything. Effective
//! changes bump a revision counter and notify the single render observer.
//! No-ops never notify.

use std::sync::Arc;

use atelier_content::{GalleryItem, SiteContent};

use crate::service::reset_timer::ResetTicket;
use crate::state::contact::{ContactController, ContactField, ContactForm, Submission};
use crate::state::filter::{CategoryFilter, FilterController};
use crate::state::layout::{LayoutMode, PageLayout, SectionAnchors, Viewport};
use crate::state::navigation::Navigator;

// =============================================================================
// RENDER OBSERVER
// =============================================================================

/// Receives the new revision after every effective state change.
pub trait RenderObserver {
    fn state_changed(&mut self, revision: u64);
}

impl<F> RenderObserver for F
where
    F: FnMut(u64),
{
    fn state_changed(&mut self, revision: u64) {
        self(revision);
    }
}

// =============================================================================
// PORTFOLIO VIEW
// =============================================================================

pub struct PortfolioView {
    content: Arc<SiteContent>,
    filter: FilterController,
    navigator: Navigator,
    contact: ContactController,
    layout: PageLayout,
    observer: Option<Box<dyn RenderObserver>>,
    revision: u64,
}

impl std::fmt::Debug for PortfolioView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioView")
            .field("filter", self.filter.selected())
            .field("menu_open", &self.navigator.is_menu_open())
            .field("contact", &self.contact.phase())
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl PortfolioView {
    pub fn new(content: Arc<SiteContent>, viewport: Viewport) -> Self {
        Self::with_contact(content, viewport, ContactController::new())
    }

    /// Build with a preconfigured contact controller.
    pub fn with_contact(
        content: Arc<SiteContent>,
        viewport: Viewport,
        contact: ContactController,
    ) -> Self {
        let filter = FilterController::new(Arc::clone(&content));
        let layout = PageLayout::compute(viewport, filter.visible_count());
        Self {
            content,
            filter,
            navigator: Navigator::new(),
            contact,
            layout,
            observer: None,
            revision: 0,
        }
    }

    /// Install the render observer, replacing any previous one.
    pub fn subscribe(&mut self, observer: impl RenderObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    fn notify(&mut self) {
        self.revision += 1;
        if let Some(observer) = self.observer.as_mut() {
            observer.state_changed(self.revision);
        }
    }

    fn notify_if(&mut self, changed: bool) -> bool {
        if changed {
            self.notify();
        }
        changed
    }

    // =========================================================================
    // READ ACCESS
    // =========================================================================

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        self.filter.selected()
    }

    pub fn visible_items(&self) -> Vec<&GalleryItem> {
        self.filter.visible_items()
    }

    pub fn categories(&self) -> Vec<&str> {
        self.filter.categories()
    }

    pub fn is_menu_open(&self) -> bool {
        self.navigator.is_menu_open()
    }

    pub fn contact(&self) -> &ContactController {
        &self.contact
    }

    pub fn form(&self) -> &ContactForm {
        self.contact.form()
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout.mode()
    }

    pub fn anchors(&self) -> &SectionAnchors {
        self.layout.anchors()
    }

    // =========================================================================
    // GALLERY
    // =========================================================================

    /// Select a gallery category by label. Any label is accepted.
    pub fn select_category(&mut self, category: &str) -> bool {
        let changed = self.filter.select_category(category);
        if changed {
            self.relayout(self.layout.viewport());
        }
        self.notify_if(changed)
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    pub fn toggle_menu(&mut self) {
        self.navigator.toggle_menu();
        self.notify();
    }

    /// Scroll target for a section id. Closes the menu when the id is known.
    pub fn go_to(&mut self, section_id: &str) -> Option<f32> {
        let was_open = self.navigator.is_menu_open();
        let target = self.navigator.go_to(section_id, self.layout.anchors())?;
        self.notify_if(was_open);
        Some(target)
    }

    /// Recompute layout for a new window size.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        let changed = self.relayout(viewport);
        self.notify_if(changed)
    }

    fn relayout(&mut self, viewport: Viewport) -> bool {
        let next = PageLayout::compute(viewport, self.filter.visible_count());
        if next == self.layout {
            return false;
        }
        self.layout = next;
        true
    }

    // =========================================================================
    // CONTACT
    // =========================================================================

    pub fn update_field(&mut self, field: ContactField, value: String) -> bool {
        let changed = self.contact.update_field(field, value);
        self.notify_if(changed)
    }

    pub fn submit(&mut self) -> Option<Submission> {
        let submission = self.contact.submit()?;
        self.notify();
        Some(submission)
    }

    pub fn complete_reset(&mut self, ticket: ResetTicket) -> bool {
        let changed = self.contact.complete_reset(ticket);
        self.notify_if(changed)
    }
}
