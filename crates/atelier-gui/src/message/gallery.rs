//! Gallery messages.

#[derive(Debug, Clone)]
pub enum GalleryMessage {
    /// A filter chip was pressed. Carries the chip label.
    SelectCategory(String),
    /// Open the artwork of a gallery item.
    OpenItem(u32),
}
