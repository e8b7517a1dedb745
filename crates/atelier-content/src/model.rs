//! Site content records.
//!
//! Everything here is read-only once loaded. The GUI holds a single
//! [`SiteContent`] behind an `Arc` for the lifetime of the window.

use serde::{Deserialize, Serialize};

/// Label of the unfiltered gallery view. Never a real category.
pub const ALL_CATEGORY: &str = "All";

// =============================================================================
// GALLERY
// =============================================================================

/// One entry of the design gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Unique within the gallery.
    pub id: u32,
    /// Display title. May be empty.
    #[serde(default)]
    pub title: String,
    /// Collection the item belongs to. Drives filtering.
    pub category: String,
    /// Image URL, rendered or opened by the host.
    pub image: String,
    /// Short caption.
    #[serde(default)]
    pub description: String,
}

impl GalleryItem {
    /// Heading shown on the card: the title, or the category when untitled.
    pub fn heading(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.category
        } else {
            &self.title
        }
    }
}

// =============================================================================
// TECHNICAL DOCUMENT
// =============================================================================

/// The single technical portfolio document linked from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReference {
    #[serde(default)]
    pub title: String,
    pub pdf_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_image: String,
}

// =============================================================================
// STATIC COPY
// =============================================================================

/// Hero banner copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub headline: String,
    pub tagline: String,
    pub call_to_action: String,
}

/// Biography section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Biography {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    /// Portrait image URL.
    #[serde(default)]
    pub portrait: String,
}

/// Contact channels shown above the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub intro: String,
    pub email: String,
    /// Dialable number, used for the `tel:` link.
    pub phone: String,
    /// Number as printed on the page.
    pub phone_display: String,
    pub instagram_url: String,
    pub instagram_handle: String,
}

impl ContactDetails {
    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel_url(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

// =============================================================================
// SITE CONTENT
// =============================================================================

/// All content the portfolio renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Name shown in the navigation bar.
    pub brand: String,
    /// Name used in the footer copyright line.
    pub copyright_holder: String,
    pub hero: HeroCopy,
    /// Gallery items in display order.
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    pub document: DocumentReference,
    pub about: Biography,
    pub contact: ContactDetails,
}

impl SiteContent {
    /// Unique gallery categories in first-seen order, without the "All" label.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.gallery {
            if !seen.contains(&item.category.as_str()) {
                seen.push(&item.category);
            }
        }
        seen
    }

    /// Look up a gallery item by id.
    pub fn item(&self, id: u32) -> Option<&GalleryItem> {
        self.gallery.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, category: &str) -> GalleryItem {
        GalleryItem {
            id,
            title: String::new(),
            category: category.to_string(),
            image: format!("https://img.test/{id}.jpg"),
            description: String::new(),
        }
    }

    fn content(gallery: Vec<GalleryItem>) -> SiteContent {
        SiteContent {
            brand: "Brand".to_string(),
            copyright_holder: "Holder".to_string(),
            hero: HeroCopy::default(),
            gallery,
            document: DocumentReference::default(),
            about: Biography::default(),
            contact: ContactDetails::default(),
        }
    }

    #[test]
    fn test_categories_first_seen_order() {
        let site = content(vec![
            item(1, "Silk"),
            item(2, "Linen"),
            item(3, "Silk"),
            item(4, "Cotton"),
        ]);
        assert_eq!(site.categories(), vec!["Silk", "Linen", "Cotton"]);
    }

    #[test]
    fn test_categories_empty_gallery() {
        assert!(content(Vec::new()).categories().is_empty());
    }

    #[test]
    fn test_heading_falls_back_to_category() {
        let mut untitled = item(1, "Thari");
        assert_eq!(untitled.heading(), "Thari");
        untitled.title = "Evening Drape".to_string();
        assert_eq!(untitled.heading(), "Evening Drape");
    }

    #[test]
    fn test_contact_urls() {
        let details = ContactDetails {
            email: "info@designer.com".to_string(),
            phone: "+1234567890".to_string(),
            ..Default::default()
        };
        assert_eq!(details.mailto_url(), "mailto:info@designer.com");
        assert_eq!(details.tel_url(), "tel:+1234567890");
    }

    #[test]
    fn test_item_lookup() {
        let site = content(vec![item(7, "Silk")]);
        assert_eq!(site.item(7).map(|i| i.id), Some(7));
        assert!(site.item(8).is_none());
    }
}
