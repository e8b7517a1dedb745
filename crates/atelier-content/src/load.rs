//! Loading and validating site content.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{ContentError, Result};
use crate::model::{ALL_CATEGORY, SiteContent};

/// Content compiled into the binary.
const BUNDLED_SITE: &str = include_str!("../content/site.toml");

impl SiteContent {
    /// Parse the content compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_SITE)
    }

    /// Parse and validate a TOML content document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let content: SiteContent =
            toml::from_str(source).map_err(|source| ContentError::Parse { source })?;
        content.validate()?;
        Ok(content)
    }

    /// Read, parse and validate a TOML content file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_toml_str(&source)?;
        tracing::info!(
            path = %path.display(),
            items = content.gallery.len(),
            "Loaded site content"
        );
        Ok(content)
    }

    /// Check gallery invariants: unique ids, usable category labels.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::with_capacity(self.gallery.len());
        for item in &self.gallery {
            if !ids.insert(item.id) {
                return Err(ContentError::DuplicateItemId { id: item.id });
            }
            let category = item.category.trim();
            if category.is_empty() {
                return Err(ContentError::EmptyCategory { id: item.id });
            }
            if category == ALL_CATEGORY {
                return Err(ContentError::ReservedCategory { id: item.id });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"
brand = "Brand"
copyright_holder = "Holder"

[hero]
headline = "H"
tagline = "T"
call_to_action = "Go"

[document]
pdf_url = "https://docs.test/portfolio.pdf"

[about]
heading = "About"

[contact]
intro = "Hi"
email = "a@b.test"
phone = "+100"
phone_display = "+1 00"
instagram_url = "https://instagram.test"
instagram_handle = "@a"
"#;

    fn with_gallery(gallery: &str) -> String {
        format!("{HEADER}\n{gallery}")
    }

    #[test]
    fn test_bundled_parses() {
        let content = SiteContent::bundled().expect("bundled content is valid");
        assert_eq!(content.gallery.len(), 5);
        assert_eq!(content.brand, "LOGITHA VARSHINI RAMESH");
    }

    #[test]
    fn test_optional_fields_default() {
        let content = SiteContent::from_toml_str(&with_gallery(
            "[[gallery]]\nid = 1\ncategory = \"Silk\"\nimage = \"https://img.test/1\"\n",
        ))
        .unwrap();
        assert_eq!(content.gallery[0].title, "");
        assert_eq!(content.gallery[0].description, "");
        assert_eq!(content.document.title, "");
        assert!(content.about.paragraphs.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let doc = with_gallery(
            r#"
[[gallery]]
id = 1
category = "Silk"
image = "https://img.test/1"

[[gallery]]
id = 1
category = "Linen"
image = "https://img.test/2"
"#,
        );
        let err = SiteContent::from_toml_str(&doc).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateItemId { id: 1 }));
    }

    #[test]
    fn test_blank_category_rejected() {
        let doc = with_gallery(
            "[[gallery]]\nid = 4\ncategory = \"   \"\nimage = \"https://img.test/4\"\n",
        );
        let err = SiteContent::from_toml_str(&doc).unwrap_err();
        assert!(matches!(err, ContentError::EmptyCategory { id: 4 }));
    }

    #[test]
    fn test_reserved_category_rejected() {
        let doc = with_gallery(
            "[[gallery]]\nid = 9\ncategory = \"All\"\nimage = \"https://img.test/9\"\n",
        );
        let err = SiteContent::from_toml_str(&doc).unwrap_err();
        assert!(matches!(err, ContentError::ReservedCategory { id: 9 }));
        assert!(err.user_message().contains("\"All\""));
    }

    #[test]
    fn test_document_as_list_is_a_parse_error() {
        let doc = HEADER.replace(
            "[document]\npdf_url = \"https://docs.test/portfolio.pdf\"",
            "[[document]]\npdf_url = \"https://docs.test/portfolio.pdf\"",
        );
        let err = SiteContent::from_toml_str(&doc).unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SiteContent::load_from_path(Path::new("/nonexistent/atelier/site.toml"))
            .unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
        assert!(err.user_message().contains("/nonexistent/atelier/site.toml"));
    }
}
