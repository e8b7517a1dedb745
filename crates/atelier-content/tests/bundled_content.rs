//! Tests for the bundled site content and file overrides.

use std::io::Write;

use atelier_content::{ContentError, SiteContent};
use proptest::prelude::*;

#[test]
fn test_bundled_gallery_order() {
    let content = SiteContent::bundled().unwrap();
    let ids: Vec<u32> = content.gallery.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_bundled_categories() {
    let content = SiteContent::bundled().unwrap();
    insta::assert_debug_snapshot!(content.categories(), @r#"
    [
        "Mangala Malar",
        "Handcrafted Narratives",
        "Theera Kadhal",
        "Thari",
        "JADE",
    ]
    "#);
}

#[test]
fn test_bundled_document_is_a_record() {
    let content = SiteContent::bundled().unwrap();
    assert!(content.document.pdf_url.starts_with("https://drive.google.com/"));
    assert_eq!(
        content.document.description,
        "View my complete technical work and projects"
    );
}

#[test]
fn test_bundled_contact_channels() {
    let content = SiteContent::bundled().unwrap();
    assert_eq!(content.contact.mailto_url(), "mailto:info@designer.com");
    assert_eq!(content.contact.tel_url(), "tel:+1234567890");
    assert_eq!(content.contact.instagram_handle, "@designername");
}

#[test]
fn test_override_file_round_trip() {
    let mut content = SiteContent::bundled().unwrap();
    content.brand = "STUDIO OVERRIDE".to_string();
    content.gallery.truncate(2);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(toml::to_string_pretty(&content).unwrap().as_bytes())
        .unwrap();

    let loaded = SiteContent::load_from_path(file.path()).unwrap();
    assert_eq!(loaded, content);
}

#[test]
fn test_override_file_with_invalid_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"brand = [unterminated").unwrap();

    let err = SiteContent::load_from_path(file.path()).unwrap_err();
    assert!(matches!(err, ContentError::Parse { .. }));
}

proptest! {
    #[test]
    fn categories_are_unique_and_first_seen(picks in prop::collection::vec(0usize..4, 0..24)) {
        let labels = ["Silk", "Linen", "Cotton", "Wool"];
        let mut content = SiteContent::bundled().unwrap();
        content.gallery = picks
            .iter()
            .enumerate()
            .map(|(i, &pick)| atelier_content::GalleryItem {
                id: i as u32,
                title: String::new(),
                category: labels[pick].to_string(),
                image: format!("https://img.test/{i}"),
                description: String::new(),
            })
            .collect();

        let categories = content.categories();

        let mut expected: Vec<&str> = Vec::new();
        for &pick in &picks {
            if !expected.contains(&labels[pick]) {
                expected.push(labels[pick]);
            }
        }
        prop_assert_eq!(categories, expected);
    }
}
