//! Gallery category filter.

use std::sync::Arc;

use atelier_content::{ALL_CATEGORY, GalleryItem, SiteContent};

/// Currently selected gallery filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No restriction.
    #[default]
    All,
    /// Only items whose category equals this label.
    Category(String),
}

impl CategoryFilter {
    /// Parse a filter bar label. `"All"` maps to the unrestricted filter.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORY {
            Self::All
        } else {
            Self::Category(label.to_string())
        }
    }

    /// Label as shown on the filter bar.
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORY,
            Self::Category(category) => category,
        }
    }

    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => item.category == *category,
        }
    }
}

/// Owns the selected filter and answers which gallery items are visible.
#[derive(Debug, Clone)]
pub struct FilterController {
    content: Arc<SiteContent>,
    selected: CategoryFilter,
}

impl FilterController {
    pub fn new(content: Arc<SiteContent>) -> Self {
        Self {
            content,
            selected: CategoryFilter::All,
        }
    }

    pub fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    /// Select a category by label. Any label is stored as given.
    ///
    /// Returns `true` when the selection changed.
    pub fn select_category(&mut self, category: &str) -> bool {
        let next = CategoryFilter::from_label(category);
        if next == self.selected {
            return false;
        }
        tracing::debug!(from = self.selected.label(), to = next.label(), "Filter changed");
        self.selected = next;
        true
    }

    /// Items matching the current filter, in gallery order.
    pub fn visible_items(&self) -> Vec<&GalleryItem> {
        self.content
            .gallery
            .iter()
            .filter(|item| self.selected.matches(item))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.content
            .gallery
            .iter()
            .filter(|item| self.selected.matches(item))
            .count()
    }

    /// Filter bar labels: `"All"` followed by each category in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORY)
            .chain(self.content.categories())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_content::{Biography, ContactDetails, DocumentReference, HeroCopy};
    use proptest::prelude::*;

    fn item(id: u32, category: &str) -> GalleryItem {
        GalleryItem {
            id,
            title: String::new(),
            category: category.to_string(),
            image: format!("https://img.test/{id}.jpg"),
            description: String::new(),
        }
    }

    fn content(gallery: Vec<GalleryItem>) -> Arc<SiteContent> {
        Arc::new(SiteContent {
            brand: "Brand".to_string(),
            copyright_holder: "Holder".to_string(),
            hero: HeroCopy::default(),
            gallery,
            document: DocumentReference::default(),
            about: Biography::default(),
            contact: ContactDetails::default(),
        })
    }

    fn ids(items: &[&GalleryItem]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_initial_filter_is_all() {
        let filter = FilterController::new(content(vec![item(1, "A"), item(2, "B")]));
        assert_eq!(filter.selected(), &CategoryFilter::All);
        assert_eq!(ids(&filter.visible_items()), vec![1, 2]);
    }

    #[test]
    fn test_select_category_keeps_order() {
        let mut filter = FilterController::new(content(vec![
            item(1, "A"),
            item(2, "B"),
            item(3, "A"),
            item(4, "C"),
            item(5, "A"),
        ]));
        assert!(filter.select_category("A"));
        assert_eq!(ids(&filter.visible_items()), vec![1, 3, 5]);
    }

    #[test]
    fn test_select_all_restores_everything() {
        let mut filter = FilterController::new(content(vec![item(1, "A"), item(2, "B")]));
        filter.select_category("B");
        assert!(filter.select_category("All"));
        assert_eq!(filter.selected(), &CategoryFilter::All);
        assert_eq!(ids(&filter.visible_items()), vec![1, 2]);
    }

    #[test]
    fn test_unknown_category_is_stored_verbatim() {
        let mut filter = FilterController::new(content(vec![item(1, "A")]));
        assert!(filter.select_category("Nonexistent"));
        assert_eq!(
            filter.selected(),
            &CategoryFilter::Category("Nonexistent".to_string())
        );
        assert!(filter.visible_items().is_empty());
        assert_eq!(filter.visible_count(), 0);
    }

    #[test]
    fn test_reselecting_is_not_a_change() {
        let mut filter = FilterController::new(content(vec![item(1, "A")]));
        assert!(!filter.select_category("All"));
        assert!(filter.select_category("A"));
        assert!(!filter.select_category("A"));
    }

    #[test]
    fn test_categories_prepends_all() {
        let filter = FilterController::new(content(vec![
            item(1, "B"),
            item(2, "A"),
            item(3, "B"),
        ]));
        assert_eq!(filter.categories(), vec!["All", "B", "A"]);
    }

    proptest! {
        #[test]
        fn filtering_matches_category_exactly(
            picks in prop::collection::vec(0usize..5, 1..30),
            choice in 0usize..5,
        ) {
            let labels = ["A", "B", "C", "D", "E"];
            let gallery: Vec<GalleryItem> = picks
                .iter()
                .enumerate()
                .map(|(i, &pick)| item(i as u32, labels[pick]))
                .collect();
            let expected: Vec<u32> = gallery
                .iter()
                .filter(|it| it.category == labels[choice])
                .map(|it| it.id)
                .collect();

            let mut filter = FilterController::new(content(gallery));
            filter.select_category(labels[choice]);
            prop_assert_eq!(ids(&filter.visible_items()), expected);

            filter.select_category("All");
            let all: Vec<u32> = (0..picks.len() as u32).collect();
            prop_assert_eq!(ids(&filter.visible_items()), all);
        }
    }
}
