//! Root application state.

use std::sync::Arc;

use atelier_content::SiteContent;

use crate::error::GuiError;
use crate::state::layout::Viewport;
use crate::state::portfolio::PortfolioView;
use crate::state::scroll::ScrollState;
use crate::state::settings::Settings;

/// All state owned by the running application.
#[derive(Debug)]
pub struct AppState {
    /// Page behaviour: filter, menu, contact form, layout.
    pub portfolio: PortfolioView,

    /// Page scroll position and animation.
    pub scroll: ScrollState,

    /// Persisted preferences.
    pub settings: Settings,

    /// Whether the OS reports a dark appearance.
    pub system_is_dark: bool,

    /// Error shown in the notice banner until dismissed.
    pub notice: Option<GuiError>,
}

impl AppState {
    /// Build state from settings, resolving the content source.
    ///
    /// A content override that fails to load falls back to the bundled
    /// content and leaves a notice.
    pub fn with_settings(settings: Settings, viewport: Viewport) -> Self {
        let (content, notice) = resolve_content(&settings);
        Self {
            portfolio: PortfolioView::new(Arc::new(content), viewport),
            scroll: ScrollState::default(),
            settings,
            system_is_dark: false,
            notice,
        }
    }

    /// Build state around already loaded content.
    pub fn with_content(content: Arc<SiteContent>, viewport: Viewport) -> Self {
        Self {
            portfolio: PortfolioView::new(content, viewport),
            scroll: ScrollState::default(),
            settings: Settings::default(),
            system_is_dark: false,
            notice: None,
        }
    }
}

fn resolve_content(settings: &Settings) -> (SiteContent, Option<GuiError>) {
    let override_result = settings
        .content
        .path
        .as_deref()
        .map(SiteContent::load_from_path);

    match override_result {
        Some(Ok(content)) => (content, None),
        Some(Err(e)) => {
            tracing::warn!("Falling back to bundled content: {e}");
            (bundled_or_empty(), Some(GuiError::from(e)))
        }
        None => (bundled_or_empty(), None),
    }
}

fn bundled_or_empty() -> SiteContent {
    SiteContent::bundled().unwrap_or_else(|e| {
        tracing::error!("Bundled content is invalid: {e}");
        SiteContent {
            brand: crate::constants::APP_NAME.to_string(),
            copyright_holder: String::new(),
            hero: Default::default(),
            gallery: Vec::new(),
            document: Default::default(),
            about: Default::default(),
            contact: Default::default(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_settings_use_bundled_content() {
        let state = AppState::with_settings(Settings::default(), Viewport::default());
        assert!(state.notice.is_none());
        assert_eq!(state.portfolio.visible_items().len(), 5);
    }

    #[test]
    fn test_broken_override_falls_back_with_notice() {
        let mut settings = Settings::default();
        settings.content.path = Some(PathBuf::from("/nonexistent/atelier/site.toml"));

        let state = AppState::with_settings(settings, Viewport::default());
        assert!(matches!(state.notice, Some(GuiError::ContentLoad { .. })));
        assert_eq!(state.portfolio.visible_items().len(), 5);
    }
}
