//! GUI-specific error types.
//!
//! Nothing on the page is fatal. Every error here ends up in the dismissible
//! notice banner above the page, and the portfolio keeps working.

use thiserror::Error;

/// GUI-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    // =========================================================================
    // CONTENT
    // =========================================================================
    /// The configured content file could not be used. Bundled content is shown instead.
    #[error("Failed to load site content: {reason}")]
    ContentLoad {
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // EXTERNAL LINKS
    // =========================================================================
    /// The host refused to open a link.
    #[error("Could not open {url}: {reason}")]
    OpenLink {
        /// The link that was requested.
        url: String,
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // SETTINGS
    // =========================================================================
    /// Failed to save settings.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ContentLoad { .. } => {
                Some("Check the content path in settings.toml. Showing built-in content.")
            }
            Self::OpenLink { .. } => Some("Make sure a browser or mail client is installed."),
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
        }
    }

    /// Get the error category for display purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ContentLoad { .. } => ErrorCategory::Content,
            Self::OpenLink { .. } => ErrorCategory::Link,
            Self::SettingsSave { .. } => ErrorCategory::Settings,
        }
    }

    // =========================================================================
    // FACTORY METHODS
    // =========================================================================

    /// Create a content load error from any error source.
    pub fn content_load(err: impl std::fmt::Display) -> Self {
        Self::ContentLoad {
            reason: err.to_string(),
        }
    }

    /// Create a settings save error.
    pub fn settings_save(err: impl std::fmt::Display) -> Self {
        Self::SettingsSave {
            reason: err.to_string(),
        }
    }
}

/// Error category for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Site content errors.
    Content,
    /// External link errors.
    Link,
    /// Settings errors.
    Settings,
}

impl ErrorCategory {
    /// Get a human-readable label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Content => "Content",
            Self::Link => "Link",
            Self::Settings => "Settings",
        }
    }
}

/// Convert from content loading errors.
impl From<atelier_content::ContentError> for GuiError {
    fn from(err: atelier_content::ContentError) -> Self {
        Self::ContentLoad {
            reason: err.user_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_conversion() {
        let err: GuiError = atelier_content::ContentError::DuplicateItemId { id: 3 }.into();
        assert_eq!(err.category(), ErrorCategory::Content);
        assert_eq!(
            err.to_string(),
            "Failed to load site content: Gallery item id 3 appears more than once"
        );
    }

    #[test]
    fn test_open_link_message() {
        let err = GuiError::OpenLink {
            url: "tel:+1234567890".to_string(),
            reason: "no handler".to_string(),
        };
        assert_eq!(err.to_string(), "Could not open tel:+1234567890: no handler");
        assert_eq!(err.category().label(), "Link");
        assert!(err.suggestion().is_some());
    }
}
