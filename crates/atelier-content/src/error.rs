//! Content loading error types.
//!
//! Loading reports structured errors with a short user-facing message so the
//! GUI can fall back to bundled content and explain why.

use std::path::PathBuf;
use thiserror::Error;

/// Content loading or validation error.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file could not be read.
    #[error("Failed to read content file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content document is not valid TOML or does not match the schema.
    #[error("Failed to parse site content")]
    Parse {
        #[source]
        source: toml::de::Error,
    },

    /// Two gallery items share the same id.
    #[error("Duplicate gallery item id: {id}")]
    DuplicateItemId { id: u32 },

    /// A gallery item has a blank category.
    #[error("Gallery item {id} has an empty category")]
    EmptyCategory { id: u32 },

    /// A gallery item uses the label reserved for the unfiltered view.
    #[error("Gallery item {id} uses the reserved category \"All\"")]
    ReservedCategory { id: u32 },
}

impl ContentError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io { path, .. } => {
                format!("Could not read the content file at {}", path.display())
            }
            Self::Parse { source } => {
                format!("The content file is malformed: {source}")
            }
            Self::DuplicateItemId { id } => {
                format!("Gallery item id {id} appears more than once")
            }
            Self::EmptyCategory { id } => {
                format!("Gallery item {id} needs a category")
            }
            Self::ReservedCategory { id } => {
                format!("Gallery item {id} cannot use the category \"All\"")
            }
        }
    }
}

/// Result type for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;
