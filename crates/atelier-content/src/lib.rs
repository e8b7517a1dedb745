//! Site content for the Atelier Portfolio.
//!
//! This crate owns the read-only data the portfolio renders: gallery items,
//! the technical document reference, and the static copy for the hero, about
//! and contact sections.
//!
//! # Sources
//!
//! - **Bundled**: a TOML document compiled into the crate ([`SiteContent::bundled`])
//! - **Override**: a TOML file on disk with the same schema ([`SiteContent::load_from_path`])
//!
//! Both paths run the same validation: gallery ids are unique, every category
//! is non-empty, and no item claims the reserved `"All"` label.
//!
//! # Example
//!
//! ```
//! use atelier_content::SiteContent;
//!
//! let content = SiteContent::bundled()?;
//! assert!(content.categories().contains(&"Mangala Malar"));
//! # Ok::<(), atelier_content::ContentError>(())
//! ```

pub mod error;
mod load;
pub mod model;

pub use error::{ContentError, Result};
pub use model::{
    ALL_CATEGORY, Biography, ContactDetails, DocumentReference, GalleryItem, HeroCopy,
    SiteContent,
};
