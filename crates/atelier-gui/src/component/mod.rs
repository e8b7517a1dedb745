//! Reusable UI components for the portfolio page.
//!
//! - **Form**: `TextField`, `TextAreaField`
//! - **Headings**: `SectionHeading`
//! - **Icons**: thin wrappers over `iced_fonts::lucide` (see <https://lucide.dev/icons/>)
//!
//! Components use the builder pattern and return `Element<M>`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use atelier_gui::component::{SectionHeading, TextField};
//!
//! let heading = SectionHeading::new("Get in Touch").view();
//! let name = TextField::new(&form.name, "Your Name", on_name).view();
//! ```

pub mod icon;
mod section_heading;
mod text_field;

pub use section_heading::SectionHeading;
pub use text_field::{TextAreaField, TextField};
