//! Application state management.
//!
//! - **AppState**: Root state held by the iced application
//! - **PortfolioView**: Filter, menu, contact form and layout behind one observer
//! - **Settings**: Persisted preferences

mod app_state;
pub mod contact;
pub mod filter;
pub mod layout;
pub mod navigation;
pub mod portfolio;
pub mod scroll;
pub mod settings;

pub use app_state::AppState;
pub use contact::{ContactController, ContactField, ContactForm, Submission, SubmissionPhase};
pub use filter::{CategoryFilter, FilterController};
pub use layout::{LayoutMode, PageLayout, SectionAnchors, Viewport};
pub use navigation::{Navigator, SectionId};
pub use portfolio::{PortfolioView, RenderObserver};
pub use scroll::{ScrollAnimation, ScrollState};
pub use settings::Settings;
