//! Services for side effects outside the UI thread.
//!
//! These services provide futures and host calls for use with Iced's
//! `Task::perform` pattern. No service touches application state directly.

pub mod links;
pub mod reset_timer;

pub use links::open_url;
pub use reset_timer::{PendingReset, RESET_DELAY, ResetTicket, ResetTimer, await_reset};
