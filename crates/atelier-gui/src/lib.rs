//! Atelier Portfolio - GUI Library
//!
//! A single-page fashion portfolio: hero banner, filterable design gallery,
//! technical document link-out, biography and a contact form.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

pub mod app;
pub mod component;
pub mod constants;
pub mod error;
pub mod handler;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;

pub use app::App;
