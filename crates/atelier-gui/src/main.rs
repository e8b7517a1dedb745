//! Atelier Portfolio - Desktop GUI Application
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use atelier_gui::App;
use atelier_gui::app::{DEFAULT_WINDOW_SIZE, MIN_WINDOW_SIZE};
use atelier_gui::component::icon::LUCIDE_FONT_BYTES;
use atelier_gui::constants::{APP_NAME, APP_VERSION};
use iced::window;
use tracing_subscriber::EnvFilter;

/// Application entry point.
pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter())
        .init();

    tracing::info!("Starting {} v{}", APP_NAME, APP_VERSION);

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: DEFAULT_WINDOW_SIZE,
            min_size: Some(MIN_WINDOW_SIZE),
            ..Default::default()
        })
        .run()
}

/// Build an `EnvFilter`, letting `RUST_LOG` override the default.
fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Our crates at info, everything else at warn
        EnvFilter::new("warn,atelier=info,atelier_gui=info,atelier_content=info")
    })
}
