//! Application subscriptions.
//!
//! | Subscription | Condition | Purpose |
//! |--------------|-----------|---------|
//! | Window Resize | Always | Recompute layout and section anchors |
//! | System Theme | Always | Track OS theme changes |
//! | Animation Frames | Scroll animating | Drive smooth section scrolling |
//!
//! Conditional subscriptions return `Subscription::none()` when their
//! condition is not met, so frames are only requested while scrolling.

use iced::Subscription;
use iced::{system, window};

use crate::message::Message;
use crate::state::AppState;

/// Create all application subscriptions.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([
        resize_subscription(),
        system_theme_subscription(),
        frame_subscription(state),
    ])
}

/// Window resize subscription.
fn resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::WindowResized(size))
}

/// System theme change subscription.
///
/// Monitors OS theme changes (light/dark) for ThemeMode::System.
fn system_theme_subscription() -> Subscription<Message> {
    system::theme_changes().map(Message::SystemThemeChanged)
}

/// Animation frame subscription.
///
/// # Conditional Behavior
/// - Active: While a section scroll animation is running
/// - Inactive: Otherwise
fn frame_subscription(state: &AppState) -> Subscription<Message> {
    if state.scroll.is_animating() {
        window::frames().map(Message::AnimationFrame)
    } else {
        Subscription::none()
    }
}
