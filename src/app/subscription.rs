// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only the window size matters to the gallery: it feeds the viewport watcher,
//! which decides whether the grid needs a new arrangement. The size reported
//! when the window opens counts as the first resize, so a window the platform
//! opened at a non-default size is laid out for what it really is.

use super::Message;
use iced::{event, window, Subscription};

/// Routes window open and resize events to [`Message::WindowResized`].
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| window_size_message(&event))
}

fn window_size_message(event: &event::Event) -> Option<Message> {
    match event {
        event::Event::Window(
            window::Event::Opened { size, .. } | window::Event::Resized(size),
        ) => Some(Message::WindowResized(*size)),
        _ => None,
    }
}
