// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only native file drops are routed; every other interaction goes through
//! widgets.

use super::Message;
use iced::{event, window, Subscription};

/// Turns files dropped on the window into upload messages, one per file.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    })
}
