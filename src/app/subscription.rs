// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes and the Escape key are always routed. Pointer tracking for
//! the cursor effects belongs to the gallery screen and is requested through
//! [`gallery::State::subscription`].

use super::Message;
use crate::ui::gallery;
use iced::{event, keyboard, window, Event, Subscription};

/// Window and keyboard events handled at the application level.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) if status == event::Status::Ignored => {
            Some(Message::Gallery(gallery::Message::EscapePressed))
        }
        _ => None,
    })
}

/// Everything the application listens to in its current state.
pub fn create(gallery: &gallery::State) -> Subscription<Message> {
    Subscription::batch([
        create_event_subscription(),
        gallery.subscription().map(Message::Gallery),
    ])
}
