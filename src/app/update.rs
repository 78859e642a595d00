// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.

use super::Message;
use crate::ui::gallery;
use iced::{Size, Task};

/// Mutable application state touched by `update`.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub window_size: &'a mut Size,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(gallery_message) => {
            ctx.gallery.update(gallery_message);
            Task::none()
        }
        Message::WindowResized(size) => {
            *ctx.window_size = size;
            Task::none()
        }
    }
}
