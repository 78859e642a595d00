// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use iced::widget::Container;
use iced::{Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub window_size: Size,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery = ctx
        .gallery
        .view(ctx.i18n, ctx.window_size)
        .map(Message::Gallery);

    Container::new(gallery)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
