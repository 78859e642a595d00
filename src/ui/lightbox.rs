// SPDX-License-Identifier: MPL-2.0
//! Full-window overlay showing one artwork enlarged.
//!
//! Layering, bottom to top:
//! 1. the backdrop, which closes the lightbox when pressed
//! 2. the card with the image, title and description; presses on it emit
//!    [`Message::ContentPressed`] and never reach the backdrop
//! 3. the close control in the top-right corner
//!
//! The whole overlay is wrapped in `opaque` so the grid beneath receives no
//! pointer events while it is shown.

use crate::gallery::Artwork;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery::artwork_image::{self, ImageState};
use crate::ui::gallery::layout::{self, LIGHTBOX_PADDING};
use crate::ui::gallery::{HoverTarget, Message};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, mouse_area, opaque, text, tooltip, Column, Container, Stack, Text};
use iced::{alignment, font, mouse, Element, Font, Length, Size};

pub fn view<'a>(
    artwork: &'static Artwork,
    image: Option<&'a ImageState>,
    i18n: &I18n,
    window: Size,
) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let content = mouse_area(card(artwork, image, i18n, window)).on_press(Message::ContentPressed);
    let card = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let close = Container::new(close_button(i18n))
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Right);

    opaque(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(card)
            .push(close),
    )
}

fn card<'a>(
    artwork: &'static Artwork,
    image: Option<&'a ImageState>,
    i18n: &I18n,
    window: Size,
) -> Element<'a, Message> {
    let title = Text::new(artwork.title)
        .size(typography::TITLE_LG)
        .font(Font {
            weight: font::Weight::Light,
            ..Font::DEFAULT
        })
        .center();

    let description = Text::new(artwork.description)
        .size(typography::BODY_LG)
        .center()
        .style(|theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_muted),
        });

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(artwork_image::view(
            image,
            layout::lightbox_image_side(window),
            i18n,
        ))
        .push(
            Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(title)
                .push(description),
        );

    Container::new(content)
        .max_width(sizing::LIGHTBOX_MAX_WIDTH)
        .width(Length::Fill)
        .padding(LIGHTBOX_PADDING)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::lightbox_card)
        .into()
}

fn close_button<'a>(i18n: &I18n) -> Element<'a, Message> {
    let icon = icons::close()
        .width(Length::Fixed(sizing::ICON_MD))
        .height(Length::Fixed(sizing::ICON_MD))
        .style(styles::overlay::icon);

    let control = mouse_area(
        button(icon)
            .padding(spacing::SM)
            .style(styles::button::close)
            .on_press(Message::CloseClicked),
    )
    .on_enter(Message::Hovered {
        target: HoverTarget::CloseButton,
        entered: true,
    })
    .on_exit(Message::Hovered {
        target: HoverTarget::CloseButton,
        entered: false,
    })
    .interaction(mouse::Interaction::Pointer);

    tooltip(
        control,
        Text::new(i18n.tr("close-label")).size(typography::BODY),
        tooltip::Position::Left,
    )
    .gap(spacing::XS)
    .into()
}
