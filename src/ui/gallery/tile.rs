// SPDX-License-Identifier: MPL-2.0
//! A single clickable artwork tile.

use super::artwork_image::{self, ImageState};
use super::{HoverTarget, Message};
use crate::gallery::Artwork;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, mouse_area, text, Column, Container, Stack, Text};
use iced::{alignment, mouse, Element, Length};

/// Renders a square tile with the artwork image, plus a title and
/// description caption while hovered.
pub fn view<'a>(
    artwork: &'static Artwork,
    image: Option<&'a ImageState>,
    hovered: bool,
    side: f32,
    i18n: &I18n,
) -> Element<'a, Message> {
    let image_side = (side - 2.0 * spacing::XL).max(0.0);
    let picture = Container::new(artwork_image::view(image, image_side, i18n))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(picture);
    if hovered {
        layers = layers.push(caption(artwork));
    }

    let card = button(layers)
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .padding(spacing::NONE)
        .style(styles::button::tile(hovered))
        .on_press(Message::TileClicked(artwork.id));

    mouse_area(card)
        .on_enter(Message::Hovered {
            target: HoverTarget::Tile(artwork.id),
            entered: true,
        })
        .on_exit(Message::Hovered {
            target: HoverTarget::Tile(artwork.id),
            entered: false,
        })
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn caption<'a>(artwork: &'static Artwork) -> Element<'a, Message> {
    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(artwork.title).size(typography::TITLE_SM))
        .push(
            Text::new(artwork.description)
                .size(typography::BODY)
                .style(|theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).text_muted),
                }),
        );

    let panel = Container::new(details)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::tile_caption);

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom)
        .into()
}
