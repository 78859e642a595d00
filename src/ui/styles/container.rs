// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{border, Background, Border, Color, Theme};

/// Full window surface behind the header and grid.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.background)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Bottom-anchored caption on a hovered tile.
pub fn tile_caption(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::CAPTION,
            ..colors.background
        })),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: border::Radius {
                top_left: radius::NONE,
                top_right: radius::NONE,
                bottom_right: radius::XL,
                bottom_left: radius::XL,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Card holding the enlarged image and its caption inside the lightbox.
pub fn lightbox_card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.card)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::XXL.into(),
            ..Default::default()
        },
        shadow: shadow::XXL,
        ..Default::default()
    }
}
