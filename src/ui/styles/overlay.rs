// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox backdrop and the placeholder graphic.

use crate::ui::theming::ColorScheme;
use iced::widget::{container, svg};
use iced::{Background, Theme};

/// Near-opaque backdrop that covers the grid while the lightbox is open.
pub fn backdrop(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.backdrop)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Tints monochrome SVG icons with the current text color.
pub fn icon(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(ColorScheme::for_theme(theme).text_primary),
    }
}

/// Dims the placeholder so it reads as absent content.
pub fn placeholder(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(ColorScheme::for_theme(theme).text_muted),
    }
}
