// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Artwork tile: a rounded card whose shadow picks up the accent on hover.
///
/// `hovered` comes from the gallery hover state rather than the button status
/// so that the caption and the shadow change together.
pub fn tile(hovered: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let lifted = hovered || matches!(status, button::Status::Hovered);

        button::Style {
            background: Some(Background::Color(colors.card)),
            text_color: colors.text_primary,
            border: Border {
                radius: radius::XL.into(),
                ..Default::default()
            },
            shadow: if lifted { shadow::ACCENT_XL } else { shadow::LG },
            snap: true,
        }
    }
}

/// Round close control of the lightbox.
pub fn close(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (colors.accent, colors.accent_foreground)
        }
        _ => (colors.card, colors.text_primary),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::ThemeMode;

    #[test]
    fn hovered_tile_uses_accent_shadow() {
        let theme = ThemeMode::Dark.theme();
        let idle = tile(false)(&theme, button::Status::Active);
        let hovered = tile(true)(&theme, button::Status::Active);
        assert_eq!(idle.shadow, shadow::LG);
        assert_eq!(hovered.shadow, shadow::ACCENT_XL);
    }

    #[test]
    fn close_button_turns_accent_on_hover() {
        let theme = ThemeMode::Dark.theme();
        let colors = ColorScheme::dark();
        let hovered = close(&theme, button::Status::Hovered);
        assert_eq!(hovered.background, Some(Background::Color(colors.accent)));
        assert_eq!(hovered.text_color, colors.accent_foreground);

        let idle = close(&theme, button::Status::Active);
        assert_eq!(idle.background, Some(Background::Color(colors.card)));
    }
}
