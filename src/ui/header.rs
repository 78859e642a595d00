// SPDX-License-Identifier: MPL-2.0
//! Page header: two-tone wordmark and subtitle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{text, Column, Row, Text};
use iced::{font, Element, Font};

const LIGHT: Font = Font {
    weight: font::Weight::Light,
    ..Font::DEFAULT
};

/// `wide` selects the larger type scale used past the medium breakpoint.
pub fn view<'a, Message: 'a>(i18n: &I18n, wide: bool) -> Element<'a, Message> {
    let (title_size, subtitle_size) = if wide {
        (typography::DISPLAY, typography::BODY_LG)
    } else {
        (typography::DISPLAY_SM, typography::BODY)
    };

    let wordmark = Row::new()
        .push(Text::new(i18n.tr("header-title")).size(title_size).font(LIGHT))
        .push(
            Text::new(i18n.tr("header-title-accent"))
                .size(title_size)
                .font(LIGHT)
                .style(|theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).accent),
                }),
        );

    let subtitle = Text::new(i18n.tr("header-subtitle"))
        .size(subtitle_size)
        .style(|theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_muted),
        });

    Column::new()
        .spacing(spacing::XS)
        .push(wordmark)
        .push(subtitle)
        .into()
}
