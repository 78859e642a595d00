// SPDX-License-Identifier: MPL-2.0
//! Artwork image presentation shared by grid tiles and the lightbox.

use crate::gallery::ArtworkVisual;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{image, svg, Container, Image, Svg, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Resolution state of one artwork's image.
#[derive(Debug, Clone, Default)]
pub enum ImageState {
    #[default]
    Pending,
    Ready(ArtworkVisual),
    Unavailable,
}

/// What a tile or the lightbox draws for an artwork image.
#[derive(Debug, Clone, Copy)]
pub enum Presentation<'a> {
    Loading,
    Raster(&'a image::Handle),
    Vector(&'a svg::Handle),
    Placeholder,
}

impl Presentation<'_> {
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Presentation::Placeholder)
    }
}

/// Maps a resolution state to what gets drawn.
///
/// A record that was never scheduled for resolution (`None`) has no usable
/// image reference and renders the placeholder.
#[must_use]
pub fn presentation(state: Option<&ImageState>) -> Presentation<'_> {
    match state {
        Some(ImageState::Pending) => Presentation::Loading,
        Some(ImageState::Ready(ArtworkVisual::Raster { handle, .. })) => {
            Presentation::Raster(handle)
        }
        Some(ImageState::Ready(ArtworkVisual::Vector(handle))) => Presentation::Vector(handle),
        Some(ImageState::Unavailable) | None => Presentation::Placeholder,
    }
}

/// Renders an artwork image scaled to fit inside a `side` x `side` square.
pub fn view<'a, Message: 'a>(
    state: Option<&'a ImageState>,
    side: f32,
    i18n: &I18n,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match presentation(state) {
        Presentation::Loading => Text::new(i18n.tr("loading-caption"))
            .size(typography::BODY)
            .style(|theme| iced::widget::text::Style {
                color: Some(ColorScheme::for_theme(theme).text_muted),
            })
            .into(),
        Presentation::Raster(handle) => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Presentation::Vector(handle) => Svg::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Presentation::Placeholder => placeholder(),
    };

    Container::new(content)
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn placeholder<'a, Message: 'a>() -> Element<'a, Message> {
    icons::placeholder()
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::placeholder)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_image_shows_loading_state() {
        let state = ImageState::Pending;
        assert!(matches!(presentation(Some(&state)), Presentation::Loading));
    }

    #[test]
    fn unavailable_image_shows_placeholder() {
        let state = ImageState::Unavailable;
        assert!(presentation(Some(&state)).is_placeholder());
    }

    #[test]
    fn unscheduled_image_shows_placeholder() {
        assert!(presentation(None).is_placeholder());
    }

    #[test]
    fn ready_vector_is_drawn_as_svg() {
        let state = ImageState::Ready(ArtworkVisual::Vector(svg::Handle::from_memory(
            b"<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"1\" height=\"1\"/>".to_vec(),
        )));
        assert!(matches!(presentation(Some(&state)), Presentation::Vector(_)));
    }

    #[test]
    fn ready_raster_is_drawn_as_image() {
        let state = ImageState::Ready(ArtworkVisual::Raster {
            handle: image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            width: 1,
            height: 1,
        });
        assert!(matches!(presentation(Some(&state)), Presentation::Raster(_)));
    }
}
