// SPDX-License-Identifier: MPL-2.0
//! The gallery screen: artwork grid, lightbox and cursor effects.
//!
//! [`State`] owns every piece of interactive state of the screen:
//!
//! - the [`Selection`], which decides whether the lightbox is open
//! - the [`Hover`] state that drives tile captions and the enlarged cursor dot
//! - the last known pointer position for the cursor effects
//! - one [`ImageState`] per artwork as image resolution completes
//!
//! The selection only ever changes through [`State::select_artwork`] and
//! [`State::clear_selection`]; pointer and hover messages never touch it.

pub mod artwork_image;
pub mod layout;
mod tile;

pub use artwork_image::{ImageState, Presentation};

use crate::config::Config;
use crate::error::Error;
use crate::gallery::{self, Artwork, ArtworkId, ArtworkVisual};
use crate::i18n::fluent::I18n;
use crate::ui::cursor::{self, CursorEffects};
use crate::ui::design_tokens::spacing;
use crate::ui::header;
use crate::ui::lightbox;
use crate::ui::styles;
use iced::widget::{canvas, scrollable, Column, Container, Row, Stack};
use iced::{alignment, event, mouse, Element, Event, Length, Point, Size, Subscription};
use layout::GridLayout;
use std::collections::HashMap;

/// Which artwork, if any, is shown in the lightbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Closed,
    Open(&'static Artwork),
}

impl Selection {
    #[must_use]
    pub fn artwork(&self) -> Option<&'static Artwork> {
        match self {
            Selection::Closed => None,
            Selection::Open(artwork) => Some(artwork),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }
}

/// Interactive element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    Tile(ArtworkId),
    CloseButton,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hover {
    pub tile: Option<ArtworkId>,
    pub close_button: bool,
}

impl Hover {
    /// Whether the pointer rests on something clickable.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.tile.is_some() || self.close_button
    }
}

/// Cursor effect settings taken from `[effects]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSettings {
    pub enabled: bool,
    pub dot_radius: f32,
    pub glow_radius: f32,
}

impl EffectSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            enabled: config.effects.enabled(),
            dot_radius: config.effects.cursor_dot_radius(),
            glow_radius: config.effects.glow_radius(),
        }
    }
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TileClicked(ArtworkId),
    Hovered { target: HoverTarget, entered: bool },
    /// Press on the dimmed area around the lightbox card.
    BackdropPressed,
    /// Press on the lightbox card itself. Intentionally does nothing.
    ContentPressed,
    CloseClicked,
    /// Escape key while the gallery has focus.
    EscapePressed,
    PointerMoved(Point),
    PointerLeft,
    ImageResolved(ArtworkId, Result<ArtworkVisual, Error>),
}

/// Gallery screen state.
#[derive(Debug)]
pub struct State {
    artworks: &'static [Artwork],
    selection: Selection,
    hover: Hover,
    pointer: Option<Point>,
    images: HashMap<ArtworkId, ImageState>,
    effects: EffectSettings,
    max_columns: u8,
}

impl Default for State {
    fn default() -> Self {
        Self::new(gallery::catalog(), &Config::default())
    }
}

impl State {
    #[must_use]
    pub fn new(artworks: &'static [Artwork], config: &Config) -> Self {
        Self {
            artworks,
            selection: Selection::Closed,
            hover: Hover::default(),
            pointer: None,
            images: HashMap::new(),
            effects: EffectSettings::from_config(config),
            max_columns: config.gallery.max_columns(),
        }
    }

    #[must_use]
    pub fn artworks(&self) -> &'static [Artwork] {
        self.artworks
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn hover(&self) -> Hover {
        self.hover
    }

    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    #[must_use]
    pub fn effects(&self) -> EffectSettings {
        self.effects
    }

    #[must_use]
    pub fn image_state(&self, id: ArtworkId) -> Option<&ImageState> {
        self.images.get(&id)
    }

    /// Marks an artwork's image as being resolved.
    pub fn mark_pending(&mut self, id: ArtworkId) {
        self.images.insert(id, ImageState::Pending);
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::TileClicked(id) => {
                self.select_artwork(id);
            }
            Message::Hovered { target, entered } => self.on_hover(target, entered),
            Message::BackdropPressed | Message::CloseClicked | Message::EscapePressed => {
                self.clear_selection();
            }
            Message::ContentPressed => {}
            Message::PointerMoved(position) => self.on_pointer_move(position),
            Message::PointerLeft => self.on_pointer_left(),
            Message::ImageResolved(id, result) => self.on_image_resolved(id, result),
        }
    }

    /// Opens the lightbox on the artwork with `id`.
    ///
    /// Returns `false` and leaves the state untouched when `id` is not part of
    /// the catalog.
    pub fn select_artwork(&mut self, id: ArtworkId) -> bool {
        let Some(artwork) = gallery::find_in(self.artworks, id) else {
            tracing::warn!(%id, "ignoring selection of unknown artwork");
            return false;
        };

        tracing::debug!(%id, title = artwork.title, "artwork selected");
        self.selection = Selection::Open(artwork);
        // The lightbox now covers the grid.
        self.hover.tile = None;
        true
    }

    /// Closes the lightbox. Closing an already closed lightbox is a no-op.
    pub fn clear_selection(&mut self) {
        if self.selection.is_open() {
            tracing::debug!("lightbox closed");
        }
        self.selection = Selection::Closed;
        self.hover.close_button = false;
    }

    pub fn on_pointer_move(&mut self, position: Point) {
        self.pointer = Some(position);
    }

    pub fn on_pointer_left(&mut self) {
        self.pointer = None;
    }

    pub fn on_hover(&mut self, target: HoverTarget, entered: bool) {
        match target {
            HoverTarget::Tile(id) => {
                if entered {
                    self.hover.tile = Some(id);
                } else if self.hover.tile == Some(id) {
                    self.hover.tile = None;
                }
            }
            HoverTarget::CloseButton => self.hover.close_button = entered,
        }
    }

    pub fn on_image_resolved(&mut self, id: ArtworkId, result: Result<ArtworkVisual, Error>) {
        if gallery::find_in(self.artworks, id).is_none() {
            tracing::warn!(%id, "image resolved for unknown artwork");
            return;
        }

        let state = match result {
            Ok(visual) => ImageState::Ready(visual),
            Err(err) => {
                tracing::warn!(%id, kind = err.kind(), error = %err, "artwork image unavailable");
                ImageState::Unavailable
            }
        };
        self.images.insert(id, state);
    }

    /// Window-wide pointer tracking, active only while effects are enabled.
    pub fn subscription(&self) -> Subscription<Message> {
        if !self.effects.enabled {
            return Subscription::none();
        }

        event::listen_with(|event, _status, _window| match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::PointerMoved(position))
            }
            Event::Mouse(mouse::Event::CursorLeft) => Some(Message::PointerLeft),
            _ => None,
        })
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, window: Size) -> Element<'a, Message> {
        let grid_layout = GridLayout::new(window, self.max_columns);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(self.page(i18n, &grid_layout));

        match self.selection {
            Selection::Closed => {}
            Selection::Open(artwork) => {
                layers = layers.push(lightbox::view(
                    artwork,
                    self.image_state(artwork.id),
                    i18n,
                    window,
                ));
            }
        }

        if let Some(effects) = self.cursor_effects() {
            layers = layers.push(
                canvas::Canvas::new(effects)
                    .width(Length::Fill)
                    .height(Length::Fill),
            );
        }

        layers.into()
    }

    fn cursor_effects(&self) -> Option<CursorEffects> {
        if !self.effects.enabled {
            return None;
        }
        self.pointer.map(|position| CursorEffects {
            position,
            dot_radius: cursor::dot_radius(self.effects.dot_radius, self.hover.is_active()),
            glow_radius: self.effects.glow_radius,
        })
    }

    fn page<'a>(&'a self, i18n: &'a I18n, grid_layout: &GridLayout) -> Element<'a, Message> {
        let grid = self.grid(i18n, grid_layout);

        let content = Column::new()
            .width(Length::Fixed(grid_layout.content_width))
            .spacing(spacing::XXL)
            .push(header::view(i18n, grid_layout.wide))
            .push(grid);

        let centered = Container::new(content)
            .width(Length::Fill)
            .padding([spacing::XXL, grid_layout.padding])
            .align_x(alignment::Horizontal::Center);

        Container::new(scrollable(centered).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::page)
            .into()
    }

    fn grid<'a>(&'a self, i18n: &'a I18n, grid_layout: &GridLayout) -> Element<'a, Message> {
        layout::rows(self.artworks, grid_layout.columns)
            .fold(
                Column::new().spacing(layout::GRID_GAP),
                |column, row_artworks| {
                    let row = row_artworks.iter().fold(
                        Row::new().spacing(layout::GRID_GAP),
                        |row, artwork| {
                            row.push(tile::view(
                                artwork,
                                self.image_state(artwork.id),
                                self.hover.tile == Some(artwork.id),
                                grid_layout.tile_side,
                                i18n,
                            ))
                        },
                    );
                    column.push(row)
                },
            )
            .into()
    }
}
