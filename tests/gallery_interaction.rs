// SPDX-License-Identifier: MPL-2.0
//! Gallery screen behavior through the public API.

use sequestered_atelier::config::Config;
use sequestered_atelier::error::Error;
use sequestered_atelier::gallery::{self, source, ArtworkId, ArtworkVisual};
use sequestered_atelier::ui::gallery::artwork_image::presentation;
use sequestered_atelier::ui::gallery::layout::{self, GridLayout};
use sequestered_atelier::ui::gallery::{Message, Selection, State};
use iced::{Point, Size};
use std::path::PathBuf;

fn bundled_assets() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/public")
}

#[test]
fn grid_has_one_tile_per_record_in_catalog_order() {
    let catalog = gallery::catalog();
    for width in [400.0, 800.0, 1100.0, 1920.0] {
        let grid = GridLayout::new(Size::new(width, 900.0), 3);
        let ids: Vec<ArtworkId> = layout::rows(catalog, grid.columns)
            .flatten()
            .map(|artwork| artwork.id)
            .collect();
        let expected: Vec<ArtworkId> = catalog.iter().map(|artwork| artwork.id).collect();
        assert_eq!(ids, expected, "width {width}");
    }
}

#[test]
fn nothing_is_selected_before_the_first_click() {
    let state = State::new(gallery::catalog(), &Config::default());
    assert_eq!(state.selection(), Selection::Closed);
}

#[test]
fn full_lightbox_lifecycle() {
    let mut state = State::new(gallery::catalog(), &Config::default());

    state.update(Message::PointerMoved(Point::new(120.0, 80.0)));
    state.update(Message::TileClicked(ArtworkId(3)));
    assert_eq!(
        state.selection().artwork().map(|artwork| artwork.title),
        Some("Primordial Originating Substance")
    );

    // Clicks on the card itself keep it open.
    state.update(Message::ContentPressed);
    state.update(Message::PointerMoved(Point::new(300.0, 200.0)));
    assert!(state.selection().is_open());

    state.update(Message::BackdropPressed);
    assert_eq!(state.selection(), Selection::Closed);

    // A second close is harmless.
    state.update(Message::CloseClicked);
    assert_eq!(state.selection(), Selection::Closed);
}

#[tokio::test]
async fn bundled_artworks_resolve() {
    for artwork in gallery::catalog() {
        let reference = artwork.image_ref().expect("catalog reference");
        let visual = source::load(reference, bundled_assets())
            .await
            .unwrap_or_else(|err| panic!("{} failed to load: {err}", artwork.title));
        match visual {
            ArtworkVisual::Raster { width, height, .. } => assert!(width > 0 && height > 0),
            ArtworkVisual::Vector(_) => {}
        }
    }
}

#[tokio::test]
async fn unresolvable_image_shows_placeholder_in_tile_and_lightbox() {
    let empty = tempfile::tempdir().expect("Failed to create temporary directory");
    let artwork = gallery::find(ArtworkId(1)).expect("record 1");
    let reference = artwork.image_ref().expect("catalog reference");

    let result: Result<ArtworkVisual, Error> =
        source::load(reference, empty.path().to_path_buf()).await;
    assert!(result.is_err());

    let mut state = State::new(gallery::catalog(), &Config::default());
    state.mark_pending(artwork.id);
    state.update(Message::ImageResolved(artwork.id, result));
    state.update(Message::TileClicked(artwork.id));

    // The tile and the lightbox read the same state through the same mapping.
    assert!(presentation(state.image_state(artwork.id)).is_placeholder());
    let open = state.selection().artwork().expect("lightbox open");
    assert!(presentation(state.image_state(open.id)).is_placeholder());
}
