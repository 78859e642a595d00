// SPDX-License-Identifier: MPL-2.0
//! Responsive grid geometry.
//!
//! Everything here is a pure function of the window size so the view code
//! stays declarative and the breakpoints can be tested without a renderer.

use crate::config::{MAX_COLUMNS, MIN_COLUMNS};
use crate::ui::design_tokens::{sizing, spacing};
use iced::Size;

/// Gap between tiles, both axes.
pub const GRID_GAP: f32 = spacing::XL;

/// Room left for the vertical scrollbar so fixed-size rows never overflow.
pub const SCROLLBAR_ALLOWANCE: f32 = spacing::MD;

/// Lightbox card padding.
pub const LIGHTBOX_PADDING: f32 = spacing::XXL;

/// Vertical space reserved in the lightbox for the title and description.
const LIGHTBOX_CAPTION_HEIGHT: f32 = 140.0;

/// Computed grid geometry for one window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Window is at or past the medium breakpoint.
    pub wide: bool,
    pub columns: usize,
    pub padding: f32,
    pub content_width: f32,
    pub tile_side: f32,
}

impl GridLayout {
    #[must_use]
    pub fn new(window: Size, max_columns: u8) -> Self {
        let columns = columns_for_width(window.width, max_columns);
        let padding = horizontal_padding(window.width);
        let content_width = content_width(window.width, padding);
        let tile_side = tile_side(content_width, columns);

        Self {
            wide: window.width >= sizing::BREAKPOINT_MD,
            columns,
            padding,
            content_width,
            tile_side,
        }
    }
}

/// Number of grid columns for a window width.
///
/// One column on narrow windows, two from the medium breakpoint and three
/// from the large one, never more than `max_columns`.
#[must_use]
pub fn columns_for_width(width: f32, max_columns: u8) -> usize {
    let responsive = if width >= sizing::BREAKPOINT_LG {
        3
    } else if width >= sizing::BREAKPOINT_MD {
        2
    } else {
        1
    };
    let cap = max_columns.clamp(MIN_COLUMNS, MAX_COLUMNS);
    responsive.min(cap) as usize
}

/// Outer padding of the header and grid.
#[must_use]
pub fn horizontal_padding(width: f32) -> f32 {
    if width >= sizing::BREAKPOINT_MD {
        spacing::XXL
    } else {
        spacing::LG
    }
}

/// Usable width of the centered content column.
#[must_use]
pub fn content_width(window_width: f32, padding: f32) -> f32 {
    (window_width - 2.0 * padding - SCROLLBAR_ALLOWANCE)
        .clamp(0.0, sizing::MAX_CONTENT_WIDTH)
}

/// Edge length of a square tile.
#[must_use]
pub fn tile_side(content_width: f32, columns: usize) -> f32 {
    let columns = columns.max(1);
    let gaps = GRID_GAP * (columns - 1) as f32;
    ((content_width - gaps) / columns as f32).max(0.0)
}

/// Splits `items` into grid rows of `columns` tiles, preserving order.
pub fn rows<T>(items: &[T], columns: usize) -> std::slice::Chunks<'_, T> {
    items.chunks(columns.max(1))
}

/// Edge length of the square image area in the lightbox.
#[must_use]
pub fn lightbox_image_side(window: Size) -> f32 {
    let card_width = (window.width - 2.0 * spacing::MD).min(sizing::LIGHTBOX_MAX_WIDTH);
    let by_width = card_width - 2.0 * LIGHTBOX_PADDING;
    // The card is capped at 90% of the window height.
    let by_height = window.height * 0.9 - 2.0 * LIGHTBOX_PADDING - LIGHTBOX_CAPTION_HEIGHT;

    by_width
        .min(by_height)
        .min(sizing::LIGHTBOX_IMAGE_MAX)
        .max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn columns_follow_breakpoints() {
        assert_eq!(columns_for_width(500.0, 3), 1);
        assert_eq!(columns_for_width(767.9, 3), 1);
        assert_eq!(columns_for_width(768.0, 3), 2);
        assert_eq!(columns_for_width(1023.0, 3), 2);
        assert_eq!(columns_for_width(1024.0, 3), 3);
        assert_eq!(columns_for_width(2560.0, 3), 3);
    }

    #[test]
    fn columns_respect_configured_cap() {
        assert_eq!(columns_for_width(2560.0, 2), 2);
        assert_eq!(columns_for_width(2560.0, 1), 1);
        assert_eq!(columns_for_width(2560.0, 0), 1);
        assert_eq!(columns_for_width(500.0, 3), 1);
    }

    #[test]
    fn padding_grows_on_wider_windows() {
        assert_abs_diff_eq!(horizontal_padding(600.0), spacing::LG);
        assert_abs_diff_eq!(horizontal_padding(900.0), spacing::XXL);
    }

    #[test]
    fn content_width_is_capped() {
        assert_abs_diff_eq!(content_width(4000.0, spacing::XXL), sizing::MAX_CONTENT_WIDTH);
        assert_abs_diff_eq!(content_width(10.0, spacing::LG), 0.0);
    }

    #[test]
    fn tiles_fill_content_width() {
        let layout = GridLayout::new(Size::new(1200.0, 800.0), 3);
        assert_eq!(layout.columns, 3);
        assert!(layout.wide);
        let used = layout.tile_side * 3.0 + GRID_GAP * 2.0;
        assert_abs_diff_eq!(used, layout.content_width, epsilon = 1e-3);
    }

    #[test]
    fn rows_keep_catalog_order() {
        let ids = [1, 2, 3, 4, 5];
        let grouped: Vec<Vec<i32>> = rows(&ids, 3).map(<[i32]>::to_vec).collect();
        assert_eq!(grouped, vec![vec![1, 2, 3], vec![4, 5]]);

        let flattened: Vec<i32> = rows(&ids, 2).flatten().copied().collect();
        assert_eq!(flattened, ids);
    }

    #[test]
    fn rows_treat_zero_columns_as_one() {
        let ids = [1, 2];
        assert_eq!(rows(&ids, 0).count(), 2);
    }

    #[test]
    fn lightbox_image_is_capped() {
        assert_abs_diff_eq!(
            lightbox_image_side(Size::new(3000.0, 3000.0)),
            sizing::LIGHTBOX_IMAGE_MAX
        );
    }

    #[test]
    fn lightbox_image_shrinks_with_short_windows() {
        let side = lightbox_image_side(Size::new(1400.0, 600.0));
        assert!(side < sizing::LIGHTBOX_IMAGE_MAX);
        assert!(side > 0.0);
    }

    #[test]
    fn lightbox_image_never_negative() {
        assert_abs_diff_eq!(lightbox_image_side(Size::new(50.0, 50.0)), 0.0);
    }
}
