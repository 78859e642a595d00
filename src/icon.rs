// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded branding SVG at runtime to produce a RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/atelier.svg");

/// Edge length of the rasterized icon.
pub const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon to a square RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let (rgba, size) = rasterize(SVG_SOURCE.as_bytes(), ICON_SIZE)?;
    icon::from_rgba(rgba, size, size).ok()
}

fn rasterize(svg: &[u8], target: u32) -> Option<(Vec<u8>, u32)> {
    let tree = match usvg::Tree::from_data(svg, &usvg::Options::default()) {
        Ok(t) => t,
        Err(err) => {
            tracing::warn!(error = %err, "window icon SVG is invalid");
            return None;
        }
    };

    let orig_size = tree.size();
    let scale_x = target as f32 / orig_size.width();
    let scale_y = target as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(target, target)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some((pixmap.take(), target))
}
