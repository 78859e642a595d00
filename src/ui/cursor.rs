// SPDX-License-Identifier: MPL-2.0
//! Cursor-following decorations: a small dot and a soft radial glow.
//!
//! Drawn on a full-window canvas layered above everything else. The canvas
//! never handles events, so widgets underneath keep receiving the pointer.

use crate::ui::design_tokens::opacity;
use crate::ui::theming::ColorScheme;
use iced::widget::canvas;
use iced::{mouse, Color, Point, Rectangle, Theme};

/// Concentric circles used to approximate the radial glow.
pub const GLOW_STEPS: usize = 12;

/// Dot growth factor while the pointer rests on something clickable.
pub const HOVER_SCALE: f32 = 2.0;

/// Dot radius for the current hover state.
#[must_use]
pub fn dot_radius(base: f32, hovering: bool) -> f32 {
    if hovering {
        base * HOVER_SCALE
    } else {
        base
    }
}

/// Glow rings from the outside in, as `(radius, alpha)` pairs.
///
/// Every ring is painted over the previous ones, so the accumulated alpha
/// rises toward the center and fades to nothing at `radius`.
#[must_use]
pub fn glow_rings(radius: f32) -> Vec<(f32, f32)> {
    let step_alpha = opacity::GLOW_PEAK / GLOW_STEPS as f32;
    (0..GLOW_STEPS)
        .map(|step| {
            let fraction = 1.0 - step as f32 / GLOW_STEPS as f32;
            (radius * fraction, step_alpha)
        })
        .collect()
}

/// Canvas program drawing the glow and the dot at `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorEffects {
    pub position: Point,
    pub dot_radius: f32,
    pub glow_radius: f32,
}

impl<Message> canvas::Program<Message> for CursorEffects {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let colors = ColorScheme::for_theme(theme);
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Pointer events arrive in window coordinates.
        let center = Point::new(
            self.position.x - bounds.x,
            self.position.y - bounds.y,
        );

        for (radius, alpha) in glow_rings(self.glow_radius) {
            frame.fill(
                &canvas::Path::circle(center, radius),
                Color {
                    a: alpha,
                    ..colors.glow
                },
            );
        }

        frame.fill(
            &canvas::Path::circle(center, self.dot_radius),
            colors.cursor_dot,
        );

        vec![frame.into_geometry()]
    }
}
