// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All of the gallery's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, including the amber accent
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes and layout breakpoints
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use sequestered_atelier::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Backdrop behind the lightbox
let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::INK_950
};

let gap = spacing::XL; // 32px between tiles
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const INK_950: Color = Color::from_rgb(0.051, 0.051, 0.051); // #0d0d0d
    pub const INK_900: Color = Color::from_rgb(0.082, 0.082, 0.082); // card surface
    pub const GRAY_500: Color = Color::from_rgb(0.55, 0.55, 0.55); // muted text
    pub const GRAY_100: Color = Color::from_rgb(0.94, 0.94, 0.94);

    // Accent (amber scale)
    pub const ACCENT_300: Color = Color::from_rgb(0.961, 0.816, 0.557);
    pub const ACCENT_500: Color = Color::from_rgb(0.941, 0.729, 0.365); // #f0ba5d
    pub const ACCENT_700: Color = Color::from_rgb(0.745, 0.537, 0.196);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Peak alpha of the cursor glow at its center.
    pub const GLOW_PEAK: f32 = 0.12;
    /// Hover caption background.
    pub const CAPTION: f32 = 0.9;
    /// Lightbox backdrop.
    pub const BACKDROP: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const NONE: f32 = 0.0;
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;

    /// Width at which the grid switches to two columns.
    pub const BREAKPOINT_MD: f32 = 768.0;
    /// Width at which the grid switches to three columns.
    pub const BREAKPOINT_LG: f32 = 1024.0;

    /// Content column is centered and never wider than this.
    pub const MAX_CONTENT_WIDTH: f32 = 1280.0;
    /// Lightbox card width cap.
    pub const LIGHTBOX_MAX_WIDTH: f32 = 1024.0;
    /// Lightbox image side cap.
    pub const LIGHTBOX_IMAGE_MAX: f32 = 768.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Header title on wide windows.
    pub const DISPLAY: f32 = 48.0;

    /// Header title on narrow windows.
    pub const DISPLAY_SM: f32 = 36.0;

    /// Lightbox title.
    pub const TITLE_LG: f32 = 30.0;

    /// Tile caption title.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    /// Tile corners.
    pub const XL: f32 = 16.0;
    /// Lightbox card corners.
    pub const XXL: f32 = 24.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.35,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 15.0,
    };

    /// Hovered tile: larger and tinted with the accent.
    pub const ACCENT_XL: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..palette::ACCENT_500
        },
        offset: Vector { x: 0.0, y: 25.0 },
        blur_radius: 50.0,
    };

    pub const XXL: Shadow = Shadow {
        color: Color {
            a: 0.5,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 25.0 },
        blur_radius: 50.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);
    assert!(spacing::XXL > spacing::XL);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::GLOW_PEAK > 0.0 && opacity::GLOW_PEAK < opacity::CAPTION);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    // Layout validation
    assert!(sizing::BREAKPOINT_MD < sizing::BREAKPOINT_LG);
    assert!(sizing::BREAKPOINT_LG < sizing::MAX_CONTENT_WIDTH);
    assert!(sizing::LIGHTBOX_IMAGE_MAX < sizing::LIGHTBOX_MAX_WIDTH);

    // Typography validation
    assert!(typography::DISPLAY > typography::DISPLAY_SM);
    assert!(typography::DISPLAY_SM > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);

    // Radius validation
    assert!(radius::XXL > radius::XL);
};
