// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Grid**: Column count bounds
//! - **Effects**: Cursor dot and glow radii

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default upper bound on grid columns for wide windows.
pub const DEFAULT_MAX_COLUMNS: u8 = 3;

/// Minimum allowed column cap.
pub const MIN_COLUMNS: u8 = 1;

/// Maximum allowed column cap.
pub const MAX_COLUMNS: u8 = 3;

// ==========================================================================
// Cursor Effect Defaults
// ==========================================================================

/// Whether the cursor dot and glow are drawn.
pub const DEFAULT_EFFECTS_ENABLED: bool = true;

/// Default radius of the cursor dot (logical pixels).
pub const DEFAULT_CURSOR_DOT_RADIUS: f32 = 6.0;

/// Minimum cursor dot radius.
pub const MIN_CURSOR_DOT_RADIUS: f32 = 2.0;

/// Maximum cursor dot radius.
pub const MAX_CURSOR_DOT_RADIUS: f32 = 24.0;

/// Default radius of the glow surrounding the pointer (logical pixels).
pub const DEFAULT_GLOW_RADIUS: f32 = 300.0;

/// Minimum glow radius.
pub const MIN_GLOW_RADIUS: f32 = 50.0;

/// Maximum glow radius.
pub const MAX_GLOW_RADIUS: f32 = 800.0;

const _: () = {
    assert!(MIN_COLUMNS <= DEFAULT_MAX_COLUMNS && DEFAULT_MAX_COLUMNS <= MAX_COLUMNS);
    assert!(MIN_CURSOR_DOT_RADIUS < DEFAULT_CURSOR_DOT_RADIUS);
    assert!(DEFAULT_CURSOR_DOT_RADIUS < MAX_CURSOR_DOT_RADIUS);
    assert!(MIN_GLOW_RADIUS < DEFAULT_GLOW_RADIUS);
    assert!(DEFAULT_GLOW_RADIUS < MAX_GLOW_RADIUS);
};
