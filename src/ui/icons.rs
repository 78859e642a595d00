// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG graphics.
//!
//! Sources are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`, so every widget shares one parsed document.

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

/// Defines a function returning an [`Svg`] widget backed by a cached handle.
macro_rules! define_icon {
    ($name:ident, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), $path));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    close,
    "/assets/icons/close.svg",
    "Close icon: two crossed strokes."
);

define_icon!(
    placeholder,
    "/assets/placeholder.svg",
    "Framed landscape shown in place of an artwork that could not be loaded."
);
