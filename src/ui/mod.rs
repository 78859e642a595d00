// SPDX-License-Identifier: MPL-2.0
//! User interface modules.

pub mod cursor;
pub mod design_tokens;
pub mod gallery;
pub mod header;
pub mod icons;
pub mod lightbox;
pub mod styles;
pub mod theming;
