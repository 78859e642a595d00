// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. `.ftl` files ship embedded
//! in the binary and can be supplemented at runtime with `--i18n-dir`.
//!
//! # Locale Resolution
//!
//! 1. `--lang` on the command line
//! 2. `[general] language` in `settings.toml`
//! 3. The operating system locale
//! 4. `en-US`
//!
//! Artwork titles and descriptions are catalog data and are never translated.

pub mod fluent;

pub use fluent::I18n;
