// SPDX-License-Identifier: MPL-2.0
//! `sequestered_atelier` is an artwork gallery built with the Iced GUI framework.
//!
//! A responsive grid of artwork tiles opens into a full-window lightbox on
//! click, with a cursor-following dot and glow drawn above the page. Text is
//! localized with Fluent and preferences live in a small TOML file.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod icon;
pub mod logging;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
