// SPDX-License-Identifier: MPL-2.0
//! Resolution of artwork image references into renderable handles.
//!
//! Local references are web-root style (`/artworks/x.png`) and resolve against
//! the asset directory. Remote references are plain `http(s)` URLs. Raster
//! formats are decoded up front so a corrupt file is detected here instead of
//! rendering as a broken image; SVG documents are parsed with `usvg` for the
//! same reason and handed to the SVG widget untouched.

use crate::error::{Error, Result};
use iced::widget::{image, svg};
use image_rs::GenericImageView;
use resvg::usvg;
use std::path::{Path, PathBuf};

/// Where an artwork image lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Path relative to the asset directory.
    Local(PathBuf),
    /// Absolute `http` or `https` URL.
    Remote(String),
}

/// Decoder family selected from the reference's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Raster,
    Vector,
}

impl ImageRef {
    /// Parses a catalog image reference.
    ///
    /// Returns `None` for an empty reference. Leading slashes are stripped from
    /// local references so that `/artworks/x.png` lands under the asset
    /// directory rather than the filesystem root.
    #[must_use]
    pub fn parse(reference: &str) -> Option<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }

        if reference.starts_with("http://") || reference.starts_with("https://") {
            return Some(ImageRef::Remote(reference.to_string()));
        }

        let relative = reference.trim_start_matches('/');
        if relative.is_empty() {
            return None;
        }
        Some(ImageRef::Local(PathBuf::from(relative)))
    }

    #[must_use]
    pub fn kind(&self) -> ImageKind {
        let name = match self {
            ImageRef::Local(path) => path.to_string_lossy().into_owned(),
            ImageRef::Remote(url) => url
                .split(['?', '#'])
                .next()
                .unwrap_or(url.as_str())
                .to_string(),
        };

        let is_svg = Path::new(&name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        if is_svg {
            ImageKind::Vector
        } else {
            ImageKind::Raster
        }
    }
}

/// A successfully resolved artwork image.
#[derive(Debug, Clone)]
pub enum ArtworkVisual {
    Raster {
        handle: image::Handle,
        width: u32,
        height: u32,
    },
    Vector(svg::Handle),
}

/// Reads and decodes the image behind `reference`.
///
/// # Errors
///
/// Returns an error if:
/// - The local file cannot be read ([`Error::Io`])
/// - The remote resource cannot be retrieved ([`Error::Network`])
/// - The bytes are not a decodable raster image ([`Error::Image`])
/// - The bytes are not a valid, non-empty SVG document ([`Error::Svg`])
pub async fn load(reference: ImageRef, assets_dir: PathBuf) -> Result<ArtworkVisual> {
    let kind = reference.kind();

    let bytes = match &reference {
        ImageRef::Local(relative) => tokio::fs::read(assets_dir.join(relative)).await?,
        ImageRef::Remote(url) => fetch(url).await?,
    };

    // Decoding is CPU-bound; keep it off the runtime's async workers.
    tokio::task::spawn_blocking(move || decode(&bytes, kind))
        .await
        .map_err(|e| Error::Io(format!("decode task failed: {e}")))?
}

async fn fetch(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let body = response.bytes().await?;
    Ok(body.to_vec())
}

/// Decodes in-memory image bytes.
///
/// # Errors
///
/// See [`load`].
pub fn decode(bytes: &[u8], kind: ImageKind) -> Result<ArtworkVisual> {
    match kind {
        ImageKind::Vector => {
            let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
                .map_err(|e| Error::Svg(e.to_string()))?;

            let size = tree.size().to_int_size();
            if size.width() == 0 || size.height() == 0 {
                return Err(Error::Svg("SVG has empty dimensions".into()));
            }

            Ok(ArtworkVisual::Vector(svg::Handle::from_memory(bytes.to_vec())))
        }
        ImageKind::Raster => {
            let img = image_rs::load_from_memory(bytes)?;
            let (width, height) = img.dimensions();
            let pixels = img.to_rgba8().into_vec();

            Ok(ArtworkVisual::Raster {
                handle: image::Handle::from_rgba(width, height, pixels),
                width,
                height,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    const SAMPLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="red"/></svg>"#;

    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([12, 34, 56, 255]));
        let mut bytes = Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, ImageFormat::Png)
            .expect("failed to encode png");
        bytes.into_inner()
    }

    #[test]
    fn parse_strips_web_root_slash() {
        let reference = ImageRef::parse("/artworks/scattered.svg").expect("reference");
        assert_eq!(
            reference,
            ImageRef::Local(PathBuf::from("artworks/scattered.svg"))
        );
    }

    #[test]
    fn parse_recognises_urls() {
        let reference = ImageRef::parse("https://example.org/a.png").expect("reference");
        assert!(matches!(reference, ImageRef::Remote(_)));
    }

    #[test]
    fn parse_rejects_empty_references() {
        assert!(ImageRef::parse("").is_none());
        assert!(ImageRef::parse("   ").is_none());
        assert!(ImageRef::parse("/").is_none());
    }

    #[test]
    fn kind_follows_extension() {
        let svg = ImageRef::parse("/artworks/Glyph.SVG").expect("reference");
        let png = ImageRef::parse("/artworks/knowledge.png").expect("reference");
        let url = ImageRef::parse("https://example.org/a.svg?v=2").expect("reference");
        assert_eq!(svg.kind(), ImageKind::Vector);
        assert_eq!(png.kind(), ImageKind::Raster);
        assert_eq!(url.kind(), ImageKind::Vector);
    }

    #[test]
    fn decode_png_reports_dimensions() {
        let visual = decode(&sample_png(4, 2), ImageKind::Raster).expect("png decodes");
        match visual {
            ArtworkVisual::Raster { width, height, .. } => {
                assert_eq!((width, height), (4, 2));
            }
            ArtworkVisual::Vector(_) => panic!("expected raster visual"),
        }
    }

    #[test]
    fn decode_svg_produces_vector_visual() {
        let visual = decode(SAMPLE_SVG.as_bytes(), ImageKind::Vector).expect("svg parses");
        assert!(matches!(visual, ArtworkVisual::Vector(_)));
    }

    #[test]
    fn decode_rejects_garbage_raster() {
        let err = decode(b"definitely not an image", ImageKind::Raster).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn decode_rejects_garbage_svg() {
        let err = decode(b"<svg", ImageKind::Vector).unwrap_err();
        assert!(matches!(err, Error::Svg(_)));
    }

    #[tokio::test]
    async fn load_reads_from_asset_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let artworks = temp_dir.path().join("artworks");
        fs::create_dir_all(&artworks).expect("failed to create artworks dir");
        fs::write(artworks.join("glyph.svg"), SAMPLE_SVG).expect("failed to write svg");

        let reference = ImageRef::parse("/artworks/glyph.svg").expect("reference");
        let visual = load(reference, temp_dir.path().to_path_buf())
            .await
            .expect("svg loads");
        assert!(matches!(visual, ArtworkVisual::Vector(_)));
    }

    #[tokio::test]
    async fn load_missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let reference = ImageRef::parse("/artworks/missing.png").expect("reference");
        let err = load(reference, temp_dir.path().to_path_buf())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
