// SPDX-License-Identifier: MPL-2.0
//! The artwork catalog and the loading of artwork images.
//!
//! The catalog is compiled into the binary: five records, fixed order, never
//! mutated. Everything else in the application refers to records by
//! [`ArtworkId`] and resolves them back through [`find`].

pub mod source;

pub use source::{ArtworkVisual, ImageKind, ImageRef};

use std::fmt;

/// Stable identifier of a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtworkId(pub u32);

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single gallery record.
#[derive(Debug, PartialEq, Eq)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: &'static str,
    /// Web-root style path (`/artworks/x.png`) or `http(s)` URL.
    pub image: &'static str,
    pub description: &'static str,
}

impl Artwork {
    /// Parsed image reference, or `None` when the record has no image.
    #[must_use]
    pub fn image_ref(&self) -> Option<ImageRef> {
        ImageRef::parse(self.image)
    }
}

pub static ARTWORKS: [Artwork; 5] = [
    Artwork {
        id: ArtworkId(1),
        title: "Telluricaquarian",
        image: "/artworks/sequestered-knowledge.png",
        description: "The brand Telluricaquarian \u{2014} a brand focused on technology, design, and water.",
    },
    Artwork {
        id: ArtworkId(2),
        title: "Electrochemical Medical Device",
        image: "/artworks/sequestered-knowledge-wt.png",
        description: "Schematics and EDU material on medical-grade electrolytic devices and electrochemical systems.",
    },
    Artwork {
        id: ArtworkId(3),
        title: "Primordial Originating Substance",
        image: "/artworks/sequestered-knowledge-ursz.png",
        description: "Ursubstanz (German). Pronounced: OOR-soob-stahnts. Meaning: \"primordial substance\" / original matter.",
    },
    Artwork {
        id: ArtworkId(4),
        title: "Bezier Glyph",
        image: "/artworks/bezier-glyph.svg",
        description: "Curved bezier path artwork",
    },
    Artwork {
        id: ArtworkId(5),
        title: "Scattered",
        image: "/artworks/scattered.svg",
        description: "Abstract scattered composition",
    },
];

/// The full catalog in display order.
#[must_use]
pub fn catalog() -> &'static [Artwork] {
    &ARTWORKS
}

/// Looks up a record by id.
#[must_use]
pub fn find(id: ArtworkId) -> Option<&'static Artwork> {
    find_in(catalog(), id)
}

/// Looks up a record by id in an arbitrary static collection.
#[must_use]
pub fn find_in(artworks: &'static [Artwork], id: ArtworkId) -> Option<&'static Artwork> {
    artworks.iter().find(|artwork| artwork.id == id)
}
