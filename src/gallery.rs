//! The fixed, ordered set of captioned images shown by the slideshow.

use std::path::PathBuf;

use tracing::debug;

use crate::config::Configuration;
use crate::error::Error;

/// One gallery slot: an image file plus its caption.
#[derive(Debug, Clone)]
pub struct GalleryItem {
    pub image: PathBuf,
    pub caption: String,
}

/// An immutable, ordered collection of [`GalleryItem`]s.
///
/// Built once at startup; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Gallery {
    items: Vec<GalleryItem>,
}

impl Gallery {
    /// Construct a gallery from a list of items.
    ///
    /// # Errors
    /// Returns [`Error::EmptyGallery`] if `items` is empty.
    pub fn from_items(items: Vec<GalleryItem>) -> Result<Self, Error> {
        if items.is_empty() {
            return Err(Error::EmptyGallery);
        }
        Ok(Self { items })
    }

    /// Construct a gallery from validated configuration.
    ///
    /// # Errors
    /// Returns [`Error::EmptyGallery`] if the configuration lists no entries.
    pub fn from_config(cfg: &Configuration) -> Result<Self, Error> {
        let items = cfg
            .gallery
            .iter()
            .map(|entry| GalleryItem {
                image: entry.image.clone(),
                caption: entry.caption.clone(),
            })
            .collect();
        Self::from_items(items)
    }

    /// Check that every image file exists and has a readable header.
    ///
    /// Reads dimensions only (no full decode), so startup stays cheap even
    /// for large galleries. A bad entry is a configuration error: skipping
    /// it would renumber every image after it.
    ///
    /// # Errors
    /// Returns [`Error::BadImage`] for the first unusable entry.
    pub fn verify(&self) -> Result<(), Error> {
        for item in &self.items {
            let (width, height) =
                image::image_dimensions(&item.image).map_err(|source| Error::BadImage {
                    path: item.image.clone(),
                    source,
                })?;
            debug!(path = %item.image.display(), width, height, "verified gallery image");
        }
        Ok(())
    }

    /// Number of items contained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the gallery is empty. Always `false` for a constructed gallery.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the item at `idx`, if in range.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&GalleryItem> {
        self.items.get(idx)
    }

    /// Borrow the internal list (read-only).
    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }
}
