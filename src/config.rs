use std::path::{Path, PathBuf};

use anyhow::{Result, ensure};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Configuration {
    /// Heading shown above the slideshow.
    pub title: String,
    /// Ordered gallery entries; the display order is the file order.
    pub gallery: Vec<GalleryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GalleryEntry {
    /// Path to the image file, relative to the process working directory.
    pub image: PathBuf,
    /// Caption shown under the image.
    pub caption: String,
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate invariants that cannot be expressed via serde defaults alone.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            !self.gallery.is_empty(),
            "gallery must include at least one entry"
        );
        for (i, entry) in self.gallery.iter().enumerate() {
            ensure!(
                !entry.image.as_os_str().is_empty(),
                "gallery entry {} has an empty image path",
                i + 1
            );
            ensure!(
                !entry.caption.trim().is_empty(),
                "gallery entry {} has an empty caption",
                i + 1
            );
        }
        Ok(self)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            title: "Slideshow".to_string(),
            gallery: Vec::new(),
        }
    }
}
