use std::path::PathBuf;

use thiserror::Error;

/// Library error type for slideshow operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration lists no gallery entries.
    #[error("gallery has no entries")]
    EmptyGallery,

    /// A gallery image is missing or its header cannot be read.
    #[error("unusable gallery image {}: {source}", path.display())]
    BadImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),
}
