//! Error types for the image tools

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    /// Input missing, malformed or in an unsupported format
    #[error("failed to load image {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Destination unwritable or format unknown
    #[error("failed to save image {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("pixel ({x}, {y}) outside {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("invalid image dimensions: {0}")]
    InvalidDimensions(String),

    #[error("invalid color '{0}' (expected #rrggbb[aa] or r,g,b[,a])")]
    InvalidColor(String),
}

/// Result type for image operations
pub type Result<T> = std::result::Result<T, ImageError>;
