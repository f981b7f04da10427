use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("WebP encoding error: {0}")]
    WebpEncoding(String),

    #[error("Unsupported variant: {0}. Expected one of: webp, jpeg")]
    UnsupportedVariant(String),

    #[error("Gallery directory not found: {0}")]
    GalleryNotFound(PathBuf),

    #[error("Walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),

    #[error("Invalid file name: {0}")]
    InvalidFileName(PathBuf),
}

pub type Result<T> = std::result::Result<T, OptimizeError>;
