use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("WebP encoding error: {0}")]
    WebPEncoding(String),

    #[error("JPEG encoding error: {0}")]
    JpegEncoding(#[from] jpeg_encoder::EncodingError),

    #[error("Invalid quality value: {0}. Must be between 0 and 100")]
    InvalidQuality(u8),

    #[error("Invalid size tier '{0}': {1}")]
    InvalidTier(String, String),

    #[error("Invalid image dimensions: {0}x{1}. Maximum allowed: {2}x{2}")]
    InvalidDimensions(u32, u32, u32),

    #[error("Image too large: {0}x{1} exceeds the {2} pixel limit")]
    PixelLimitExceeded(u32, u32, u64),

    #[error("File too large: {0} bytes. Maximum allowed: {1} bytes")]
    FileTooLarge(u64, u64),

    #[error("Input directory not found: {0}")]
    InputDirectoryNotFound(PathBuf),

    #[error("Failed to create output directory {path:?}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),

    #[error("Manifest serialization error: {0}")]
    Manifest(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OptimizeError>;
