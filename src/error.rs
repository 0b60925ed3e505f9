use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by canvas file operations and toolbar input
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported file type: {0}")]
    UnsupportedFile(PathBuf),

    #[error("Invalid brush size")]
    InvalidBrushSize(String),

    #[error("Failed to read config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaintError>;
