//! Error types for glyphmatch-recog

use thiserror::Error;

/// Errors that can occur during gallery construction and classification
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphmatch_core::Error),

    /// Transform library error
    #[error("transform error: {0}")]
    Transform(#[from] glyphmatch_transform::TransformError),

    /// Image I/O error, passed through unchanged
    #[error("I/O error: {0}")]
    Io(#[from] glyphmatch_io::IoError),

    /// Canonical size with a zero dimension
    #[error("invalid canonical size: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The gallery has no entries to compare against
    #[error("gallery is empty")]
    EmptyGallery,

    /// Label that cannot name a gallery entry
    #[error("invalid label: {0:?}")]
    InvalidLabel(String),

    /// A gallery entry with this label already exists
    #[error("duplicate label: {0}")]
    DuplicateLabel(String),
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
