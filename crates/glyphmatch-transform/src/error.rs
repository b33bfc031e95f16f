//! Error types for glyphmatch-transform

use thiserror::Error;

/// Errors that can occur during resampling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphmatch_core::Error),

    /// Target size with a zero dimension or too many pixels
    #[error("invalid target dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Invalid scale factor
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
