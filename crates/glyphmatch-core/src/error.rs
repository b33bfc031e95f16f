//! Error types for glyphmatch-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

use crate::geometry::BoundingBox;

/// glyphmatch-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinate outside the raster
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} raster")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Raw sample buffer has the wrong length for the declared dimensions
    #[error("invalid buffer length: expected {expected} bytes, got {actual}")]
    InvalidBufferLength { expected: usize, actual: usize },

    /// No pixel differs from the background sample
    #[error("no foreground pixels: the raster is a single uniform color")]
    EmptyGlyph,

    /// Bounding box with max <= min on some axis
    #[error("invalid bounding box {0}: max must exceed min on both axes")]
    InvalidBoundingBox(BoundingBox),

    /// Bounding box reaching past the raster extent
    #[error("bounding box {bbox} exceeds {width}x{height} raster")]
    BoundingBoxOutOfRange {
        bbox: BoundingBox,
        width: u32,
        height: u32,
    },

    /// Rasters of different sizes where equal sizes are required
    #[error("size mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    SizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
