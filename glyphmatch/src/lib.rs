//! glyphmatch - Glyph normalization and classification for Rust
//!
//! Classifies a raster holding a single glyph by nearest-neighbor distance
//! against a small gallery of labeled references.
//!
//! # Overview
//!
//! - Raster, geometry, bounds detection, crop and distance (core)
//! - Image I/O (PNG natively; BMP, JPEG, GIF, TIFF, WebP for queries)
//! - Nearest-point resampling to a fixed size
//! - Gallery construction and 1-nearest-neighbor classification
//!
//! # Example
//!
//! ```
//! use glyphmatch::{Raster, color};
//! use glyphmatch::recog::{Gallery, ReferencePrep, classify_normalized};
//!
//! let mut gallery = Gallery::new(10, 10).unwrap();
//! let black = Raster::new_filled(10, 10, color::BLACK).unwrap();
//! let white = Raster::new_filled(10, 10, color::WHITE).unwrap();
//! gallery.insert("A", &black, ReferencePrep::Resample).unwrap();
//! gallery.insert("B", &white, ReferencePrep::Resample).unwrap();
//!
//! let result = classify_normalized(&white, &gallery).unwrap();
//! assert_eq!(result.label, "B");
//! assert_eq!(result.distance, 0.0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use glyphmatch_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use glyphmatch_io as io;
pub use glyphmatch_recog as recog;
pub use glyphmatch_transform as transform;
