//! glyphmatch-recog - Glyph normalization and nearest-neighbor classification
//!
//! This crate turns a raster holding one glyph into a label:
//!
//! - **Normalization**: foreground bounds, crop and resample to a canonical size
//! - **Gallery**: labeled reference rasters at that canonical size
//! - **Classification**: Euclidean distance to every reference, minimum wins
//!
//! # Quick Start
//!
//! ```no_run
//! use glyphmatch_recog::{GalleryLoader, classify};
//!
//! let gallery = GalleryLoader::new("alphabet").load().unwrap();
//! let query = glyphmatch_io::read_image("letter.png").unwrap();
//! let result = classify(&query, &gallery).unwrap();
//! println!("{} : {}", result.label, result.distance);
//! ```
//!
//! # Modules
//!
//! - [`normalize`](mod@normalize): Query normalization pipeline
//! - [`gallery`]: Reference storage
//! - [`loader`]: Gallery construction from image files
//! - [`classify`](mod@classify): 1-nearest-neighbor decision

pub mod classify;
mod error;
pub mod gallery;
pub mod loader;
pub mod normalize;

pub use error::{RecogError, RecogResult};

pub use classify::{ClassificationResult, classify, classify_normalized};
pub use gallery::{Gallery, ReferencePrep};
pub use loader::{DEFAULT_HEIGHT, DEFAULT_WIDTH, GalleryLoader, label_from_path};
pub use normalize::normalize;

// Re-export core for convenience
pub use glyphmatch_core;
