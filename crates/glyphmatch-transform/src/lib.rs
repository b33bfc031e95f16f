//! glyphmatch-transform - Geometric transformations for glyphmatch
//!
//! This crate maps rasters of arbitrary size onto a fixed grid:
//!
//! - [`resample`] - Nearest-point sampling to an exact target size
//! - [`scale_by_sampling`] - Nearest-point sampling by scale factors

mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{MAX_TARGET_PIXELS, resample, scale_by_sampling};
