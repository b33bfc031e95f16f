//! Glyph normalization
//!
//! Reduces a raster holding one glyph on a uniform background to the
//! canonical form used for comparison: foreground bounds, crop, then
//! nearest-point resample to a fixed size.

use crate::error::RecogResult;
use glyphmatch_core::Raster;
use glyphmatch_transform::resample;
use tracing::debug;

/// Normalize a glyph raster to `width x height`.
///
/// The background is the color of pixel (0, 0). Each step allocates a new
/// raster, so `raster` is never modified.
///
/// # Errors
///
/// - [`glyphmatch_core::Error::EmptyGlyph`] if the raster is all background
/// - [`glyphmatch_core::Error::InvalidBoundingBox`] if the foreground is a
///   single row or column
/// - [`glyphmatch_transform::TransformError::InvalidDimensions`] for a zero
///   target dimension
pub fn normalize(raster: &Raster, width: u32, height: u32) -> RecogResult<Raster> {
    let bounds = raster.detect_bounds()?;
    let cropped = raster.crop(&bounds)?;
    let normalized = resample(&cropped, width, height)?;

    debug!(
        input = ?raster.dimensions(),
        %bounds,
        cropped = ?cropped.dimensions(),
        output = ?normalized.dimensions(),
        "normalized glyph"
    );
    Ok(normalized)
}
