//! Raster scaling by nearest-point sampling
//!
//! Every destination pixel copies exactly one source pixel; there is no
//! interpolation and no smoothing. Source coordinates are computed in exact
//! integer arithmetic:
//!
//! ```text
//! src_x = floor(x * src_w / target_w)
//! src_y = floor(y * src_h / target_h)
//! ```
//!
//! which always lands inside the source because `x < target_w`.

use crate::{TransformError, TransformResult};
use glyphmatch_core::{Raster, RasterMut};
use tracing::debug;

/// Largest target size, in pixels, that [`resample`] will allocate
pub const MAX_TARGET_PIXELS: u64 = 1 << 28;

/// Resample a raster to exactly `width x height` pixels.
///
/// Works for both enlargement and reduction, and for independent factors
/// on each axis. The output is a new raster; the input is not touched.
///
/// # Errors
///
/// Returns [`TransformError::InvalidDimensions`] if either target
/// dimension is 0 or the target has more than [`MAX_TARGET_PIXELS`]
/// pixels.
///
/// # Examples
///
/// ```
/// use glyphmatch_core::{Raster, color};
/// use glyphmatch_transform::resample;
///
/// let raster = Raster::new_filled(50, 75, color::WHITE).unwrap();
/// let small = resample(&raster, 10, 15).unwrap();
/// assert_eq!(small.dimensions(), (10, 15));
/// ```
pub fn resample(raster: &Raster, width: u32, height: u32) -> TransformResult<Raster> {
    if width == 0 || height == 0 || u64::from(width) * u64::from(height) > MAX_TARGET_PIXELS {
        return Err(TransformError::InvalidDimensions { width, height });
    }

    let (src_w, src_h) = raster.dimensions();
    let xmap = sample_map(src_w, width);

    let mut out = RasterMut::new(width, height)?;
    for y in 0..height {
        let sy = sample_index(y, src_h, height) as u32;
        let src_row = raster.row_data(sy);
        for (dst, &sx) in out.row_data_mut(y).iter_mut().zip(&xmap) {
            *dst = src_row[sx];
        }
    }

    debug!(
        from = ?(src_w, src_h),
        to = ?(width, height),
        "resampled raster"
    );
    Ok(out.into())
}

/// Scale a raster by independent factors using nearest-point sampling.
///
/// The target size is `round(width * scale_x)` by `round(height * scale_y)`,
/// never less than 1 on either axis, and the work is done by [`resample`].
///
/// # Errors
///
/// - [`TransformError::InvalidScaleFactor`] if a factor is not a finite
///   positive number
/// - [`TransformError::InvalidDimensions`] if the scaled size exceeds
///   [`MAX_TARGET_PIXELS`]
pub fn scale_by_sampling(raster: &Raster, scale_x: f32, scale_y: f32) -> TransformResult<Raster> {
    for (axis, factor) in [("x", scale_x), ("y", scale_y)] {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(TransformError::InvalidScaleFactor(format!(
                "{axis} factor must be finite and positive, got {factor}"
            )));
        }
    }

    let width = scaled_len(raster.width(), scale_x);
    let height = scaled_len(raster.height(), scale_y);
    resample(raster, width, height)
}

/// Source index sampled by destination index `dst`.
#[inline]
fn sample_index(dst: u32, src_len: u32, dst_len: u32) -> usize {
    (u64::from(dst) * u64::from(src_len) / u64::from(dst_len)) as usize
}

/// Precompute the source column for every destination column.
fn sample_map(src_len: u32, dst_len: u32) -> Vec<usize> {
    (0..dst_len)
        .map(|d| sample_index(d, src_len, dst_len))
        .collect()
}

/// Saturates at `u32::MAX`, which [`resample`] then rejects.
fn scaled_len(len: u32, factor: f32) -> u32 {
    ((len as f64 * factor as f64).round() as u32).max(1)
}
