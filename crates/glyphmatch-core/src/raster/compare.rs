//! Raster comparison operations
//!
//! - Exact pixel equality
//! - Euclidean (L2) distance over the flattened channel vector

use super::Raster;
use crate::color;
use crate::error::{Error, Result};

impl Raster {
    /// Check if two rasters have the same size and identical pixels.
    pub fn equals(&self, other: &Raster) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }

    /// Compute the Euclidean distance between two equal-size rasters.
    ///
    /// Sums `(a - b)^2` over every channel of every pixel and returns the
    /// square root. The sum is accumulated exactly in integers in a single
    /// pass, so the result is symmetric and is `0.0` only for
    /// pixel-identical rasters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the rasters differ in width or
    /// height.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphmatch_core::{Raster, color};
    ///
    /// let black = Raster::new_filled(2, 2, color::BLACK).unwrap();
    /// let white = Raster::new_filled(2, 2, color::WHITE).unwrap();
    /// let d = black.distance(&white).unwrap();
    /// // 4 pixels x 3 color channels x 255^2
    /// assert!((d - (12.0f64 * 255.0 * 255.0).sqrt()).abs() < 1e-9);
    /// ```
    pub fn distance(&self, other: &Raster) -> Result<f64> {
        if !self.sizes_equal(other) {
            return Err(Error::SizeMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }

        let sum: u64 = self
            .data()
            .iter()
            .zip(other.data())
            .filter(|(a, b)| a != b)
            .map(|(&a, &b)| squared_channel_diff(a, b))
            .sum();

        Ok((sum as f64).sqrt())
    }
}

/// Sum of squared per-channel differences of two pixels.
#[inline]
fn squared_channel_diff(a: u32, b: u32) -> u64 {
    color::channels(a)
        .into_iter()
        .zip(color::channels(b))
        .map(|(ca, cb)| {
            let d = ca.abs_diff(cb) as u64;
            d * d
        })
        .sum()
}
