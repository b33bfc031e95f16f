//! Raster - The image container
//!
//! A `Raster` is a rectangular grid of 4-channel RGBA pixels, each stored
//! as one `u32` in `0xRRGGBBAA` order (see [`crate::color`]). Rows are
//! stored contiguously with no padding.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for cheap cloning (shared ownership) and exposes no
//! mutation. To fill pixel data, allocate a [`RasterMut`] (or convert via
//! [`Raster::try_into_mut`] / [`Raster::to_mut`]), then freeze it with
//! `Into<Raster>`. Every pipeline stage allocates its output this way, so a
//! stage never writes into its input.

mod access;
mod clip;
mod compare;

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixels in row-major order, `width * height` entries
    data: Vec<u32>,
}

impl RasterData {
    fn alloc(width: u32, height: u32, fill: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            data: vec![fill; len],
        })
    }
}

/// Raster - immutable RGBA image
///
/// # Examples
///
/// ```
/// use glyphmatch_core::{Raster, color};
///
/// let raster = Raster::new_filled(50, 75, color::WHITE).unwrap();
/// assert_eq!(raster.width(), 50);
/// assert_eq!(raster.height(), 75);
/// assert_eq!(raster.get_pixel(10, 10), Some(color::WHITE));
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with every pixel transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, 0)
    }

    /// Create a new raster with every pixel set to `pixel`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_filled(width: u32, height: u32, pixel: u32) -> Result<Self> {
        Ok(Raster {
            inner: Arc::new(RasterData::alloc(width, height, pixel)?),
        })
    }

    /// Create a raster from interleaved 8-bit `r, g, b, a` samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::InvalidBufferLength`] if `bytes` does not hold exactly
    /// `width * height * 4` samples.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let mut raster = RasterMut::new(width, height)?;
        let expected = raster.inner.data.len() * color::CHANNELS;
        if bytes.len() != expected {
            return Err(Error::InvalidBufferLength {
                expected,
                actual: bytes.len(),
            });
        }
        for (dst, px) in raster
            .inner
            .data
            .iter_mut()
            .zip(bytes.chunks_exact(color::CHANNELS))
        {
            *dst = u32::from_be_bytes([px[0], px[1], px[2], px[3]]);
        }
        Ok(raster.into())
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y as usize) * (self.inner.width as usize);
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Flatten into interleaved 8-bit `r, g, b, a` samples.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.inner
            .data
            .iter()
            .flat_map(|&px| color::channels(px))
            .collect()
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Holds its pixels exclusively. Convert to an immutable [`Raster`] with
/// `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Allocate a transparent black raster for filling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(RasterMut {
            inner: RasterData::alloc(width, height, 0)?,
        })
    }

    /// Get the raster width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let w = self.inner.width as usize;
        let start = (y as usize) * w;
        &mut self.inner.data[start..start + w]
    }

    /// Set every pixel to `pixel`.
    pub fn fill(&mut self, pixel: u32) {
        self.inner.data.fill(pixel);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster.inner),
        }
    }
}
