//! Pixel access functions
//!
//! Getting and setting individual pixels. Checked variants return
//! `Option` / `Result`; the `_unchecked` variants index directly and panic
//! on out-of-range coordinates.

use super::{Raster, RasterMut};
use crate::color;
use crate::error::{Error, Result};

#[inline]
fn index(width: u32, x: u32, y: u32) -> usize {
    (y as usize) * (width as usize) + (x as usize)
}

impl Raster {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`, or returns a pixel from the next row if
    /// only `x >= width`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[index(self.width(), x, y)]
    }

    /// Get RGBA values at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgba)
    }
}

impl RasterMut {
    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let i = index(self.width(), x, y);
        self.data_mut()[i] = val;
    }

    /// Set an RGBA pixel at (x, y).
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgba(r, g, b, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_pixel() {
        let mut m = RasterMut::new(4, 3).unwrap();
        m.set_pixel(3, 2, 0x1122_3344).unwrap();
        let r: Raster = m.into();
        assert_eq!(r.get_pixel(3, 2), Some(0x1122_3344));
        assert_eq!(r.get_rgba(3, 2), Some((0x11, 0x22, 0x33, 0x44)));
        assert_eq!(r.get_pixel(0, 0), Some(0));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut m = RasterMut::new(4, 3).unwrap();
        assert!(matches!(
            m.set_pixel(4, 0, 1),
            Err(Error::IndexOutOfBounds { x: 4, y: 0, .. })
        ));
        assert!(m.set_pixel(0, 3, 1).is_err());
        let r: Raster = m.into();
        assert_eq!(r.get_pixel(0, 3), None);
        assert_eq!(r.get_rgba(9, 9), None);
    }

    #[test]
    fn test_set_rgba() {
        let mut m = RasterMut::new(2, 2).unwrap();
        m.set_rgba(1, 0, 200, 100, 50, 255).unwrap();
        let r: Raster = m.into();
        assert_eq!(r.get_rgba(1, 0), Some((200, 100, 50, 255)));
    }
}
