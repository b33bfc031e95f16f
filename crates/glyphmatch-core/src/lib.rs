//! glyphmatch-core - Basic data structures for glyph normalization
//!
//! This crate provides the data structures and per-raster operations used
//! throughout the glyphmatch workspace:
//!
//! - [`Raster`] / [`RasterMut`] - 4-channel image container (immutable / mutable)
//! - [`Point`] / [`BoundingBox`] - Pixel coordinates and inclusive foreground regions
//! - [`Raster::detect_bounds`] - Background-relative foreground detection
//! - [`Raster::crop`] - Sub-raster extraction with an exclusive max corner
//! - [`Raster::distance`] - Euclidean distance over all channels

pub mod error;
pub mod geometry;
pub mod raster;

pub use error::{Error, Result};
pub use geometry::{BoundingBox, Point};
pub use raster::{Raster, RasterMut};

/// Color channel indices and helper functions for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Red channel (MSB, byte 0)
    pub const RED: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Blue channel (byte 2)
    pub const BLUE: usize = 2;
    /// Alpha channel (LSB, byte 3)
    pub const ALPHA: usize = 3;

    /// Number of channels in every pixel
    pub const CHANNELS: usize = 4;

    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Opaque black.
    pub const BLACK: u32 = 0x0000_00ff;
    /// Opaque white.
    pub const WHITE: u32 = 0xffff_ffff;

    /// Extract red component from a pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose an opaque RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose an RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGBA values from a pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Channels of a pixel in `[r, g, b, a]` order.
    #[inline]
    pub fn channels(pixel: u32) -> [u8; CHANNELS] {
        pixel.to_be_bytes()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_and_extract() {
            let p = compose_rgba(10, 20, 30, 40);
            assert_eq!(p, 0x0a14_1e28);
            assert_eq!(extract_rgba(p), (10, 20, 30, 40));
            assert_eq!(channels(p), [10, 20, 30, 40]);
        }

        #[test]
        fn test_compose_rgb_is_opaque() {
            assert_eq!(alpha(compose_rgb(1, 2, 3)), 255);
            assert_eq!(compose_rgb(0, 0, 0), BLACK);
            assert_eq!(compose_rgb(255, 255, 255), WHITE);
        }

        #[test]
        fn test_channel_indices_match_channels() {
            let p = compose_rgba(1, 2, 3, 4);
            let c = channels(p);
            assert_eq!(c[RED], red(p));
            assert_eq!(c[GREEN], green(p));
            assert_eq!(c[BLUE], blue(p));
            assert_eq!(c[ALPHA], alpha(p));
        }
    }
}
