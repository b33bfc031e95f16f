//! Foreground detection and rectangle clipping
//!
//! The background is whatever color sits at the origin pixel; every pixel
//! that differs from it in any channel is foreground.

use super::{Raster, RasterMut};
use crate::error::{Error, Result};
use crate::geometry::{BoundingBox, Point};
use tracing::debug;

impl Raster {
    /// Find the bounding box of all pixels that differ from pixel (0, 0).
    ///
    /// Both corners of the returned box are foreground coordinates, so a
    /// lone foreground pixel at `(x, y)` yields `min == max == (x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGlyph`] if every pixel equals the background.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphmatch_core::{BoundingBox, RasterMut, Raster, color};
    ///
    /// let mut m = RasterMut::new(8, 8).unwrap();
    /// m.fill(color::WHITE);
    /// m.set_pixel(2, 3, color::BLACK).unwrap();
    /// m.set_pixel(5, 6, color::BLACK).unwrap();
    /// let raster: Raster = m.into();
    ///
    /// assert_eq!(raster.detect_bounds().unwrap(), BoundingBox::from_coords(2, 3, 5, 6));
    /// ```
    pub fn detect_bounds(&self) -> Result<BoundingBox> {
        self.detect_bounds_with_background(self.get_pixel_unchecked(0, 0))
    }

    /// Find the bounding box of all pixels that differ from `background`.
    ///
    /// Same as [`Raster::detect_bounds`] with an explicit background color,
    /// which lets the origin pixel itself be foreground.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGlyph`] if every pixel equals `background`.
    pub fn detect_bounds_with_background(&self, background: u32) -> Result<BoundingBox> {
        let mut bounds: Option<BoundingBox> = None;

        for y in 0..self.height() {
            let row = self.row_data(y);
            // Only the outermost foreground pixels of a row can move the box
            let Some(first) = row.iter().position(|&px| px != background) else {
                continue;
            };
            let last = row.iter().rposition(|&px| px != background).unwrap_or(first);

            let left = Point::new(first as u32, y);
            let right = Point::new(last as u32, y);
            match bounds.as_mut() {
                Some(b) => {
                    b.include(left);
                    b.include(right);
                }
                None => bounds = Some(BoundingBox::new(left, right)),
            }
        }

        let bounds = bounds.ok_or(Error::EmptyGlyph)?;
        debug!(
            width = self.width(),
            height = self.height(),
            %bounds,
            "detected foreground bounds"
        );
        Ok(bounds)
    }

    /// Extract the sub-raster `[min.x, max.x) x [min.y, max.y)`.
    ///
    /// The output is `bbox.crop_width()` by `bbox.crop_height()` pixels and
    /// its pixel `(x', y')` is the input pixel `(min.x + x', min.y + y')`.
    /// The max corner is exclusive, so the last row and column of a
    /// detected box are not copied.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBoundingBox`] if `max <= min` on either axis
    /// - [`Error::BoundingBoxOutOfRange`] if `max` lies past the raster edge
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphmatch_core::{BoundingBox, Raster, color};
    ///
    /// let raster = Raster::new_filled(100, 80, color::WHITE).unwrap();
    /// let cropped = raster.crop(&BoundingBox::from_coords(10, 20, 60, 60)).unwrap();
    /// assert_eq!(cropped.width(), 50);
    /// assert_eq!(cropped.height(), 40);
    /// ```
    pub fn crop(&self, bbox: &BoundingBox) -> Result<Raster> {
        if !bbox.is_croppable() {
            return Err(Error::InvalidBoundingBox(*bbox));
        }
        let (width, height) = self.dimensions();
        if bbox.max.x > width || bbox.max.y > height {
            return Err(Error::BoundingBoxOutOfRange {
                bbox: *bbox,
                width,
                height,
            });
        }

        let x0 = bbox.min.x as usize;
        let x1 = bbox.max.x as usize;
        let mut out = RasterMut::new(bbox.crop_width(), bbox.crop_height())?;
        for (dy, y) in (bbox.min.y..bbox.max.y).enumerate() {
            out.row_data_mut(dy as u32)
                .copy_from_slice(&self.row_data(y)[x0..x1]);
        }

        debug!(
            from = ?self.dimensions(),
            to = ?(out.width(), out.height()),
            "cropped raster"
        );
        Ok(out.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};

    fn white_with(width: u32, height: u32, points: &[(u32, u32)]) -> Raster {
        let mut m = RasterMut::new(width, height).unwrap();
        m.fill(WHITE);
        for &(x, y) in points {
            m.set_pixel(x, y, BLACK).unwrap();
        }
        m.into()
    }

    #[test]
    fn test_detect_bounds_basic() {
        let r = white_with(20, 20, &[(4, 7), (12, 3), (9, 15)]);
        assert_eq!(
            r.detect_bounds().unwrap(),
            BoundingBox::from_coords(4, 3, 12, 15)
        );
    }

    #[test]
    fn test_detect_bounds_blank_is_empty_glyph() {
        let r = Raster::new_filled(10, 10, WHITE).unwrap();
        assert!(matches!(r.detect_bounds(), Err(Error::EmptyGlyph)));
    }

    #[test]
    fn test_detect_bounds_1x1_is_empty_glyph() {
        let r = Raster::new_filled(1, 1, BLACK).unwrap();
        assert!(matches!(r.detect_bounds(), Err(Error::EmptyGlyph)));
    }

    #[test]
    fn test_detect_bounds_foreground_at_origin() {
        // Background is sampled at (0, 0), so a differing origin pixel makes
        // the rest of the raster the foreground
        let mut m = RasterMut::new(6, 6).unwrap();
        m.fill(WHITE);
        m.set_pixel(0, 0, BLACK).unwrap();
        let r: Raster = m.into();
        assert_eq!(
            r.detect_bounds().unwrap(),
            BoundingBox::from_coords(0, 0, 5, 5)
        );
    }

    #[test]
    fn test_detect_bounds_touches_row_and_column_zero() {
        let r = white_with(10, 10, &[(0, 4), (6, 0), (3, 3)]);
        assert_eq!(
            r.detect_bounds().unwrap(),
            BoundingBox::from_coords(0, 0, 6, 4)
        );
    }

    #[test]
    fn test_detect_bounds_alpha_only_difference() {
        let mut m = RasterMut::new(5, 5).unwrap();
        m.fill(WHITE);
        m.set_rgba(2, 2, 255, 255, 255, 254).unwrap();
        let r: Raster = m.into();
        assert_eq!(
            r.detect_bounds().unwrap(),
            BoundingBox::from_coords(2, 2, 2, 2)
        );
    }

    #[test]
    fn test_explicit_background_origin_pixel() {
        let mut m = RasterMut::new(6, 6).unwrap();
        m.fill(WHITE);
        m.set_pixel(0, 0, BLACK).unwrap();
        let r: Raster = m.into();
        assert_eq!(
            r.detect_bounds_with_background(WHITE).unwrap(),
            BoundingBox::from_coords(0, 0, 0, 0)
        );
    }

    #[test]
    fn test_single_pixel_on_column_zero() {
        let r = white_with(10, 10, &[(0, 5)]);
        assert_eq!(
            r.detect_bounds().unwrap(),
            BoundingBox::from_coords(0, 5, 0, 5)
        );
        let r = white_with(10, 10, &[(5, 0)]);
        assert_eq!(
            r.detect_bounds().unwrap(),
            BoundingBox::from_coords(5, 0, 5, 0)
        );
    }

    #[test]
    fn test_crop_copies_pixels() {
        let mut m = RasterMut::new(20, 20).unwrap();
        for y in 0..20 {
            for x in 0..20 {
                m.set_pixel(x, y, x + y * 20).unwrap();
            }
        }
        let r: Raster = m.into();
        let c = r.crop(&BoundingBox::from_coords(5, 6, 15, 12)).unwrap();
        assert_eq!(c.dimensions(), (10, 6));
        for y in 0..6 {
            for x in 0..10 {
                assert_eq!(c.get_pixel(x, y), Some((x + 5) + (y + 6) * 20));
            }
        }
    }

    #[test]
    fn test_crop_degenerate_box() {
        let r = Raster::new(10, 10).unwrap();
        let b = BoundingBox::from_coords(3, 3, 3, 8);
        assert!(matches!(r.crop(&b), Err(Error::InvalidBoundingBox(_))));
        let b = BoundingBox::from_coords(3, 8, 7, 2);
        assert!(matches!(r.crop(&b), Err(Error::InvalidBoundingBox(_))));
    }

    #[test]
    fn test_crop_out_of_range() {
        let r = Raster::new(10, 10).unwrap();
        let b = BoundingBox::from_coords(0, 0, 11, 5);
        assert!(matches!(
            r.crop(&b),
            Err(Error::BoundingBoxOutOfRange { width: 10, .. })
        ));
    }

    #[test]
    fn test_crop_full_extent() {
        let r = Raster::new_filled(10, 8, WHITE).unwrap();
        let c = r.crop(&BoundingBox::from_coords(0, 0, 10, 8)).unwrap();
        assert_eq!(c.dimensions(), (10, 8));
    }

    #[test]
    fn test_crop_foreground_on_last_row_and_column() {
        let r = white_with(12, 9, &[(2, 1), (11, 8)]);
        let b = r.detect_bounds().unwrap();
        assert_eq!(b.max, Point::new(11, 8));
        let c = r.crop(&b).unwrap();
        assert_eq!(c.dimensions(), (9, 7));
        assert_eq!(c.get_pixel(0, 0), Some(BLACK));
    }

    #[test]
    fn test_crop_single_pixel_bounds_fails() {
        let r = white_with(10, 10, &[(4, 4)]);
        let b = r.detect_bounds().unwrap();
        assert_eq!(b, BoundingBox::from_coords(4, 4, 4, 4));
        assert!(matches!(r.crop(&b), Err(Error::InvalidBoundingBox(_))));

        let r = white_with(10, 10, &[(0, 0)]);
        let b = r.detect_bounds_with_background(WHITE).unwrap();
        assert!(matches!(r.crop(&b), Err(Error::InvalidBoundingBox(_))));
    }
}
