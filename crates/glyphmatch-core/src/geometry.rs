//! Point and BoundingBox - Pixel coordinates and foreground regions
//!
//! A [`BoundingBox`] stores its two corners directly. Detection produces
//! boxes whose corners are both foreground pixels (inclusive on both
//! ends); [`Raster::crop`](crate::Raster::crop) reads the max corner as
//! exclusive, so the crop extent is `max - min` on each axis.

use std::fmt;

/// An integer pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned region given by its min and max corners
///
/// Unlike an origin/size rectangle, a box built from a single pixel has
/// `min == max`. Construction performs no validation; operations that need
/// `max > min` check it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    /// Upper-left corner
    pub min: Point,
    /// Lower-right corner
    pub max: Point,
}

impl BoundingBox {
    /// Create a box from its two corners
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Create a box from raw corner coordinates
    pub const fn from_coords(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }

    /// Create the degenerate box covering a single point
    pub const fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Grow the box so that it covers `p`.
    pub fn include(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Horizontal crop extent `max.x - min.x` (0 when max <= min)
    #[inline]
    pub fn crop_width(&self) -> u32 {
        self.max.x.saturating_sub(self.min.x)
    }

    /// Vertical crop extent `max.y - min.y` (0 when max <= min)
    #[inline]
    pub fn crop_height(&self) -> u32 {
        self.max.y.saturating_sub(self.min.y)
    }

    /// Check whether max exceeds min on both axes
    #[inline]
    pub fn is_croppable(&self) -> bool {
        self.max.x > self.min.x && self.max.y > self.min.y
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.min, self.max)
    }
}
