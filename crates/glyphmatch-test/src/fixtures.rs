//! Synthetic test images
//!
//! Glyphs are described as text patterns, one string per row, where `#`
//! marks a foreground cell and any other character is background. Each
//! cell renders as a `cell x cell` block, surrounded by `pad` background
//! pixels on every side.
//!
//! Every letter pattern is 5 columns by 7 rows and touches all four edges
//! of that grid, so its detected bounding box always spans the whole
//! pattern regardless of cell size and padding. The letters also stay
//! distinct after normalization to the 5x7 grid, which drops the last
//! pattern row and column.

use glyphmatch_core::{Raster, RasterMut, color};

/// A glyph pattern: rows of `#` (foreground) and `.` (background)
pub type Pattern = &'static [&'static str];

/// Width of every letter pattern in cells
pub const PATTERN_WIDTH: u32 = 5;
/// Height of every letter pattern in cells
pub const PATTERN_HEIGHT: u32 = 7;

pub const LETTER_A: Pattern = &[
    ".###.", //
    "#...#", //
    "#...#", //
    "#####", //
    "#...#", //
    "#...#", //
    "#...#",
];

pub const LETTER_B: Pattern = &[
    "####.", //
    "#...#", //
    "#...#", //
    "####.", //
    "#...#", //
    "#...#", //
    "####.",
];

pub const LETTER_C: Pattern = &[
    ".####", //
    "#....", //
    "#....", //
    "#....", //
    "#....", //
    "#....", //
    ".####",
];

pub const LETTER_L: Pattern = &[
    "#....", //
    "#....", //
    "#....", //
    "#....", //
    "#....", //
    "#....", //
    "#####",
];

pub const LETTER_H: Pattern = &[
    "#...#", //
    "#...#", //
    "#...#", //
    "#####", //
    "#...#", //
    "#...#", //
    "#...#",
];

pub const LETTER_T: Pattern = &[
    "#####", //
    "..#..", //
    "..#..", //
    "..#..", //
    "..#..", //
    "..#..", //
    "..#..",
];

/// All letter patterns with their labels, in label order
pub const ALPHABET: &[(&str, Pattern)] = &[
    ("A", LETTER_A),
    ("B", LETTER_B),
    ("C", LETTER_C),
    ("H", LETTER_H),
    ("L", LETTER_L),
    ("T", LETTER_T),
];

/// Create a `width x height` raster with every pixel set to `pixel`.
///
/// # Panics
///
/// Panics if either dimension is 0.
pub fn solid(width: u32, height: u32, pixel: u32) -> Raster {
    Raster::new_filled(width, height, pixel).expect("solid raster dimensions must be non-zero")
}

/// Create a raster filled with `background` and `foreground` at `points`.
///
/// # Panics
///
/// Panics if either dimension is 0 or a point lies outside the raster.
pub fn with_points(
    width: u32,
    height: u32,
    background: u32,
    foreground: u32,
    points: &[(u32, u32)],
) -> Raster {
    let mut m = RasterMut::new(width, height).expect("raster dimensions must be non-zero");
    m.fill(background);
    for &(x, y) in points {
        m.set_pixel(x, y, foreground)
            .expect("fixture point must lie inside the raster");
    }
    m.into()
}

/// Render a pattern as black on white.
///
/// The result is `cols * cell + 2 * pad` by `rows * cell + 2 * pad` pixels.
pub fn render_glyph(pattern: Pattern, cell: u32, pad: u32) -> Raster {
    render_glyph_with(pattern, cell, pad, color::BLACK, color::WHITE)
}

/// Render a pattern with explicit foreground and background colors.
///
/// # Panics
///
/// Panics if `cell` is 0 or the pattern is empty.
pub fn render_glyph_with(
    pattern: Pattern,
    cell: u32,
    pad: u32,
    foreground: u32,
    background: u32,
) -> Raster {
    let cols = pattern.iter().map(|row| row.len()).max().unwrap_or(0) as u32;
    let rows = pattern.len() as u32;
    let width = cols * cell + 2 * pad;
    let height = rows * cell + 2 * pad;

    let mut m = RasterMut::new(width, height).expect("pattern and cell size must be non-empty");
    m.fill(background);
    for (cy, row) in pattern.iter().enumerate() {
        for (cx, ch) in row.chars().enumerate() {
            if ch != '#' {
                continue;
            }
            let x0 = pad + cx as u32 * cell;
            let y0 = pad + cy as u32 * cell;
            for y in y0..y0 + cell {
                for x in x0..x0 + cell {
                    m.set_pixel_unchecked(x, y, foreground);
                }
            }
        }
    }
    m.into()
}
