//! Resample regression test
//!
//! Nearest-point resampling of rendered glyphs to fixed sizes.

use glyphmatch_core::color;
use glyphmatch_test::{RegParams, fixtures};
use glyphmatch_transform::{resample, scale_by_sampling};

#[test]
fn resample_reg() {
    let mut rp = RegParams::new("resample");

    let glyph = fixtures::render_glyph(fixtures::LETTER_B, 10, 5);
    let (w, h) = glyph.dimensions();
    eprintln!("Glyph size: {}x{}", w, h);

    // --- Test 1: Output is exactly the requested size ---
    for (tw, th) in [(10, 15), (1, 1), (w, h), (2 * w, 3 * h), (7, 200)] {
        let out = resample(&glyph, tw, th).expect("resample");
        rp.compare_values(tw as f64, out.width() as f64, 0.0);
        rp.compare_values(th as f64, out.height() as f64, 0.0);
    }

    // --- Test 2: Integral reduction picks one pixel per cell ---
    // Without padding every 10x10 cell maps to one output pixel
    let unpadded = fixtures::render_glyph(fixtures::LETTER_B, 10, 0);
    let reduced = resample(
        &unpadded,
        fixtures::PATTERN_WIDTH,
        fixtures::PATTERN_HEIGHT,
    )
    .expect("resample to pattern size");
    let expected = fixtures::render_glyph(fixtures::LETTER_B, 1, 0);
    rp.compare_rasters(&expected, &reduced);
    rp.write_raster(&reduced, "b_cells").expect("write reduced");

    // --- Test 3: Integral enlargement reproduces the rendering ---
    let enlarged = resample(&expected, 5 * 4, 7 * 4).expect("resample up");
    rp.compare_rasters(&fixtures::render_glyph(fixtures::LETTER_B, 4, 0), &enlarged);

    // --- Test 4: Solid input stays solid ---
    let white = fixtures::solid(50, 75, color::WHITE);
    let out = resample(&white, 10, 15).expect("resample solid");
    rp.compare_rasters(&fixtures::solid(10, 15, color::WHITE), &out);

    // --- Test 5: Scale factors ---
    let half = scale_by_sampling(&unpadded, 0.5, 0.5).expect("scale 0.5");
    rp.compare_values(25.0, half.width() as f64, 0.0);
    rp.compare_values(35.0, half.height() as f64, 0.0);
    let double = scale_by_sampling(&expected, 2.0, 2.0).expect("scale 2");
    rp.compare_rasters(&fixtures::render_glyph(fixtures::LETTER_B, 2, 0), &double);

    assert!(rp.cleanup(), "resample regression test failed");
}
