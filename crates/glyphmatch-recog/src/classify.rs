//! Nearest-neighbor classification
//!
//! A query is normalized to the gallery's canonical size and compared
//! against every entry with [`Raster::distance`]. The entry with the
//! strictly smallest distance wins; on a tie the entry visited first wins,
//! and entries are visited in label order.

use crate::error::{RecogError, RecogResult};
use crate::gallery::Gallery;
use crate::normalize::normalize;
use glyphmatch_core::{Error as CoreError, Raster};
use tracing::{debug, info};

/// Outcome of classifying one query
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// Label of the nearest gallery entry
    pub label: String,
    /// Distance to the nearest gallery entry
    pub distance: f64,
    /// Distance to every gallery entry, in label order
    pub scores: Vec<(String, f64)>,
}

impl ClassificationResult {
    /// Scores sorted by increasing distance, ties in label order.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .scores
            .iter()
            .map(|(label, d)| (label.as_str(), *d))
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked
    }
}

/// Classify a raw glyph raster against `gallery`.
///
/// # Errors
///
/// - [`RecogError::EmptyGallery`] if the gallery has no entries; checked
///   before the query is looked at
/// - Any error from [`normalize`] on the query
///
/// # Examples
///
/// ```
/// use glyphmatch_core::{RasterMut, color};
/// use glyphmatch_recog::{Gallery, ReferencePrep, classify};
///
/// let mut m = RasterMut::new(20, 20).unwrap();
/// m.fill(color::WHITE);
/// for y in 4..16 {
///     for x in 6..14 {
///         m.set_pixel(x, y, color::BLACK).unwrap();
///     }
/// }
/// let query = m.into();
///
/// let mut gallery = Gallery::new(10, 15).unwrap();
/// let black = glyphmatch_core::Raster::new_filled(10, 15, color::BLACK).unwrap();
/// let white = glyphmatch_core::Raster::new_filled(10, 15, color::WHITE).unwrap();
/// gallery.insert("bar", &black, ReferencePrep::Resample).unwrap();
/// gallery.insert("space", &white, ReferencePrep::Resample).unwrap();
///
/// let result = classify(&query, &gallery).unwrap();
/// assert_eq!(result.label, "bar");
/// assert_eq!(result.distance, 0.0);
/// ```
pub fn classify(query: &Raster, gallery: &Gallery) -> RecogResult<ClassificationResult> {
    if gallery.is_empty() {
        return Err(RecogError::EmptyGallery);
    }
    let normalized = normalize(query, gallery.width(), gallery.height())?;
    classify_normalized(&normalized, gallery)
}

/// Classify a query that is already at the gallery's canonical size.
///
/// # Errors
///
/// - [`RecogError::EmptyGallery`] if the gallery has no entries
/// - [`glyphmatch_core::Error::SizeMismatch`] if the query is not the
///   canonical size
pub fn classify_normalized(
    query: &Raster,
    gallery: &Gallery,
) -> RecogResult<ClassificationResult> {
    if gallery.is_empty() {
        return Err(RecogError::EmptyGallery);
    }
    let canonical = (gallery.width(), gallery.height());
    if query.dimensions() != canonical {
        return Err(CoreError::SizeMismatch {
            expected: canonical,
            actual: query.dimensions(),
        }
        .into());
    }

    let mut scores = Vec::with_capacity(gallery.len());
    let mut best: Option<(&str, f64)> = None;
    for (label, reference) in gallery.iter() {
        let distance = query.distance(reference)?;
        debug!(label, distance, "scored gallery entry");
        scores.push((label.to_string(), distance));
        // Strict comparison keeps the earliest label on ties
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((label, distance));
        }
    }

    let (label, distance) = best.ok_or(RecogError::EmptyGallery)?;
    info!(label, distance, candidates = scores.len(), "classified glyph");
    Ok(ClassificationResult {
        label: label.to_string(),
        distance,
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReferencePrep;
    use glyphmatch_core::{RasterMut, color};

    fn solid(width: u32, height: u32, pixel: u32) -> Raster {
        Raster::new_filled(width, height, pixel).unwrap()
    }

    fn black_white_gallery() -> Gallery {
        let mut g = Gallery::new(10, 10).unwrap();
        g.insert("A", &solid(10, 10, color::BLACK), ReferencePrep::Resample)
            .unwrap();
        g.insert("B", &solid(10, 10, color::WHITE), ReferencePrep::Resample)
            .unwrap();
        g
    }

    #[test]
    fn test_classify_normalized_exact_match() {
        let g = black_white_gallery();
        let r = classify_normalized(&solid(10, 10, color::WHITE), &g).unwrap();
        assert_eq!(r.label, "B");
        assert_eq!(r.distance, 0.0);
        assert_eq!(r.scores.len(), 2);
        assert_eq!(r.scores[0].0, "A");
        assert!((r.scores[0].1 - (300.0f64 * 255.0 * 255.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_classify_solid_query_is_empty_glyph() {
        let g = black_white_gallery();
        assert!(matches!(
            classify(&solid(10, 10, color::WHITE), &g),
            Err(RecogError::Core(CoreError::EmptyGlyph))
        ));
    }

    #[test]
    fn test_empty_gallery_checked_first() {
        let g = Gallery::new(10, 10).unwrap();
        // The query would fail normalization too; the gallery check wins
        let blank = solid(3, 3, color::WHITE);
        assert!(matches!(classify(&blank, &g), Err(RecogError::EmptyGallery)));
        assert!(matches!(
            classify_normalized(&blank, &g),
            Err(RecogError::EmptyGallery)
        ));
    }

    #[test]
    fn test_classify_normalized_size_mismatch() {
        let g = black_white_gallery();
        assert!(matches!(
            classify_normalized(&solid(10, 15, color::WHITE), &g),
            Err(RecogError::Core(CoreError::SizeMismatch {
                expected: (10, 10),
                actual: (10, 15)
            }))
        ));
    }

    #[test]
    fn test_tie_picks_first_label() {
        let mut g = Gallery::new(4, 4).unwrap();
        let q = solid(4, 4, color::compose_rgb(90, 90, 90));
        g.insert("Y", &q, ReferencePrep::Resample).unwrap();
        g.insert("X", &q, ReferencePrep::Resample).unwrap();
        g.insert("Z", &solid(4, 4, color::BLACK), ReferencePrep::Resample)
            .unwrap();
        for _ in 0..10 {
            let r = classify_normalized(&q, &g).unwrap();
            assert_eq!(r.label, "X");
            assert_eq!(r.distance, 0.0);
        }
    }

    #[test]
    fn test_ranked_orders_by_distance() {
        let mut g = Gallery::new(2, 2).unwrap();
        g.insert("far", &solid(2, 2, color::BLACK), ReferencePrep::Resample)
            .unwrap();
        g.insert(
            "near",
            &solid(2, 2, color::compose_rgb(250, 250, 250)),
            ReferencePrep::Resample,
        )
        .unwrap();
        g.insert("exact", &solid(2, 2, color::WHITE), ReferencePrep::Resample)
            .unwrap();
        let r = classify_normalized(&solid(2, 2, color::WHITE), &g).unwrap();
        let labels: Vec<&str> = r.ranked().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["exact", "near", "far"]);
    }

    #[test]
    fn test_classify_full_pipeline() {
        let mut m = RasterMut::new(30, 30).unwrap();
        m.fill(color::WHITE);
        // Left half of the glyph box black, right half gray
        for y in 5..26 {
            for x in 5..26 {
                let px = if x < 15 {
                    color::BLACK
                } else {
                    color::compose_rgb(128, 128, 128)
                };
                m.set_pixel(x, y, px).unwrap();
            }
        }
        let query: Raster = m.into();

        let mut g = Gallery::new(2, 1).unwrap();
        let mut left_black = RasterMut::new(2, 1).unwrap();
        left_black.set_pixel(0, 0, color::BLACK).unwrap();
        left_black
            .set_pixel(1, 0, color::compose_rgb(128, 128, 128))
            .unwrap();
        g.insert("split", &left_black.into(), ReferencePrep::Resample)
            .unwrap();
        g.insert("white", &solid(2, 1, color::WHITE), ReferencePrep::Resample)
            .unwrap();

        let r = classify(&query, &g).unwrap();
        assert_eq!(r.label, "split");
        assert_eq!(r.distance, 0.0);
    }
}
