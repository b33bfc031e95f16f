//! Reference gallery
//!
//! A [`Gallery`] maps labels to reference rasters that all share one
//! canonical size. Entries are kept in label order, which is also the
//! order classification visits them in.

use crate::error::{RecogError, RecogResult};
use crate::normalize::normalize;
use glyphmatch_core::Raster;
use glyphmatch_transform::resample;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tracing::debug;

/// How a reference image is brought to the canonical size on insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferencePrep {
    /// Resample the whole image; for references that are already cropped
    /// to the glyph (default)
    #[default]
    Resample,
    /// Apply the full query normalization (bounds, crop, resample)
    Normalize,
}

/// Labeled reference rasters at a fixed canonical size
///
/// Built once, then only read. Iteration is lexicographic by label.
///
/// # Examples
///
/// ```
/// use glyphmatch_core::{Raster, color};
/// use glyphmatch_recog::{Gallery, ReferencePrep};
///
/// let mut gallery = Gallery::new(10, 10).unwrap();
/// let white = Raster::new_filled(20, 20, color::WHITE).unwrap();
/// gallery.insert("B", &white, ReferencePrep::Resample).unwrap();
/// assert_eq!(gallery.get("B").unwrap().dimensions(), (10, 10));
/// ```
#[derive(Debug, Clone)]
pub struct Gallery {
    width: u32,
    height: u32,
    entries: BTreeMap<String, Raster>,
}

impl Gallery {
    /// Create an empty gallery with the given canonical size.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidDimensions`] if either dimension is 0.
    pub fn new(width: u32, height: u32) -> RecogResult<Self> {
        if width == 0 || height == 0 {
            return Err(RecogError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            entries: BTreeMap::new(),
        })
    }

    /// Canonical width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canonical height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the gallery has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a reference raster under `label`.
    ///
    /// The stored raster is derived from `raster` according to `prep` and is
    /// always exactly the canonical size.
    ///
    /// # Errors
    ///
    /// - [`RecogError::InvalidLabel`] for an empty or all-whitespace label
    /// - [`RecogError::DuplicateLabel`] if `label` is already present
    /// - Any normalization error from `prep`
    pub fn insert(
        &mut self,
        label: impl Into<String>,
        raster: &Raster,
        prep: ReferencePrep,
    ) -> RecogResult<()> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(RecogError::InvalidLabel(label));
        }

        let (width, height) = (self.width, self.height);
        let slot = match self.entries.entry(label) {
            Entry::Occupied(e) => return Err(RecogError::DuplicateLabel(e.key().clone())),
            Entry::Vacant(e) => e,
        };

        let reference = match prep {
            ReferencePrep::Resample => resample(raster, width, height)?,
            ReferencePrep::Normalize => normalize(raster, width, height)?,
        };
        debug!(label = %slot.key(), ?prep, "added gallery entry");
        slot.insert(reference);
        Ok(())
    }

    /// Get the reference raster for `label`.
    pub fn get(&self, label: &str) -> Option<&Raster> {
        self.entries.get(label)
    }

    /// Labels in iteration order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(label, raster)` pairs in iteration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Raster)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphmatch_core::{RasterMut, color};

    #[test]
    fn test_new_invalid_size() {
        assert!(matches!(
            Gallery::new(0, 15),
            Err(RecogError::InvalidDimensions {
                width: 0,
                height: 15
            })
        ));
        assert!(Gallery::new(10, 0).is_err());
    }

    #[test]
    fn test_insert_resamples_to_canonical_size() {
        let mut g = Gallery::new(10, 15).unwrap();
        let r = Raster::new_filled(50, 75, color::BLACK).unwrap();
        g.insert("A", &r, ReferencePrep::Resample).unwrap();
        assert_eq!(g.len(), 1);
        assert_eq!(g.get("A").unwrap().dimensions(), (10, 15));
        assert!(g.get("Z").is_none());
    }

    #[test]
    fn test_insert_normalize_crops_first() {
        let mut m = RasterMut::new(40, 40).unwrap();
        m.fill(color::WHITE);
        for y in 10..30 {
            for x in 5..25 {
                m.set_pixel(x, y, color::BLACK).unwrap();
            }
        }
        let r: Raster = m.into();

        let mut g = Gallery::new(4, 4).unwrap();
        g.insert("sq", &r, ReferencePrep::Normalize).unwrap();
        g.insert("raw", &r, ReferencePrep::Resample).unwrap();
        let normalized = g.get("sq").unwrap();
        assert!(normalized.data().iter().all(|&p| p == color::BLACK));
        let resampled = g.get("raw").unwrap();
        assert_eq!(resampled.get_pixel(0, 0), Some(color::WHITE));
    }

    #[test]
    fn test_insert_rejects_bad_labels() {
        let mut g = Gallery::new(2, 2).unwrap();
        let r = Raster::new_filled(2, 2, color::WHITE).unwrap();
        assert!(matches!(
            g.insert("", &r, ReferencePrep::Resample),
            Err(RecogError::InvalidLabel(_))
        ));
        assert!(matches!(
            g.insert("  ", &r, ReferencePrep::Resample),
            Err(RecogError::InvalidLabel(_))
        ));
        g.insert("B", &r, ReferencePrep::Resample).unwrap();
        assert!(matches!(
            g.insert("B", &r, ReferencePrep::Resample),
            Err(RecogError::DuplicateLabel(label)) if label == "B"
        ));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn test_failed_normalize_leaves_gallery_unchanged() {
        let mut g = Gallery::new(2, 2).unwrap();
        let blank = Raster::new_filled(8, 8, color::WHITE).unwrap();
        assert!(g.insert("A", &blank, ReferencePrep::Normalize).is_err());
        assert!(g.is_empty());
    }

    #[test]
    fn test_iteration_is_label_ordered() {
        let mut g = Gallery::new(1, 1).unwrap();
        let r = Raster::new_filled(1, 1, color::WHITE).unwrap();
        for label in ["c", "A", "b", "B", "a"] {
            g.insert(label, &r, ReferencePrep::Resample).unwrap();
        }
        let labels: Vec<&str> = g.labels().collect();
        assert_eq!(labels, vec!["A", "B", "a", "b", "c"]);
        assert_eq!(g.iter().count(), 5);
    }
}
