//! Building a gallery from image files
//!
//! Labels come either from file names in a directory (`B_50x75.png` is
//! labeled `B`) or from an explicit label-to-path table.

use crate::error::{RecogError, RecogResult};
use crate::gallery::{Gallery, ReferencePrep};
use glyphmatch_io::{IoError, read_image};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default canonical width
pub const DEFAULT_WIDTH: u32 = 10;
/// Default canonical height
pub const DEFAULT_HEIGHT: u32 = 15;

#[derive(Debug, Clone)]
enum Source {
    Directory(PathBuf),
    Entries(Vec<(String, PathBuf)>),
}

/// Builder that loads reference images into a [`Gallery`]
///
/// # Examples
///
/// ```no_run
/// use glyphmatch_recog::{GalleryLoader, ReferencePrep};
///
/// let gallery = GalleryLoader::new("alphabet")
///     .size(10, 15)
///     .prep(ReferencePrep::Resample)
///     .skip_invalid(false)
///     .load()
///     .unwrap();
/// println!("{} references", gallery.len());
/// ```
#[derive(Debug, Clone)]
pub struct GalleryLoader {
    source: Source,
    width: u32,
    height: u32,
    prep: ReferencePrep,
    skip_invalid: bool,
}

impl GalleryLoader {
    /// Load every `*.png` file in `dir`, labeled by file name.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_source(Source::Directory(dir.into()))
    }

    /// Load an explicit list of `(label, path)` pairs.
    pub fn from_entries<I, L, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, P)>,
        L: Into<String>,
        P: Into<PathBuf>,
    {
        let entries = entries
            .into_iter()
            .map(|(label, path)| (label.into(), path.into()))
            .collect();
        Self::with_source(Source::Entries(entries))
    }

    fn with_source(source: Source) -> Self {
        Self {
            source,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            prep: ReferencePrep::default(),
            skip_invalid: true,
        }
    }

    /// Set the canonical size of the gallery.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set how each reference is prepared.
    pub fn prep(mut self, prep: ReferencePrep) -> Self {
        self.prep = prep;
        self
    }

    /// Skip unreadable or unusable files with a warning instead of failing.
    pub fn skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }

    /// Read the images and build the gallery.
    ///
    /// # Errors
    ///
    /// - [`RecogError::InvalidDimensions`] for a zero canonical dimension
    /// - [`RecogError::Io`] if the directory cannot be listed
    /// - The first per-file error when `skip_invalid` is off
    /// - [`RecogError::EmptyGallery`] if no file produced an entry
    pub fn load(&self) -> RecogResult<Gallery> {
        let mut gallery = Gallery::new(self.width, self.height)?;
        let entries = match &self.source {
            Source::Directory(dir) => scan_directory(dir)?,
            Source::Entries(entries) => entries.clone(),
        };

        for (label, path) in &entries {
            match load_entry(&mut gallery, label, path, self.prep) {
                Ok(()) => debug!(label = %label, path = %path.display(), "loaded reference"),
                Err(e) if self.skip_invalid => {
                    warn!(path = %path.display(), error = %e, "skipping gallery image");
                }
                Err(e) => return Err(e),
            }
        }

        if gallery.is_empty() {
            return Err(RecogError::EmptyGallery);
        }
        info!(
            entries = gallery.len(),
            width = self.width,
            height = self.height,
            "loaded gallery"
        );
        Ok(gallery)
    }
}

fn load_entry(
    gallery: &mut Gallery,
    label: &str,
    path: &Path,
    prep: ReferencePrep,
) -> RecogResult<()> {
    let raster = read_image(path)?;
    gallery.insert(label, &raster, prep)
}

/// List `(label, path)` for every PNG file in `dir`, sorted by path.
fn scan_directory(dir: &Path) -> RecogResult<Vec<(String, PathBuf)>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(IoError::from)? {
        let path = entry.map_err(IoError::from)?.path();
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if is_png && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    Ok(paths
        .into_iter()
        .map(|path| (label_from_path(&path), path))
        .collect())
}

/// Label for a reference file: the file stem up to the first `_`.
///
/// `B_50x75.png` gives `B`; `B.png` gives `B`. A stem that starts with
/// `_` gives an empty label, which the gallery rejects.
pub fn label_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    stem.split('_').next().unwrap_or_default().to_string()
}
