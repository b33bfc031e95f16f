//! glyphmatch-io - Image I/O for glyphmatch
//!
//! Reads query and reference images into [`Raster`]s and writes rasters
//! back out as PNG.
//!
//! - [`read_png`] / [`write_png`] - PNG codec over any reader/writer
//! - [`read_image`] / [`read_image_mem`] - Format detection by magic bytes,
//!   then decode to 8-bit RGBA
//! - [`write_image`] - PNG output to a file path

mod error;
pub mod format;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use self::png::{read_png, write_png};

use glyphmatch_core::Raster;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor};
use std::path::Path;
use tracing::debug;

/// Read an image file into an RGBA raster.
///
/// The format is detected from the file contents, not the extension. PNG
/// goes through [`read_png`]; BMP, JPEG, GIF, TIFF and WebP are decoded by
/// the `image` crate.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let raster = read_image_mem(&bytes)?;
    debug!(
        path = %path.display(),
        width = raster.width(),
        height = raster.height(),
        "read image"
    );
    Ok(raster)
}

/// Decode an in-memory image into an RGBA raster.
pub fn read_image_mem(data: &[u8]) -> IoResult<Raster> {
    match detect_format_from_bytes(data)? {
        ImageFormat::Png => read_png(Cursor::new(data)),
        other => decode_with_image(data, other),
    }
}

fn decode_with_image(data: &[u8], format: ImageFormat) -> IoResult<Raster> {
    let decoded = image::load_from_memory(data)
        .map_err(|e| IoError::DecodeError(format!("{:?} decode error: {}", format, e)))?
        .to_rgba8();
    let (width, height) = decoded.dimensions();
    Ok(Raster::from_rgba_bytes(width, height, decoded.as_raw())?)
}

/// Write a raster to `path` as PNG.
///
/// Missing parent directories are created.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    write_png(raster, BufWriter::new(file))?;
    debug!(
        path = %path.display(),
        width = raster.width(),
        height = raster.height(),
        "wrote image"
    );
    Ok(())
}
