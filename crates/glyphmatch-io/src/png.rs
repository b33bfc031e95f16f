//! PNG image format support
//!
//! Every PNG color type and bit depth decodes to 8-bit RGBA. Encoding
//! always writes 8-bit RGBA, so a write/read round-trip is lossless.

use crate::{IoError, IoResult};
use glyphmatch_core::{Raster, RasterMut, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// Palette images are expanded to RGB(A), low bit depths are expanded to 8
/// bits and 16-bit samples are stripped to their high byte. Images without
/// an alpha channel get alpha 255.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let color_type = output_info.color_type;
    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth: {:?}",
            output_info.bit_depth
        )));
    }

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    if bytes_per_row < width as usize * samples
        || data.len() < bytes_per_row * height as usize
    {
        return Err(IoError::InvalidData(format!(
            "PNG frame too short for {}x{} {:?}",
            width, height, color_type
        )));
    }

    let mut raster = RasterMut::new(width, height)?;
    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        let src = &data[row_start..row_start + width as usize * samples];
        for (dst, px) in raster
            .row_data_mut(y)
            .iter_mut()
            .zip(src.chunks_exact(samples))
        {
            *dst = match px {
                &[g] => color::compose_rgb(g, g, g),
                &[g, a] => color::compose_rgba(g, g, g, a),
                &[r, g, b] => color::compose_rgb(r, g, b),
                &[r, g, b, a] => color::compose_rgba(r, g, b, a),
                _ => 0,
            };
        }
    }

    Ok(raster.into())
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(&raster.to_rgba_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
