//! Command-line arguments

use clap::{Parser, ValueEnum};
use glyphmatch::recog::{DEFAULT_HEIGHT, DEFAULT_WIDTH, ReferencePrep};
use std::path::PathBuf;

/// Classify a single glyph image against a gallery of labeled references
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Query image (PNG, BMP, JPEG, GIF, TIFF or WebP)
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// Directory of reference PNGs; the label is the file name up to the first `_`
    #[arg(long, value_name = "DIR")]
    pub gallery: PathBuf,

    /// Canonical width
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_name = "PIXELS")]
    pub width: u32,

    /// Canonical height
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_name = "PIXELS")]
    pub height: u32,

    /// How reference images are brought to the canonical size
    #[arg(long, value_enum, default_value_t = Prep::Resample)]
    pub prep: Prep,

    /// Write the normalized query to this PNG file
    #[arg(long, value_name = "FILE")]
    pub save_normalized: Option<PathBuf>,

    /// Fail on the first unusable reference instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Reference preparation mode
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prep {
    /// Resample the whole reference image
    Resample,
    /// Detect bounds and crop before resampling
    Normalize,
}

impl From<Prep> for ReferencePrep {
    fn from(prep: Prep) -> Self {
        match prep {
            Prep::Resample => ReferencePrep::Resample,
            Prep::Normalize => ReferencePrep::Normalize,
        }
    }
}
