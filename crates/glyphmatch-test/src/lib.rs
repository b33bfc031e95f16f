//! glyphmatch-test - Regression test harness for glyphmatch
//!
//! Provides a small regression framework and synthetic fixtures so that no
//! test needs binary image data checked into the repository. Two modes:
//!
//! - **Compare**: Run checks and record failures (default)
//! - **Display**: Additionally write intermediate rasters to the regout
//!   directory for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use glyphmatch_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("bounds");
//! let glyph = fixtures::render_glyph(fixtures::LETTER_B, 4, 3);
//! rp.compare_values(26.0, glyph.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // glyphmatch-test is at crates/glyphmatch-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Create (if needed) and return a per-test scratch directory under regout.
///
/// Any previous contents are removed so that directory scans see only the
/// files the current test writes.
pub fn scratch_dir(name: &str) -> TestResult<String> {
    let path = format!("{}/{}", regout_dir(), name);
    if std::path::Path::new(&path).exists() {
        std::fs::remove_dir_all(&path)?;
    }
    std::fs::create_dir_all(&path).map_err(|e| TestError::DirectoryCreate {
        path: path.clone(),
        message: e.to_string(),
    })?;
    Ok(path)
}
