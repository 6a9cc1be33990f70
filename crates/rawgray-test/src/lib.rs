//! rawgray-test - Regression test framework for rawgray
//!
//! Tracks a numbered sequence of checks for one regression test and reports
//! every failure at the end instead of stopping at the first one. Two
//! modes are supported:
//!
//! - **Compare**: Run the checks and remove written outputs (default)
//! - **Display**: Run the checks and keep written outputs in `tests/regout`
//!
//! # Usage
//!
//! ```ignore
//! use rawgray_test::RegParams;
//!
//! let mut rp = RegParams::new("convolve");
//! rp.compare_values(255.0, grid.max_value() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display" (case-insensitive)

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use rawgray_core::Grid;

/// Load a raw test image from the test data directory
///
/// # Arguments
///
/// * `name` - File name (e.g., "ramp_48x32.raw")
/// * `height`, `width` - Image shape; raw files do not record it
pub fn load_test_grid(name: &str, height: u32, width: u32) -> TestResult<Grid> {
    let path = test_data_path(name);
    rawgray_io::read_raw_file(&path, height, width).map_err(|e| TestError::GridLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // rawgray-test is at crates/rawgray-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
