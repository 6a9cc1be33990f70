//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use rawgray_core::Grid;
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Run checks, discard written outputs (default)
    #[default]
    Compare,
    /// Run checks, keep written outputs for inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    /// Parse a mode name, case-insensitively
    ///
    /// Anything other than "display" selects `Compare`.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("display") {
            Self::Display
        } else {
            Self::Compare
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "convolve")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode (compare or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two grids for exact equality
    ///
    /// # Returns
    ///
    /// `true` if shape and every sample match, `false` otherwise.
    pub fn compare_grids(&mut self, expected: &Grid, actual: &Grid) -> bool {
        self.index += 1;

        if expected.shape() != actual.shape() {
            self.fail(format!(
                "Failure in {}_reg: grid comparison for index {} - shape {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.shape(),
                actual.shape()
            ));
            return false;
        }

        let mismatch = expected
            .data()
            .iter()
            .zip(actual.data())
            .position(|(a, b)| a != b);
        if let Some(idx) = mismatch {
            let width = expected.width() as usize;
            self.fail(format!(
                "Failure in {}_reg: grid comparison for index {} - sample mismatch at ({}, {})",
                self.test_name,
                self.index,
                idx / width,
                idx % width
            ));
            return false;
        }

        true
    }

    /// Compare two binary data arrays
    ///
    /// # Returns
    ///
    /// `true` if data is identical, `false` otherwise.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            self.fail(format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            ));
            false
        } else {
            true
        }
    }

    /// Write a grid as a raw file in the regout directory and read it back
    ///
    /// The reloaded grid must match `grid` after 8-bit narrowing. In compare
    /// mode the file is removed afterwards.
    pub fn write_grid_and_check(&mut self, grid: &Grid) -> TestResult<()> {
        self.index += 1;

        let local_path = format!(
            "{}/{}.{:02}.raw",
            regout_dir(),
            self.test_name,
            self.index
        );

        rawgray_io::write_raw_file(grid, &local_path).map_err(|e| TestError::GridWrite {
            path: local_path.clone(),
            message: e.to_string(),
        })?;

        let reloaded = rawgray_io::read_raw_file(&local_path, grid.height(), grid.width())
            .map_err(|e| TestError::GridLoad {
                path: local_path.clone(),
                message: e.to_string(),
            })?;

        let narrowed = grid.map(|v| v as u8 as i32);
        if reloaded != narrowed {
            self.fail(format!(
                "Failure in {}_reg, index {}: reloaded {} differs from written grid",
                self.test_name, self.index, local_path
            ));
        }

        if self.mode == RegTestMode::Compare {
            fs::remove_file(&local_path)?;
        }

        Ok(())
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }
}
