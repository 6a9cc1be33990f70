//! I/O error types
//!
//! Provides a unified error type for raw image I/O. Short inputs, strict
//! encoding failures and file-system errors all map into `IoError` so that
//! callers only need to handle one error type.

use thiserror::Error;

/// Error type for raw image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The buffer holds fewer samples than the requested shape needs
    #[error("insufficient data: need {expected} bytes for the requested shape, got {actual}")]
    Shape { expected: usize, actual: usize },

    /// A sample does not fit in an unsigned byte (strict encoding only)
    #[error("sample {value} at ({row}, {col}) is outside 0..=255")]
    OutOfRange { row: u32, col: u32, value: i32 },

    /// An error from the core library (e.g. invalid dimensions)
    #[error("core error: {0}")]
    Core(#[from] rawgray_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
