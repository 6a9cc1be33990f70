//! rawgray - Raw grayscale image processing
//!
//! Loads headerless 8-bit grayscale files into integer grids, filters them
//! with 2D convolution, normalizes intensity ranges and writes the result
//! back as raw bytes.
//!
//! # Overview
//!
//! - Raw image I/O (`io`): decode/encode and file helpers
//! - Filtering (`filter`): convolution, box blur, normalization
//! - Diagnostics: [`print_info_2d`] / [`print_info_1d`]
//!
//! # Example
//!
//! ```
//! use rawgray::filter::{Kernel, convolve, normalize};
//! use rawgray::io::{decode, encode};
//!
//! let bytes: Vec<u8> = (0..16).map(|v| v * 16).collect();
//! let image = decode(&bytes, 4, 4).unwrap();
//!
//! let edges = convolve(&image, &Kernel::laplacian()).unwrap();
//! let shown = normalize(&edges).unwrap();
//! assert_eq!(encode(&shown).len(), 16);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rawgray_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rawgray_filter as filter;
pub use rawgray_io as io;
