//! rawgray-filter - Grid filtering operations
//!
//! This crate provides:
//!
//! - Convolution with square, odd-sized kernels and zero padding
//! - Box blur built on top of convolution
//! - Intensity normalization into `[0, ceil]`

pub mod convolve;
mod error;
pub mod kernel;
pub mod normalize;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{box_blur, convolve, convolve_grid, convolve_raw};
pub use normalize::{DEFAULT_CEIL, normalize, normalize_to, stretch, stretch_to};
