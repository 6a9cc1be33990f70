//! rawgray Core - Basic data structures for grayscale processing
//!
//! This crate provides the data structures shared by the rest of the
//! rawgray workspace:
//!
//! - [`Grid`] - A 2D array of `i32` samples addressed by (row, column)
//! - [`GridInfo`] - Summary statistics used for diagnostic printing
//! - [`Error`] - The core error type
//!
//! Samples are kept as `i32` even though images on disk are 8-bit, so that
//! intermediate results (negative differences, weighted sums) do not
//! overflow before they are normalized back into range.

pub mod error;
pub mod grid;
pub mod info;

pub use error::{Error, Result};
pub use grid::Grid;
pub use info::{GridInfo, Shape, info_1d, print_info_1d, print_info_2d};
