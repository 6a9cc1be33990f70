//! rawgray-io - Raw image I/O
//!
//! Reads and writes headerless 8-bit grayscale files. A raw file carries no
//! dimensions, so the caller always supplies `height` and `width`.
//!
//! # Example
//!
//! ```
//! use rawgray_io::{decode, encode};
//!
//! let bytes = [0xFF, 0xFF, 0, 1, 2, 3, 4, 5, 6, 7];
//! // The two leading bytes are treated as a header and skipped
//! let grid = decode(&bytes, 2, 4).unwrap();
//! assert_eq!(grid.row(1), &[4, 5, 6, 7]);
//! assert_eq!(encode(&grid), &bytes[2..]);
//! ```

mod error;
pub mod raw;

pub use error::{IoError, IoResult};
pub use raw::{
    decode, encode, encode_checked, read_raw, read_raw_file, write_raw, write_raw_file,
};
