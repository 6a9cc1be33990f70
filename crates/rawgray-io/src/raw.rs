//! Raw 8-bit grayscale format
//!
//! A raw file is a flat run of unsigned bytes, one per sample, in row-major
//! order. There is no magic number and no dimension field.
//!
//! Files that are longer than `height * width` bytes are accepted: the
//! trailing `height * width` bytes are the image and everything before them
//! is an opaque header that gets discarded. No format detection is done.

use crate::{IoError, IoResult};
use log::{debug, info};
use rawgray_core::Grid;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Decode raw bytes into a `height` x `width` grid.
///
/// Only the last `height * width` bytes of `data` are used.
///
/// # Errors
///
/// * `IoError::Core` if `height` or `width` is zero
/// * `IoError::Shape` if `data` is shorter than `height * width`
pub fn decode(data: &[u8], height: u32, width: u32) -> IoResult<Grid> {
    // Check the shape against the buffer before allocating anything, so a
    // short buffer with a huge declared shape fails instead of aborting.
    if height == 0 || width == 0 {
        return Err(rawgray_core::Error::InvalidDimension { height, width }.into());
    }
    let expected = (height as usize) * (width as usize);

    if data.len() < expected {
        return Err(IoError::Shape {
            expected,
            actual: data.len(),
        });
    }

    let skip = data.len() - expected;
    if skip > 0 {
        debug!("raw decode: skipping {skip} leading header bytes");
    }

    let samples = data[skip..].iter().map(|&b| b as i32).collect();
    Ok(Grid::from_data(height, width, samples)?)
}

/// Encode a grid as raw bytes, one per sample.
///
/// Samples outside `0..=255` keep only their low 8 bits (`-1` becomes
/// `255`, `256` becomes `0`). Use [`encode_checked`] to reject them instead.
pub fn encode(grid: &Grid) -> Vec<u8> {
    grid.data().iter().map(|&v| v as u8).collect()
}

/// Encode a grid as raw bytes, failing on the first out-of-range sample.
///
/// # Errors
///
/// Returns `IoError::OutOfRange` with the sample's location.
pub fn encode_checked(grid: &Grid) -> IoResult<Vec<u8>> {
    let mut out = Vec::with_capacity(grid.len());
    for (row, samples) in grid.rows().enumerate() {
        for (col, &value) in samples.iter().enumerate() {
            let byte = u8::try_from(value).map_err(|_| IoError::OutOfRange {
                row: row as u32,
                col: col as u32,
                value,
            })?;
            out.push(byte);
        }
    }
    Ok(out)
}

/// Read a raw image from a reader.
///
/// The whole stream is read before decoding.
pub fn read_raw<R: Read>(mut reader: R, height: u32, width: u32) -> IoResult<Grid> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    decode(&buf, height, width)
}

/// Read a raw image file.
pub fn read_raw_file(path: impl AsRef<Path>, height: u32, width: u32) -> IoResult<Grid> {
    let file = File::open(path.as_ref())?;
    read_raw(file, height, width)
}

/// Write a grid as raw bytes to a writer.
///
/// Narrowing follows [`encode`]. The bytes go out in a single `write_all`.
pub fn write_raw<W: Write>(grid: &Grid, mut writer: W) -> IoResult<()> {
    writer.write_all(&encode(grid))?;
    writer.flush()?;
    Ok(())
}

/// Write a grid to a raw image file, replacing any existing file.
///
/// A failed write leaves the file in an unspecified state.
pub fn write_raw_file(grid: &Grid, path: impl AsRef<Path>) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_raw(grid, file)?;
    info!("image was written to {}", path.display());
    Ok(())
}
