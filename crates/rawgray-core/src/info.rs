//! Diagnostic summaries
//!
//! Human-readable summaries (shape, min, max, sum, element type) of 1D sample
//! slices and 2D grids. The text is meant for eyeballing during experiments
//! and is not a stable, machine-readable format.
//!
//! ```text
//! Array info:
//!     Size:   [480, 640]
//!     Min:    0
//!     Max:    255
//!     Sum:    19584000
//!     Type:   i32
//! ```

use crate::Grid;
use std::fmt;

/// Element type name reported for every summary
const SAMPLE_TYPE: &str = "i32";

/// Shape of a summarized array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// 1D array of the given length
    OneD(usize),
    /// 2D grid of (height, width)
    TwoD(u32, u32),
}

/// Summary statistics of a sample array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridInfo {
    pub shape: Shape,
    pub min: i32,
    pub max: i32,
    pub sum: i64,
    pub dtype: &'static str,
}

impl fmt::Display for GridInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Array info:")?;
        match self.shape {
            Shape::OneD(len) => writeln!(f, "\tSize:\t{len}")?,
            Shape::TwoD(h, w) => writeln!(f, "\tSize:\t[{h}, {w}]")?,
        }
        writeln!(f, "\tMin:\t{}", self.min)?;
        writeln!(f, "\tMax:\t{}", self.max)?;
        writeln!(f, "\tSum:\t{}", self.sum)?;
        write!(f, "\tType:\t{}", self.dtype)
    }
}

impl Grid {
    /// Summarize this grid
    pub fn info(&self) -> GridInfo {
        let (min, max) = self.min_max();
        GridInfo {
            shape: Shape::TwoD(self.height(), self.width()),
            min,
            max,
            sum: self.sum(),
            dtype: SAMPLE_TYPE,
        }
    }
}

/// Summarize a 1D sample slice
///
/// Returns `None` for an empty slice, which has no min or max.
pub fn info_1d(samples: &[i32]) -> Option<GridInfo> {
    let min = *samples.iter().min()?;
    let max = *samples.iter().max()?;
    Some(GridInfo {
        shape: Shape::OneD(samples.len()),
        min,
        max,
        sum: samples.iter().map(|&v| v as i64).sum(),
        dtype: SAMPLE_TYPE,
    })
}

/// Print a summary of `grid` to stdout
pub fn print_info_2d(grid: &Grid) {
    println!("{}", grid.info());
}

/// Print a summary of `samples` to stdout; prints nothing for an empty slice
pub fn print_info_1d(samples: &[i32]) {
    if let Some(info) = info_1d(samples) {
        println!("{info}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_2d() {
        let grid = Grid::from_rows(&[vec![0, 50], vec![100, 150]]).unwrap();
        let info = grid.info();
        assert_eq!(info.shape, Shape::TwoD(2, 2));
        assert_eq!(info.min, 0);
        assert_eq!(info.max, 150);
        assert_eq!(info.sum, 300);
        assert_eq!(
            info.to_string(),
            "Array info:\n\tSize:\t[2, 2]\n\tMin:\t0\n\tMax:\t150\n\tSum:\t300\n\tType:\ti32"
        );
    }

    #[test]
    fn test_info_1d() {
        let info = info_1d(&[3, -1, 4, 1, 5]).unwrap();
        assert_eq!(info.shape, Shape::OneD(5));
        assert_eq!((info.min, info.max, info.sum), (-1, 5, 12));
        assert!(info.to_string().contains("\tSize:\t5\n"));
    }

    #[test]
    fn test_info_1d_empty() {
        assert!(info_1d(&[]).is_none());
    }
}
