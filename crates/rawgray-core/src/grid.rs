//! Grid - Integer sample grid
//!
//! `Grid` is a 2D array of `i32` values addressed by (row, column). It is the
//! in-memory form of a grayscale image and of integer-valued kernels.
//!
//! # Examples
//!
//! ```
//! use rawgray_core::Grid;
//!
//! // Create a 4-row, 6-column grid
//! let mut grid = Grid::new(4, 6).unwrap();
//!
//! // Set and get sample values
//! grid.set(2, 3, 200).unwrap();
//! assert_eq!(grid.get(2, 3).unwrap(), 200);
//!
//! // Get statistics
//! let (max_val, row, col) = grid.max();
//! assert_eq!((max_val, row, col), (200, 2, 3));
//! ```

use crate::error::{Error, Result};

/// Integer sample grid
///
/// A 2D array of `i32` values with a fixed shape. The shape is validated at
/// construction and never changes afterwards.
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The sample at
/// (row, col) is at index `row * width + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows
    height: u32,
    /// Number of columns
    width: u32,
    /// Sample data (row-major, no padding)
    data: Vec<i32>,
}

impl Grid {
    /// Create a new grid with all samples set to zero
    ///
    /// # Arguments
    ///
    /// * `height` - Number of rows (must be > 0)
    /// * `width` - Number of columns (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if height or width is 0.
    pub fn new(height: u32, width: u32) -> Result<Self> {
        Self::new_with_value(height, width, 0)
    }

    /// Create a new grid with all samples set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if height or width is 0.
    pub fn new_with_value(height: u32, width: u32, value: i32) -> Result<Self> {
        check_dimensions(height, width)?;

        let size = (height as usize) * (width as usize);
        Ok(Grid {
            height,
            width,
            data: vec![value; size],
        })
    }

    /// Create a grid from row-major sample data
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or the data length
    /// doesn't match `height * width`.
    pub fn from_data(height: u32, width: u32, data: Vec<i32>) -> Result<Self> {
        check_dimensions(height, width)?;

        let expected_size = (height as usize) * (width as usize);
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                height,
                width,
                expected_size
            )));
        }

        Ok(Grid {
            height,
            width,
            data,
        })
    }

    /// Create a grid from a list of rows
    ///
    /// Every row must have the same, non-zero length.
    ///
    /// ```
    /// use rawgray_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[vec![0, 1, 2], vec![3, 4, 5]]).unwrap();
    /// assert_eq!(grid.shape(), (2, 3));
    /// assert_eq!(grid.get(1, 0).unwrap(), 3);
    /// ```
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        check_dimensions(height, width)?;

        let mut data = Vec::with_capacity((height as usize) * (width as usize));
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width as usize {
                return Err(Error::InvalidParameter(format!(
                    "row {} has {} samples, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(Grid {
            height,
            width,
            data,
        })
    }

    /// Get the number of rows
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of columns
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the shape as (height, width)
    #[inline]
    pub fn shape(&self) -> (u32, u32) {
        (self.height, self.width)
    }

    /// Get the total number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; a grid has at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the sample at (row, col)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Result<i32> {
        let idx = self.checked_index(row, col)?;
        Ok(self.data[idx])
    }

    /// Set the sample at (row, col)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set(&mut self, row: u32, col: u32, value: i32) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Get the sample at (row, col) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the data.
    #[inline]
    pub fn get_unchecked(&self, row: u32, col: u32) -> i32 {
        self.data[self.index(row, col)]
    }

    /// Set the sample at (row, col) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the data.
    #[inline]
    pub fn set_unchecked(&mut self, row: u32, col: u32, value: i32) {
        let idx = self.index(row, col);
        self.data[idx] = value;
    }

    /// Get raw access to the sample data
    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Get mutable access to the sample data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Consume the grid and return its row-major data
    pub fn into_data(self) -> Vec<i32> {
        self.data
    }

    /// Get a row of samples
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row(&self, row: u32) -> &[i32] {
        let start = (row as usize) * (self.width as usize);
        &self.data[start..start + self.width as usize]
    }

    /// Get a mutable row of samples
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row_mut(&mut self, row: u32) -> &mut [i32] {
        let start = (row as usize) * (self.width as usize);
        let end = start + self.width as usize;
        &mut self.data[start..end]
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> std::slice::ChunksExact<'_, i32> {
        self.data.chunks_exact(self.width as usize)
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Find the minimum value and its location
    ///
    /// Returns `(min_value, row, col)` for the first occurrence in row-major
    /// order.
    pub fn min(&self) -> (i32, u32, u32) {
        let mut best = (self.data[0], 0usize);
        for (idx, &v) in self.data.iter().enumerate() {
            if v < best.0 {
                best = (v, idx);
            }
        }
        let (row, col) = self.coords(best.1);
        (best.0, row, col)
    }

    /// Find the maximum value and its location
    ///
    /// Returns `(max_value, row, col)` for the first occurrence in row-major
    /// order.
    pub fn max(&self) -> (i32, u32, u32) {
        let mut best = (self.data[0], 0usize);
        for (idx, &v) in self.data.iter().enumerate() {
            if v > best.0 {
                best = (v, idx);
            }
        }
        let (row, col) = self.coords(best.1);
        (best.0, row, col)
    }

    /// Find the minimum value only
    pub fn min_value(&self) -> i32 {
        self.min().0
    }

    /// Find the maximum value only
    pub fn max_value(&self) -> i32 {
        self.max().0
    }

    /// Find both extremes in a single pass, as `(min, max)`
    pub fn min_max(&self) -> (i32, i32) {
        self.data
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// Sum of all samples, widened to `i64`
    pub fn sum(&self) -> i64 {
        self.data.iter().map(|&v| v as i64).sum()
    }

    // ========================================================================
    // Transformations (all return a new grid)
    // ========================================================================

    /// Apply `f` to every sample, returning a new grid of the same shape
    pub fn map<F>(&self, f: F) -> Grid
    where
        F: FnMut(i32) -> i32,
    {
        Grid {
            height: self.height,
            width: self.width,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Rotate by 180 degrees (reverse both row and column order)
    ///
    /// ```
    /// use rawgray_core::Grid;
    ///
    /// let g = Grid::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(g.flipped().data(), &[4, 3, 2, 1]);
    /// ```
    pub fn flipped(&self) -> Grid {
        // Reversing the row-major buffer reverses rows and columns at once.
        let mut data = self.data.clone();
        data.reverse();
        Grid {
            height: self.height,
            width: self.width,
            data,
        }
    }

    /// Add a zero border of `pad` samples on every side
    ///
    /// The result has shape `(height + 2*pad, width + 2*pad)` with the
    /// original samples at offset (pad, pad).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the padded shape overflows `u32`.
    pub fn padded(&self, pad: u32) -> Result<Grid> {
        if pad == 0 {
            return Ok(self.clone());
        }

        let grow = |side: u32| pad.checked_mul(2).and_then(|p| side.checked_add(p));
        let (Some(height), Some(width)) = (grow(self.height), grow(self.width)) else {
            return Err(Error::InvalidParameter(format!(
                "padding {pad} overflows {}x{} grid",
                self.height, self.width
            )));
        };
        let mut data = vec![0i32; (height as usize) * (width as usize)];

        for (r, src) in self.rows().enumerate() {
            let start = (r + pad as usize) * (width as usize) + pad as usize;
            data[start..start + src.len()].copy_from_slice(src);
        }

        Ok(Grid {
            height,
            width,
            data,
        })
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        (row as usize) * (self.width as usize) + (col as usize)
    }

    #[inline]
    fn checked_index(&self, row: u32, col: u32) -> Result<usize> {
        let idx = self.index(row, col);
        if row >= self.height || col >= self.width {
            return Err(Error::IndexOutOfBounds {
                index: idx,
                len: self.data.len(),
            });
        }
        Ok(idx)
    }

    #[inline]
    fn coords(&self, idx: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((idx / w) as u32, (idx % w) as u32)
    }
}

fn check_dimensions(height: u32, width: u32) -> Result<()> {
    if height == 0 || width == 0 {
        return Err(Error::InvalidDimension { height, width });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(20, 10).unwrap();
        assert_eq!(grid.height(), 20);
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.shape(), (20, 10));
        assert_eq!(grid.len(), 200);
        assert!(grid.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_grid_invalid_dimensions() {
        assert!(Grid::new(0, 10).is_err());
        assert!(Grid::new(10, 0).is_err());
        assert!(Grid::from_rows::<Vec<i32>>(&[]).is_err());
        assert!(Grid::from_rows(&[Vec::<i32>::new()]).is_err());
    }

    #[test]
    fn test_grid_from_data() {
        let grid = Grid::from_data(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), 1);
        assert_eq!(grid.get(0, 2).unwrap(), 3);
        assert_eq!(grid.get(1, 0).unwrap(), 4);
        assert_eq!(grid.get(1, 2).unwrap(), 6);

        assert!(Grid::from_data(2, 3, vec![1, 2, 3]).is_err());
    }

    #[test]
    fn test_grid_from_rows_ragged() {
        let err = Grid::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_grid_access_out_of_bounds() {
        let mut grid = Grid::new(3, 4).unwrap();
        assert!(grid.get(3, 0).is_err());
        assert!(grid.get(0, 4).is_err());
        assert!(grid.set(3, 4, 1).is_err());
        // (0, 4) would alias (1, 0) without the column check
        assert!(matches!(
            grid.get(0, 4),
            Err(Error::IndexOutOfBounds { index: 4, len: 12 })
        ));
    }

    #[test]
    fn test_grid_rows() {
        let mut grid = Grid::from_data(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(grid.row(1), &[3, 4]);
        let rows: Vec<&[i32]> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], &[5, 6]);

        grid.row_mut(0)[1] = 9;
        assert_eq!(grid.get(0, 1).unwrap(), 9);
    }

    #[test]
    fn test_grid_statistics() {
        let grid = Grid::from_rows(&[vec![5, -3, 7], vec![7, -3, 0]]).unwrap();
        assert_eq!(grid.min(), (-3, 0, 1));
        assert_eq!(grid.max(), (7, 0, 2));
        assert_eq!(grid.min_max(), (-3, 7));
        assert_eq!(grid.sum(), 13);
    }

    #[test]
    fn test_grid_sum_does_not_overflow() {
        let grid = Grid::new_with_value(2, 2, i32::MAX).unwrap();
        assert_eq!(grid.sum(), 4 * i32::MAX as i64);
    }

    #[test]
    fn test_grid_flipped() {
        let grid = Grid::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        let flipped = grid.flipped();
        assert_eq!(flipped.row(0), &[9, 8, 7]);
        assert_eq!(flipped.row(2), &[3, 2, 1]);
        // input untouched
        assert_eq!(grid.row(0), &[1, 2, 3]);
    }

    #[test]
    fn test_grid_padded() {
        let grid = Grid::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let padded = grid.padded(1).unwrap();
        assert_eq!(padded.shape(), (4, 4));
        assert_eq!(padded.row(0), &[0, 0, 0, 0]);
        assert_eq!(padded.row(1), &[0, 1, 2, 0]);
        assert_eq!(padded.row(2), &[0, 3, 4, 0]);
        assert_eq!(padded.row(3), &[0, 0, 0, 0]);
        assert_eq!(padded.sum(), grid.sum());

        assert_eq!(grid.padded(0).unwrap(), grid);
    }

    #[test]
    fn test_grid_padded_overflow() {
        let grid = Grid::new(2, 2).unwrap();
        assert!(matches!(
            grid.padded(u32::MAX),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            grid.padded(1 << 31),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_grid_map() {
        let grid = Grid::from_data(1, 3, vec![1, 2, 3]).unwrap();
        let doubled = grid.map(|v| v * 2);
        assert_eq!(doubled.data(), &[2, 4, 6]);
        assert_eq!(grid.data(), &[1, 2, 3]);
    }
}
