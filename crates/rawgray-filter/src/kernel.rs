//! Convolution kernels
//!
//! A kernel is a square block of `f64` weights with an odd side length, so
//! that it has a well-defined center sample. The shape is checked once at
//! construction and can be relied on everywhere else.

use crate::{FilterError, FilterResult};
use rawgray_core::Grid;

/// A square, odd-sized 2D convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length (always odd)
    size: u32,
    /// Kernel weights (row-major order)
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidKernel` unless `height == width`, the side
    /// is odd, and `data.len() == height * width`.
    pub fn from_slice(height: u32, width: u32, data: &[f64]) -> FilterResult<Self> {
        check_shape(height, width)?;
        let expected = (height as usize) * (width as usize);
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                height,
                width,
                expected
            )));
        }
        Ok(Kernel {
            size: height,
            data: data.to_vec(),
        })
    }

    /// Create a kernel from a list of rows.
    ///
    /// ```
    /// use rawgray_filter::Kernel;
    ///
    /// let k = Kernel::from_rows(&[[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]]).unwrap();
    /// assert_eq!(k.size(), 3);
    /// assert!(Kernel::from_rows(&[[1.0, 1.0], [1.0, 1.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> FilterResult<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        if rows.iter().any(|r| r.as_ref().len() != width as usize) {
            return Err(FilterError::InvalidKernel(
                "rows have different lengths".into(),
            ));
        }
        let data: Vec<f64> = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::from_slice(height, width, &data)
    }

    /// Create a kernel from an integer grid.
    pub fn from_grid(grid: &Grid) -> FilterResult<Self> {
        let data: Vec<f64> = grid.data().iter().map(|&v| v as f64).collect();
        Self::from_slice(grid.height(), grid.width(), &data)
    }

    /// Create an identity kernel: 1 at the center, 0 elsewhere.
    pub fn identity(size: u32) -> FilterResult<Self> {
        check_shape(size, size)?;
        let mut data = vec![0.0; (size as usize) * (size as usize)];
        let mid = data.len() / 2;
        data[mid] = 1.0;
        Ok(Kernel { size, data })
    }

    /// Create a box (averaging) kernel.
    ///
    /// All values are `1/(size*size)`.
    pub fn box_kernel(size: u32) -> FilterResult<Self> {
        check_shape(size, size)?;
        let n = (size as usize) * (size as usize);
        Ok(Kernel {
            size,
            data: vec![1.0 / n as f64; n],
        })
    }

    /// Create a 4-neighbour Laplacian kernel.
    pub fn laplacian() -> Self {
        Kernel {
            size: 3,
            data: vec![0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0],
        }
    }

    /// Create a Sobel kernel responding to horizontal edges.
    pub fn sobel_horizontal() -> Self {
        Kernel {
            size: 3,
            data: vec![-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0],
        }
    }

    /// Create a Sobel kernel responding to vertical edges.
    pub fn sobel_vertical() -> Self {
        Kernel {
            size: 3,
            data: vec![-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0],
        }
    }

    /// Get the side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of zero rows/columns needed on each side: `(size - 1) / 2`.
    #[inline]
    pub fn padding(&self) -> u32 {
        (self.size - 1) / 2
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get the weight at (row, col).
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<f64> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.data[(row as usize) * (self.size as usize) + col as usize])
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Rotate by 180 degrees (reverse both row and column order).
    pub fn flipped(&self) -> Kernel {
        let mut data = self.data.clone();
        data.reverse();
        Kernel {
            size: self.size,
            data,
        }
    }
}

fn check_shape(height: u32, width: u32) -> FilterResult<()> {
    if height != width || height % 2 == 0 {
        return Err(FilterError::InvalidKernel(format!(
            "kernel must be square with odd side length, got {height}x{width}"
        )));
    }
    Ok(())
}
