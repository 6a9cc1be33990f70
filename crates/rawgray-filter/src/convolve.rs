//! Convolution operations
//!
//! Implements true 2D convolution (the kernel is rotated by 180 degrees
//! before the sliding-window sum) with zero padding: samples outside the
//! image contribute 0. The output always has the shape of the input.
//!
//! This is the direct O(H*W*K^2) form; there is no separable or FFT path.

use crate::{FilterError, FilterResult, Kernel};
use log::trace;
use rawgray_core::Grid;

/// Convolve a grid with a kernel
///
/// Each output sample is the weighted sum accumulated in `f64`, truncated
/// toward zero to `i32`. Sums beyond the `i32` range saturate.
///
/// # Examples
///
/// ```
/// use rawgray_core::Grid;
/// use rawgray_filter::{Kernel, convolve};
///
/// let image = Grid::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
/// let out = convolve(&image, &Kernel::identity(3).unwrap()).unwrap();
/// assert_eq!(out, image);
/// ```
pub fn convolve(image: &Grid, kernel: &Kernel) -> FilterResult<Grid> {
    let sums = convolve_raw(image, kernel)?;
    let data = sums.into_iter().map(|s| s as i32).collect();
    Ok(Grid::from_data(image.height(), image.width(), data)?)
}

/// Convolve a grid with an integer kernel grid
///
/// # Errors
///
/// Returns `FilterError::InvalidKernel` if `kernel` is not square with an
/// odd side length.
pub fn convolve_grid(image: &Grid, kernel: &Grid) -> FilterResult<Grid> {
    convolve(image, &Kernel::from_grid(kernel)?)
}

/// Convolve a grid with a kernel, keeping the `f64` accumulators
///
/// Returns the `height * width` sums in row-major order without narrowing.
pub fn convolve_raw(image: &Grid, kernel: &Kernel) -> FilterResult<Vec<f64>> {
    let (h, w) = image.shape();
    let k = kernel.size() as usize;
    trace!("convolve: {h}x{w} image with {k}x{k} kernel");

    let flipped = kernel.flipped();
    let weights = flipped.data();
    let padded = image.padded(kernel.padding())?;

    let mut out = Vec::with_capacity(image.len());
    for i in 0..h {
        for j in 0..w {
            let mut sum = 0.0f64;
            for ky in 0..k {
                // Window rows [i, i+K), cols [j, j+K) in padded coordinates
                let src = &padded.row(i + ky as u32)[j as usize..j as usize + k];
                let krow = &weights[ky * k..(ky + 1) * k];
                for (&s, &wt) in src.iter().zip(krow) {
                    sum += s as f64 * wt;
                }
            }
            out.push(sum);
        }
    }

    Ok(out)
}

/// Apply box (average) blur
///
/// The kernel side is `2 * radius + 1`.
pub fn box_blur(image: &Grid, radius: u32) -> FilterResult<Grid> {
    let size = radius
        .checked_mul(2)
        .and_then(|d| d.checked_add(1))
        .ok_or_else(|| FilterError::InvalidParameters(format!("blur radius {radius} too large")))?;
    let kernel = Kernel::box_kernel(size)?;
    convolve(image, &kernel)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(height: u32, width: u32) -> Grid {
        let data = (0..height * width).map(|v| (v * 7 % 256) as i32).collect();
        Grid::from_data(height, width, data).unwrap()
    }

    #[test]
    fn test_unit_kernel_is_identity() {
        let image = ramp(5, 7);
        let kernel = Kernel::from_rows(&[[1.0]]).unwrap();
        assert_eq!(convolve(&image, &kernel).unwrap(), image);
    }

    #[test]
    fn test_average_of_single_spike_truncates_to_zero() {
        let image = Grid::from_rows(&[vec![0, 0, 0], vec![0, 5, 0], vec![0, 0, 0]]).unwrap();
        let kernel = Kernel::box_kernel(3).unwrap();

        let raw = convolve_raw(&image, &kernel).unwrap();
        // The spike is inside every 3x3 window
        for s in &raw {
            assert!((s - 5.0 / 9.0).abs() < 1e-9);
        }

        let out = convolve(&image, &kernel).unwrap();
        assert_eq!(out.shape(), (3, 3));
        assert!(out.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_zero_padding_at_border() {
        let image = Grid::new_with_value(3, 3, 9).unwrap();
        let kernel = Kernel::from_slice(3, 3, &[1.0; 9]).unwrap();
        let out = convolve(&image, &kernel).unwrap();
        assert_eq!(out.row(0), &[36, 54, 36]);
        assert_eq!(out.row(1), &[54, 81, 54]);
        assert_eq!(out.row(2), &[36, 54, 36]);
    }

    #[test]
    fn test_kernel_is_flipped() {
        // A single 1 at the kernel's top-left pulls from the lower-right
        // neighbour under convolution (upper-left under correlation).
        let image = Grid::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        let kernel =
            Kernel::from_rows(&[[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]).unwrap();
        let out = convolve(&image, &kernel).unwrap();
        assert_eq!(out.row(0), &[5, 6, 0]);
        assert_eq!(out.row(1), &[8, 9, 0]);
        assert_eq!(out.row(2), &[0, 0, 0]);
    }

    #[test]
    fn test_negative_sums_truncate_toward_zero() {
        let image = Grid::from_data(1, 1, vec![5]).unwrap();
        let kernel = Kernel::from_rows(&[[-0.3]]).unwrap();
        assert_eq!(convolve(&image, &kernel).unwrap().data(), &[-1]);
    }

    #[test]
    fn test_output_shape_matches_input() {
        for &(h, w) in &[(1, 1), (4, 9), (9, 4), (6, 6)] {
            let image = ramp(h, w);
            for size in [1, 3, 5, 7] {
                let out = convolve(&image, &Kernel::box_kernel(size).unwrap()).unwrap();
                assert_eq!(out.shape(), image.shape(), "{h}x{w} with k={size}");
            }
        }
    }

    #[test]
    fn test_convolve_grid_rejects_even_kernel() {
        let image = ramp(4, 4);
        let kernel = Grid::new_with_value(2, 2, 1).unwrap();
        assert!(matches!(
            convolve_grid(&image, &kernel),
            Err(FilterError::InvalidKernel(_))
        ));
    }

    #[test]
    fn test_convolve_grid_laplacian_on_flat_interior() {
        let image = Grid::new_with_value(5, 5, 10).unwrap();
        let kernel = Grid::from_rows(&[vec![0, 1, 0], vec![1, -4, 1], vec![0, 1, 0]]).unwrap();
        let out = convolve_grid(&image, &kernel).unwrap();
        assert_eq!(out.get(2, 2).unwrap(), 0);
        // Corners lose two neighbours to the zero border
        assert_eq!(out.get(0, 0).unwrap(), -20);
    }

    #[test]
    fn test_box_blur_radius() {
        let image = Grid::new_with_value(5, 5, 90).unwrap();
        let out = box_blur(&image, 1).unwrap();
        // 1/9 is inexact, so the truncated sums may land one below
        assert!((89..=90).contains(&out.get(2, 2).unwrap()));
        assert!((39..=40).contains(&out.get(0, 0).unwrap()));
    }

    #[test]
    fn test_box_blur_radius_overflow() {
        let image = Grid::new_with_value(3, 3, 9).unwrap();
        assert!(matches!(
            box_blur(&image, 1 << 31),
            Err(FilterError::InvalidParameters(_))
        ));
        assert!(matches!(
            box_blur(&image, u32::MAX),
            Err(FilterError::InvalidParameters(_))
        ));
    }
}
