//! Intensity normalization
//!
//! Rescales a grid of arbitrary range into `[0, ceil]`. The mapping is
//! `ceil * (v - min) / (max - min)` evaluated in `f64` and truncated toward
//! zero, so the minimum lands on exactly 0 and the maximum on exactly `ceil`.

use crate::{FilterError, FilterResult};
use rawgray_core::Grid;

/// Default ceiling: the largest 8-bit sample value
pub const DEFAULT_CEIL: i32 = 255;

/// Normalize into `[0, 255]`; see [`normalize_to`].
pub fn normalize(grid: &Grid) -> FilterResult<Grid> {
    normalize_to(grid, DEFAULT_CEIL)
}

/// Normalize into `[0, ceil]` if the grid is out of range.
///
/// A grid already within `[0, ceil]` is returned as an unchanged copy.
/// Otherwise its `[min, max]` range is stretched onto `[0, ceil]`.
///
/// # Errors
///
/// * `FilterError::InvalidParameters` if `ceil < 0`
/// * `FilterError::DegenerateInput` if rescaling is needed but every sample
///   has the same value
///
/// # Examples
///
/// ```
/// use rawgray_core::Grid;
/// use rawgray_filter::normalize;
///
/// let g = Grid::from_rows(&[vec![-100, 0], vec![100, 410]]).unwrap();
/// let n = normalize(&g).unwrap();
/// assert_eq!(n.data(), &[0, 50, 100, 255]);
/// ```
pub fn normalize_to(grid: &Grid, ceil: i32) -> FilterResult<Grid> {
    check_ceil(ceil)?;
    let (min, max) = grid.min_max();
    if min >= 0 && max <= ceil {
        return Ok(grid.clone());
    }
    rescale(grid, ceil, min, max)
}

/// Stretch into `[0, 255]`; see [`stretch_to`].
pub fn stretch(grid: &Grid) -> FilterResult<Grid> {
    stretch_to(grid, DEFAULT_CEIL)
}

/// Stretch the grid's range onto `[0, ceil]` unconditionally.
///
/// Unlike [`normalize_to`], a grid that already fits is still rescaled so
/// that its minimum becomes 0 and its maximum becomes `ceil`.
pub fn stretch_to(grid: &Grid, ceil: i32) -> FilterResult<Grid> {
    check_ceil(ceil)?;
    let (min, max) = grid.min_max();
    rescale(grid, ceil, min, max)
}

fn rescale(grid: &Grid, ceil: i32, min: i32, max: i32) -> FilterResult<Grid> {
    // i64 so that e.g. i32::MAX - i32::MIN does not overflow
    let range = max as i64 - min as i64;
    if range == 0 {
        return Err(FilterError::DegenerateInput { value: min });
    }

    let ceil_f = ceil as f64;
    let range_f = range as f64;
    let out = grid.map(|v| (ceil_f * (v as i64 - min as i64) as f64 / range_f) as i32);

    let (lo, hi) = out.min_max();
    assert!(
        lo >= 0 && hi <= ceil,
        "normalized range [{lo}, {hi}] escapes [0, {ceil}]"
    );
    Ok(out)
}

fn check_ceil(ceil: i32) -> FilterResult<()> {
    if ceil < 0 {
        return Err(FilterError::InvalidParameters(format!(
            "ceil must be >= 0, got {ceil}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_is_unchanged() {
        let g = Grid::from_rows(&[vec![0, 50], vec![100, 150]]).unwrap();
        assert_eq!(normalize(&g).unwrap(), g);
    }

    #[test]
    fn test_negative_values_are_shifted() {
        let g = Grid::from_rows(&[vec![-150, -100], vec![-50, 0]]).unwrap();
        let n = normalize(&g).unwrap();
        assert_eq!(n.data(), &[0, 85, 170, 255]);
    }

    #[test]
    fn test_above_ceil_is_scaled() {
        let g = Grid::from_data(1, 3, vec![0, 500, 1000]).unwrap();
        let n = normalize_to(&g, 100).unwrap();
        assert_eq!(n.data(), &[0, 50, 100]);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 255 * 1/6 = 42.5 -> 42
        let g = Grid::from_data(1, 3, vec![-6, -5, 0]).unwrap();
        let n = normalize(&g).unwrap();
        assert_eq!(n.data(), &[0, 42, 255]);
    }

    #[test]
    fn test_idempotent() {
        let g = Grid::from_rows(&[vec![-7, 300], vec![12, 1024]]).unwrap();
        let once = normalize(&g).unwrap();
        let twice = normalize(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_stretch_in_range_grid() {
        let g = Grid::from_rows(&[vec![0, 50], vec![100, 150]]).unwrap();
        let s = stretch(&g).unwrap();
        assert_eq!(s.min_value(), 0);
        assert_eq!(s.max_value(), 255);
        assert_eq!(s.data(), &[0, 85, 170, 255]);
    }

    #[test]
    fn test_degenerate_input() {
        let g = Grid::new_with_value(3, 3, -4).unwrap();
        assert!(matches!(
            normalize(&g),
            Err(FilterError::DegenerateInput { value: -4 })
        ));
        // Uniform but already in range: nothing to rescale
        let flat = Grid::new_with_value(3, 3, 7).unwrap();
        assert_eq!(normalize(&flat).unwrap(), flat);
        assert!(stretch(&flat).is_err());
    }

    #[test]
    fn test_negative_ceil() {
        let g = Grid::new(2, 2).unwrap();
        assert!(matches!(
            normalize_to(&g, -1),
            Err(FilterError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_zero_ceil() {
        let g = Grid::from_data(1, 2, vec![-3, 9]).unwrap();
        assert_eq!(normalize_to(&g, 0).unwrap().data(), &[0, 0]);
    }

    #[test]
    fn test_extreme_range() {
        let g = Grid::from_data(1, 3, vec![i32::MIN, 0, i32::MAX]).unwrap();
        let n = normalize(&g).unwrap();
        assert_eq!(n.get(0, 0).unwrap(), 0);
        assert_eq!(n.get(0, 2).unwrap(), 255);
    }
}
