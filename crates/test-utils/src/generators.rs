//! Test data generators for creating synthetic radar-like data.
//!
//! These generators create predictable, verifiable value patterns that
//! can be used across the test suite.

/// Creates a precipitation grid with accumulation-like values.
///
/// Each cell value is calculated as `(col + row) * 0.25`, giving a
/// smooth gradient of non-negative liquid-water-equivalent amounts
/// with no NaN values.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
///
/// # Returns
///
/// A `Vec<f32>` in row-major order (row 0 first, then row 1, etc.)
///
/// # Example
///
/// ```
/// use test_utils::create_precipitation_grid;
///
/// let grid = create_precipitation_grid(10, 5);
/// assert_eq!(grid.len(), 50); // 10 * 5
/// assert_eq!(grid[0], 0.0);   // col=0, row=0
/// assert_eq!(grid[1], 0.25);  // col=1, row=0
/// assert_eq!(grid[10], 0.25); // col=0, row=1
/// ```
pub fn create_precipitation_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col + row) as f32 * 0.25);
        }
    }
    data
}

/// Creates a precipitation grid with NaN holes.
///
/// Starts from [`create_precipitation_grid`] and replaces every
/// `every`-th cell (indices 0, every, 2*every, ...) with `f32::NAN`,
/// mimicking a radar composite with coverage gaps.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `every` - Stride between NaN cells; must be non-zero
///
/// # Example
///
/// ```
/// use test_utils::create_grid_with_nans;
///
/// let grid = create_grid_with_nans(4, 4, 3);
/// assert!(grid[0].is_nan());
/// assert!(grid[3].is_nan());
/// assert!(!grid[1].is_nan());
/// ```
pub fn create_grid_with_nans(width: usize, height: usize, every: usize) -> Vec<f32> {
    let mut data = create_precipitation_grid(width, height);
    for (i, value) in data.iter_mut().enumerate() {
        if i % every == 0 {
            *value = f32::NAN;
        }
    }
    data
}

/// Creates a grid where every cell holds the same value.
///
/// # Example
///
/// ```
/// use test_utils::create_constant_grid;
///
/// let grid = create_constant_grid(3, 2, 1.5);
/// assert_eq!(grid, vec![1.5; 6]);
/// ```
pub fn create_constant_grid(width: usize, height: usize, value: f32) -> Vec<f32> {
    vec![value; width * height]
}
