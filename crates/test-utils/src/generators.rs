//! Synthetic band generators.
//!
//! These generators create predictable, verifiable raster patterns that can
//! be used across the test suite. Raw values are Sentinel-2 style digital
//! numbers (reflectance * 10000).

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// This makes it easy to verify that a clip window was read from the right
/// place by checking that grid[row][col] == col * 1000 + row.
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50); // 10 * 5
/// assert_eq!(grid[0], 0.0);   // col=0, row=0 -> 0*1000 + 0
/// assert_eq!(grid[1], 1000.0); // col=1, row=0 -> 1*1000 + 0
/// assert_eq!(grid[10], 1.0);  // col=0, row=1 -> 0*1000 + 1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f32);
        }
    }
    data
}

/// A band with the same digital number everywhere.
pub fn constant_band(width: usize, height: usize, value: u16) -> Vec<u16> {
    vec![value; width * height]
}

/// A band that ramps linearly across columns from `start` to `end`.
///
/// Column 0 holds `start`, the last column holds `end`.
pub fn column_ramp(width: usize, height: usize, start: u16, end: u16) -> Vec<u16> {
    let mut data = Vec::with_capacity(width * height);
    let span = end as f64 - start as f64;
    let denom = width.saturating_sub(1).max(1) as f64;
    for _row in 0..height {
        for col in 0..width {
            let value = start as f64 + span * (col as f64 / denom);
            data.push(value.round() as u16);
        }
    }
    data
}

/// Red and NIR bands whose NDVI sweeps from water to dense vegetation.
///
/// Red is a constant 1000 DN; NIR ramps from 300 to 12000 DN across the
/// columns, so NDVI runs from roughly -0.54 to 0.85 left to right.
pub fn vegetation_gradient(width: usize, height: usize) -> (Vec<u16>, Vec<u16>) {
    let red = constant_band(width, height, 1000);
    let nir = column_ramp(width, height, 300, 12000);
    (red, nir)
}
