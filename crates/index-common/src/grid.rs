//! Row-major 2-D sample grids.

/// A dense row-major grid of `f32` samples.
///
/// Used for raw clipped digital numbers, normalized reflectance and the
/// derived index alike. `data.len() == width * height` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl Grid {
    /// Wrap a row-major buffer. Returns `None` if the length does not match.
    pub fn new(width: usize, height: usize, data: Vec<f32>) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// A grid with every sample set to `value`.
    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable samples; the length, and so the shape, cannot change.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Sample at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.data[row * self.width + col])
    }

    /// Apply `f` to every sample, keeping the shape.
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Grid {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Keep the top-left `rows x cols` window, dropping excess rows from the
    /// bottom and excess columns from the right.
    ///
    /// Requested dimensions larger than the grid are capped at the grid size.
    pub fn truncate(&self, rows: usize, cols: usize) -> Grid {
        let rows = rows.min(self.height);
        let cols = cols.min(self.width);
        if rows == self.height && cols == self.width {
            return self.clone();
        }

        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            let start = row * self.width;
            data.extend_from_slice(&self.data[start..start + cols]);
        }

        Grid {
            width: cols,
            height: rows,
            data,
        }
    }

    /// Copy a `rows x cols` window starting at `(row_off, col_off)`.
    ///
    /// Returns `None` if the window exceeds the grid.
    pub fn window(&self, row_off: usize, col_off: usize, rows: usize, cols: usize) -> Option<Grid> {
        if row_off + rows > self.height || col_off + cols > self.width {
            return None;
        }

        let mut data = Vec::with_capacity(rows * cols);
        for row in row_off..row_off + rows {
            let start = row * self.width + col_off;
            data.extend_from_slice(&self.data[start..start + cols]);
        }

        Some(Grid {
            width: cols,
            height: rows,
            data,
        })
    }
}
