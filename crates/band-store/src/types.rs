//! Core types for band clipping.

use index_common::{BoundingBox, Grid};
use serde::{Deserialize, Serialize};

/// Divisor converting Sentinel-2 digital numbers to reflectance.
pub const REFLECTANCE_SCALE: f32 = 10000.0;

/// Affine pixel → geographic mapping for a north-up raster.
///
/// ```text
/// x = origin_x + col * pixel_width
/// y = origin_y + row * pixel_height
/// ```
///
/// `pixel_height` is negative for the usual top-down row order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoTransform {
    /// X coordinate of the upper-left corner
    pub origin_x: f64,
    /// Y coordinate of the upper-left corner
    pub origin_y: f64,
    /// Pixel width (cell size in X direction)
    pub pixel_width: f64,
    /// Pixel height (cell size in Y direction, usually negative)
    pub pixel_height: f64,
}

impl GeoTransform {
    pub fn new(origin_x: f64, origin_y: f64, pixel_width: f64, pixel_height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            pixel_width,
            pixel_height,
        }
    }

    /// GDAL-style coefficients `[origin_x, pixel_width, 0, origin_y, 0, pixel_height]`.
    pub fn to_gdal(&self) -> [f64; 6] {
        [
            self.origin_x,
            self.pixel_width,
            0.0,
            self.origin_y,
            0.0,
            self.pixel_height,
        ]
    }

    /// Extent covered by a `rows x cols` raster.
    pub fn extent(&self, rows: usize, cols: usize) -> BoundingBox {
        let x2 = self.origin_x + cols as f64 * self.pixel_width;
        let y2 = self.origin_y + rows as f64 * self.pixel_height;
        BoundingBox::new(
            self.origin_x.min(x2),
            self.origin_y.min(y2),
            self.origin_x.max(x2),
            self.origin_y.max(y2),
        )
    }

    /// Transform of a sub-window whose upper-left pixel is `(row_off, col_off)`.
    pub fn for_window(&self, window: &PixelWindow) -> GeoTransform {
        GeoTransform {
            origin_x: self.origin_x + window.col_off as f64 * self.pixel_width,
            origin_y: self.origin_y + window.row_off as f64 * self.pixel_height,
            pixel_width: self.pixel_width,
            pixel_height: self.pixel_height,
        }
    }
}

/// A rectangular pixel range inside a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelWindow {
    pub row_off: usize,
    pub col_off: usize,
    pub rows: usize,
    pub cols: usize,
}

impl PixelWindow {
    pub fn new(row_off: usize, col_off: usize, rows: usize, cols: usize) -> Self {
        Self {
            row_off,
            col_off,
            rows,
            cols,
        }
    }
}

/// Raw samples of one band restricted to a bounding box.
#[derive(Debug, Clone)]
pub struct ClippedBand {
    /// Band code the samples came from.
    pub code: String,
    /// Raw digital numbers.
    pub grid: Grid,
    /// Pixel → geographic mapping of the clipped window.
    pub transform: GeoTransform,
}

impl ClippedBand {
    /// Convert digital numbers to reflectance (`DN / 10000`).
    pub fn normalize(self) -> NormalizedBand {
        NormalizedBand {
            code: self.code,
            grid: self.grid.map(|dn| dn / REFLECTANCE_SCALE),
            transform: self.transform,
        }
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.grid.shape()
    }
}

/// Physical reflectance samples of one clipped band.
#[derive(Debug, Clone)]
pub struct NormalizedBand {
    pub code: String,
    pub grid: Grid,
    pub transform: GeoTransform,
}
