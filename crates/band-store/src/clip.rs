//! Spatial clipping of a band to a bounding box.
//!
//! A pixel is kept when its center lies inside the intersection of the box
//! and the raster extent (edges inclusive). Because the clip geometry is a
//! rectangle, the kept pixels always form one tight window; that window is
//! the crop.

use index_common::{BoundingBox, Grid};
use tracing::debug;

use crate::error::{BandStoreError, Result};
use crate::geotiff::GeoTiffBand;
use crate::store::BandSource;
use crate::types::{ClippedBand, GeoTransform, PixelWindow};

/// Slack for pixel centers lying exactly on a box edge.
const EDGE_TOLERANCE: f64 = 1e-9;

/// Open a band source, crop it to `bbox` and close it again.
pub fn clip(source: &BandSource, bbox: &BoundingBox) -> Result<ClippedBand> {
    let mut band = GeoTiffBand::open(&source.path)?;
    let transform = band.transform();
    let full = band.read_band()?;
    drop(band);

    clip_grid(&source.code, &full, &transform, bbox)
}

/// Crop an in-memory raster to `bbox`.
pub fn clip_grid(
    code: &str,
    grid: &Grid,
    transform: &GeoTransform,
    bbox: &BoundingBox,
) -> Result<ClippedBand> {
    let window = pixel_window(transform, grid.height(), grid.width(), bbox)?;
    let clipped = grid
        .window(window.row_off, window.col_off, window.rows, window.cols)
        .ok_or_else(|| BandStoreError::EmptyClip(code.to_string()))?;

    debug!(
        band = %code,
        rows = window.rows,
        cols = window.cols,
        row_off = window.row_off,
        col_off = window.col_off,
        "Clipped band"
    );

    Ok(ClippedBand {
        code: code.to_string(),
        grid: clipped,
        transform: transform.for_window(&window),
    })
}

/// Pixel window whose centers fall inside `bbox`.
///
/// Fails with [`BandStoreError::NoIntersection`] when the box misses the
/// raster extent and [`BandStoreError::EmptyClip`] when it overlaps the extent
/// but contains no pixel center.
pub fn pixel_window(
    transform: &GeoTransform,
    rows: usize,
    cols: usize,
    bbox: &BoundingBox,
) -> Result<PixelWindow> {
    let extent = transform.extent(rows, cols);
    let region = bbox
        .intersection(&extent)
        .ok_or_else(|| BandStoreError::no_intersection(bbox.to_string(), extent.to_string()))?;

    let col_range = index_range(
        (region.west - transform.origin_x) / transform.pixel_width - 0.5,
        (region.east - transform.origin_x) / transform.pixel_width - 0.5,
        cols,
    );
    let row_range = index_range(
        (region.north - transform.origin_y) / transform.pixel_height - 0.5,
        (region.south - transform.origin_y) / transform.pixel_height - 0.5,
        rows,
    );

    match (row_range, col_range) {
        (Some((row_start, row_end)), Some((col_start, col_end))) => Ok(PixelWindow::new(
            row_start,
            col_start,
            row_end - row_start + 1,
            col_end - col_start + 1,
        )),
        _ => Err(BandStoreError::EmptyClip(bbox.to_string())),
    }
}

/// Inclusive integer range of pixel indices whose center offset lies in
/// `[a, b]` (either order), clamped to `0..len`.
fn index_range(a: f64, b: f64, len: usize) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    let lo = (a.min(b) - EDGE_TOLERANCE).ceil().max(0.0);
    let hi = (a.max(b) + EDGE_TOLERANCE).floor().min(len as f64 - 1.0);
    if lo > hi {
        return None;
    }
    Some((lo as usize, hi as usize))
}
