//! Common test fixtures for spectral index tests.
//!
//! This module provides pre-defined bounding boxes and an on-disk
//! Sentinel-2 style scene of five single-band GeoTIFFs.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::generators::{column_ramp, constant_band, vegetation_gradient};
use crate::geotiff::{write_geotiff_u16, RasterLayout};

/// Common bounding box definitions as `(west, south, east, north)`.
pub mod bbox {
    /// The request box used by the end-to-end scenario.
    pub const SCENE_REQUEST: (f64, f64, f64, f64) = (10.0, 50.0, 10.1, 50.1);

    /// A box fully inside the scene but off-center.
    pub const SCENE_CORNER: (f64, f64, f64, f64) = (9.96, 50.10, 10.00, 50.14);

    /// A box that only partially overlaps the scene's eastern edge.
    pub const SCENE_EAST_OVERLAP: (f64, f64, f64, f64) = (10.10, 50.0, 10.30, 50.1);

    /// Far away from the scene.
    pub const DISJOINT: (f64, f64, f64, f64) = (-75.0, 40.0, -74.9, 40.1);

    /// Thinner than one pixel: overlaps the scene but covers no pixel center.
    pub const SLIVER: (f64, f64, f64, f64) = (10.0001, 50.0, 10.0004, 50.1);
}

/// Common raster layouts.
pub mod layout {
    use crate::geotiff::RasterLayout;

    /// 200x200 pixels of 0.001 degrees covering 9.95..10.15 E, 49.95..50.15 N.
    pub const SCENE: RasterLayout = RasterLayout {
        width: 200,
        height: 200,
        west: 9.95,
        north: 50.15,
        pixel_size: 0.001,
    };

    /// Simple 10x10 raster with unit pixels covering 0..10 in both axes.
    pub const SIMPLE_10X10: RasterLayout = RasterLayout {
        width: 10,
        height: 10,
        west: 0.0,
        north: 10.0,
        pixel_size: 1.0,
    };
}

/// Sentinel-2 band codes in the order they are written.
pub const SENTINEL2_CODES: [&str; 5] = ["B02", "B03", "B04", "B08", "B11"];

/// A temporary directory holding one GeoTIFF per band code.
///
/// The directory and files are removed when the fixture is dropped.
pub struct SceneFixture {
    pub dir: TempDir,
    pub layout: RasterLayout,
    pub paths: BTreeMap<String, PathBuf>,
}

impl SceneFixture {
    /// Write a full five-band scene.
    ///
    /// Red/NIR follow [`vegetation_gradient`]; blue, green and SWIR are
    /// plausible constant or ramped surfaces.
    pub fn sentinel2(layout: RasterLayout) -> Self {
        let (red, nir) = vegetation_gradient(layout.width, layout.height);
        let blue = constant_band(layout.width, layout.height, 600);
        let green = column_ramp(layout.width, layout.height, 800, 1400);
        let swir = column_ramp(layout.width, layout.height, 2500, 1500);

        Self::with_bands(
            layout,
            &[
                ("B02", blue),
                ("B03", green),
                ("B04", red),
                ("B08", nir),
                ("B11", swir),
            ],
        )
    }

    /// Write only the given bands.
    pub fn with_bands(layout: RasterLayout, bands: &[(&str, Vec<u16>)]) -> Self {
        let dir = tempfile::tempdir().expect("failed to create fixture dir");
        let mut paths = BTreeMap::new();

        for (code, data) in bands {
            let path = dir.path().join(format!("{}_sentinel-2.tiff", code));
            write_geotiff_u16(&path, &layout, data).expect("failed to write fixture band");
            paths.insert(code.to_string(), path);
        }

        Self { dir, layout, paths }
    }

    /// Write or replace one band on its own grid.
    pub fn write_band(&mut self, code: &str, layout: &RasterLayout, data: &[u16]) {
        let path = self.dir.path().join(format!("{}_sentinel-2.tiff", code));
        write_geotiff_u16(&path, layout, data).expect("failed to write fixture band");
        self.paths.insert(code.to_string(), path);
    }

    /// Delete a band's file while keeping its configured path.
    pub fn remove_band_file(&self, code: &str) {
        if let Some(path) = self.paths.get(code) {
            std::fs::remove_file(path).expect("failed to remove fixture band");
        }
    }

    /// Overwrite a band's file with bytes that are not a TIFF.
    pub fn corrupt_band_file(&self, code: &str) {
        if let Some(path) = self.paths.get(code) {
            std::fs::write(path, b"not a tiff").expect("failed to corrupt fixture band");
        }
    }

    /// Configured path for a band code.
    pub fn path(&self, code: &str) -> PathBuf {
        self.paths
            .get(code)
            .cloned()
            .unwrap_or_else(|| self.dir.path().join(format!("{}_sentinel-2.tiff", code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_layout_extent() {
        let (west, south, east, north) = layout::SCENE.extent();
        assert!((west - 9.95).abs() < 1e-9);
        assert!((south - 49.95).abs() < 1e-9);
        assert!((east - 10.15).abs() < 1e-9);
        assert!((north - 50.15).abs() < 1e-9);
    }

    #[test]
    fn test_sentinel2_fixture_writes_all_bands() {
        let scene = SceneFixture::sentinel2(layout::SIMPLE_10X10);
        for code in SENTINEL2_CODES {
            assert!(scene.path(code).exists(), "missing {}", code);
        }
    }

    #[test]
    fn test_remove_band_file() {
        let scene = SceneFixture::sentinel2(layout::SIMPLE_10X10);
        scene.remove_band_file("B11");
        assert!(!scene.path("B11").exists());
        assert!(scene.path("B04").exists());
    }
}
