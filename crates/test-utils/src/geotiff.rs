//! Minimal GeoTIFF writers for test fixtures.
//!
//! Files are north-up, single-band, georeferenced with
//! `ModelPixelScaleTag` + `ModelTiepointTag` tying pixel (0, 0) to the
//! upper-left corner of the raster.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tiff::encoder::{colortype, TiffEncoder};
use tiff::tags::Tag;
use tiff::TiffResult;

/// Placement of a north-up raster: upper-left corner plus square pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterLayout {
    pub width: usize,
    pub height: usize,
    /// X of the upper-left corner
    pub west: f64,
    /// Y of the upper-left corner
    pub north: f64,
    pub pixel_size: f64,
}

impl RasterLayout {
    pub fn new(width: usize, height: usize, west: f64, north: f64, pixel_size: f64) -> Self {
        Self {
            width,
            height,
            west,
            north,
            pixel_size,
        }
    }

    /// Extent as `(west, south, east, north)`.
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        (
            self.west,
            self.north - self.height as f64 * self.pixel_size,
            self.west + self.width as f64 * self.pixel_size,
            self.north,
        )
    }

    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn pixel_scale(&self) -> [f64; 3] {
        [self.pixel_size, self.pixel_size, 0.0]
    }

    fn tiepoint(&self) -> [f64; 6] {
        [0.0, 0.0, 0.0, self.west, self.north, 0.0]
    }
}

/// Write a 16-bit unsigned GeoTIFF (the Sentinel-2 L2A sample type).
pub fn write_geotiff_u16(path: &Path, layout: &RasterLayout, data: &[u16]) -> TiffResult<()> {
    let file = File::create(path)?;
    let mut encoder = TiffEncoder::new(BufWriter::new(file))?;
    let mut image =
        encoder.new_image::<colortype::Gray16>(layout.width as u32, layout.height as u32)?;
    image
        .encoder()
        .write_tag(Tag::ModelPixelScaleTag, &layout.pixel_scale()[..])?;
    image
        .encoder()
        .write_tag(Tag::ModelTiepointTag, &layout.tiepoint()[..])?;
    image.write_data(data)
}

/// Write a 32-bit float GeoTIFF.
pub fn write_geotiff_f32(path: &Path, layout: &RasterLayout, data: &[f32]) -> TiffResult<()> {
    let file = File::create(path)?;
    let mut encoder = TiffEncoder::new(BufWriter::new(file))?;
    let mut image =
        encoder.new_image::<colortype::Gray32Float>(layout.width as u32, layout.height as u32)?;
    image
        .encoder()
        .write_tag(Tag::ModelPixelScaleTag, &layout.pixel_scale()[..])?;
    image
        .encoder()
        .write_tag(Tag::ModelTiepointTag, &layout.tiepoint()[..])?;
    image.write_data(data)
}

/// Write a plain TIFF with no georeferencing tags.
pub fn write_plain_tiff_u16(path: &Path, width: usize, height: usize, data: &[u16]) -> TiffResult<()> {
    let file = File::create(path)?;
    let mut encoder = TiffEncoder::new(BufWriter::new(file))?;
    encoder.write_image::<colortype::Gray16>(width as u32, height as u32, data)
}
