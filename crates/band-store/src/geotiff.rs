//! Single-band GeoTIFF reading.
//!
//! Only the first sample of each pixel is used. Georeferencing comes from
//! `ModelTransformationTag`, or `ModelPixelScaleTag` + `ModelTiepointTag`.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use index_common::Grid;
use tiff::decoder::{Decoder, DecodingResult, Limits};
use tiff::tags::Tag;

use crate::error::{BandStoreError, Result};
use crate::types::GeoTransform;

/// An open GeoTIFF band.
///
/// The file handle lives as long as this value; dropping it closes the file.
pub struct GeoTiffBand<R: Read + Seek> {
    decoder: Decoder<R>,
    width: usize,
    height: usize,
    samples_per_pixel: usize,
    transform: GeoTransform,
}

impl GeoTiffBand<BufReader<File>> {
    /// Open a GeoTIFF file and read its header.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| BandStoreError::open_failed(path.display().to_string(), e.to_string()))?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read + Seek> GeoTiffBand<R> {
    /// Read the header of a GeoTIFF from any seekable reader.
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut decoder = Decoder::new(reader)?.with_limits(Limits::unlimited());

        let (width, height) = decoder.dimensions()?;
        let samples_per_pixel = match decoder.colortype()? {
            tiff::ColorType::Gray(_) => 1,
            tiff::ColorType::GrayA(_) => 2,
            tiff::ColorType::RGB(_) => 3,
            tiff::ColorType::RGBA(_) | tiff::ColorType::CMYK(_) => 4,
            other => {
                return Err(BandStoreError::UnsupportedFormat(format!(
                    "color type {:?}",
                    other
                )))
            }
        };

        let transform = read_transform(&mut decoder)?;

        Ok(Self {
            decoder,
            width: width as usize,
            height: height as usize,
            samples_per_pixel,
            transform,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn transform(&self) -> GeoTransform {
        self.transform
    }

    /// Decode the whole first band as `f32`.
    pub fn read_band(&mut self) -> Result<Grid> {
        let samples = match self.decoder.read_image()? {
            DecodingResult::U8(buf) => first_sample(&buf, self.samples_per_pixel, |v| v as f32),
            DecodingResult::U16(buf) => first_sample(&buf, self.samples_per_pixel, |v| v as f32),
            DecodingResult::U32(buf) => first_sample(&buf, self.samples_per_pixel, |v| v as f32),
            DecodingResult::U64(buf) => first_sample(&buf, self.samples_per_pixel, |v| v as f32),
            DecodingResult::I8(buf) => first_sample(&buf, self.samples_per_pixel, |v| v as f32),
            DecodingResult::I16(buf) => first_sample(&buf, self.samples_per_pixel, |v| v as f32),
            DecodingResult::I32(buf) => first_sample(&buf, self.samples_per_pixel, |v| v as f32),
            DecodingResult::I64(buf) => first_sample(&buf, self.samples_per_pixel, |v| v as f32),
            DecodingResult::F32(buf) => first_sample(&buf, self.samples_per_pixel, |v| v),
            DecodingResult::F64(buf) => first_sample(&buf, self.samples_per_pixel, |v| v as f32),
            #[allow(unreachable_patterns)]
            _ => {
                return Err(BandStoreError::UnsupportedFormat(
                    "sample type".to_string(),
                ))
            }
        };

        Grid::new(self.width, self.height, samples).ok_or_else(|| {
            BandStoreError::Decode(format!(
                "decoded sample count does not match {}x{} raster",
                self.width, self.height
            ))
        })
    }
}

fn first_sample<T: Copy>(buf: &[T], samples_per_pixel: usize, convert: impl Fn(T) -> f32) -> Vec<f32> {
    buf.iter()
        .step_by(samples_per_pixel.max(1))
        .map(|&v| convert(v))
        .collect()
}

/// Derive the affine transform from GeoTIFF model tags.
fn read_transform<R: Read + Seek>(decoder: &mut Decoder<R>) -> Result<GeoTransform> {
    if let Ok(matrix) = decoder.get_tag_f64_vec(Tag::ModelTransformationTag) {
        if matrix.len() >= 8 {
            if matrix[1] != 0.0 || matrix[4] != 0.0 {
                return Err(BandStoreError::Georeference(
                    "rotated rasters are not supported".to_string(),
                ));
            }
            return checked(GeoTransform::new(matrix[3], matrix[7], matrix[0], matrix[5]));
        }
    }

    let scale = decoder.get_tag_f64_vec(Tag::ModelPixelScaleTag).ok();
    let tiepoint = decoder.get_tag_f64_vec(Tag::ModelTiepointTag).ok();

    match (scale, tiepoint) {
        (Some(scale), Some(tie)) if scale.len() >= 2 && tie.len() >= 6 => {
            let (sx, sy) = (scale[0], scale[1]);
            // Tiepoint ties raster (I, J) to model (X, Y).
            checked(GeoTransform::new(
                tie[3] - tie[0] * sx,
                tie[4] + tie[1] * sy,
                sx,
                -sy,
            ))
        }
        _ => Err(BandStoreError::Georeference(
            "missing ModelPixelScale/ModelTiepoint tags".to_string(),
        )),
    }
}

fn checked(transform: GeoTransform) -> Result<GeoTransform> {
    let finite = transform.to_gdal().iter().all(|v| v.is_finite());
    if !finite || transform.pixel_width == 0.0 || transform.pixel_height == 0.0 {
        return Err(BandStoreError::Georeference(format!(
            "degenerate transform {:?}",
            transform
        )));
    }
    Ok(transform)
}
