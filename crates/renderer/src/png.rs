//! PNG encoding for rendered index images and legends.
//!
//! Two encodings are produced:
//! - **Indexed PNG (color type 3)**: used whenever the image fits in a
//!   256-entry palette, which classified index images always do. A `tRNS`
//!   chunk carries alpha for palettes with transparent entries.
//! - **RGBA PNG (color type 6)**: fallback for anything with more colors.

use std::collections::HashMap;
use std::io::Write;

use rayon::prelude::*;

use crate::classify::{ClassifiedImage, PALETTE};
use crate::error::{RenderError, Result};

/// Maximum colors for indexed PNG (PNG8)
const MAX_PALETTE_SIZE: usize = 256;

/// Minimum pixels to benefit from parallel palette extraction
const PARALLEL_THRESHOLD: usize = 4096;

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

type Palette = Vec<(u8, u8, u8, u8)>;

/// Encode a classified image against the fixed class palette.
///
/// No palette extraction is needed: the indices already point into
/// [`PALETTE`].
pub fn create_png_classified(image: &ClassifiedImage) -> Result<Vec<u8>> {
    create_png_indexed(image.width, image.height, &PALETTE, &image.indices)
}

/// Encode RGBA pixels, choosing indexed encoding when the colors fit.
pub fn create_png_auto(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
    check_len(pixels.len() / 4, width, height)?;

    let palette_result = if width * height >= PARALLEL_THRESHOLD {
        extract_palette_parallel(pixels)
    } else {
        extract_palette_sequential(pixels)
    };

    match palette_result {
        Some((palette, indices)) => create_png_indexed(width, height, &palette, &indices),
        None => create_png(pixels, width, height),
    }
}

#[inline(always)]
fn pack_color(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_le_bytes([r, g, b, a])
}

#[inline(always)]
fn unpack_color(packed: u32) -> (u8, u8, u8, u8) {
    let [r, g, b, a] = packed.to_le_bytes();
    (r, g, b, a)
}

/// Palette and per-pixel indices in first-seen color order.
fn extract_palette_sequential(pixels: &[u8]) -> Option<(Palette, Vec<u8>)> {
    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Palette = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices: Vec<u8> = Vec::with_capacity(pixels.len() / 4);

    for chunk in pixels.chunks_exact(4) {
        let packed = pack_color(chunk[0], chunk[1], chunk[2], chunk[3]);
        let index = match color_to_index.get(&packed) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push((chunk[0], chunk[1], chunk[2], chunk[3]));
                color_to_index.insert(packed, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Parallel palette extraction for larger images.
///
/// Unique colors are collected per chunk, merged, and then every pixel is
/// mapped to its palette slot in a second parallel pass.
fn extract_palette_parallel(pixels: &[u8]) -> Option<(Palette, Vec<u8>)> {
    let chunk_pixels = (pixels.len() / 4 / rayon::current_num_threads()).max(256);

    let unique_colors: Vec<u32> = pixels
        .par_chunks(chunk_pixels * 4)
        .flat_map(|chunk| {
            let mut local: HashMap<u32, ()> = HashMap::with_capacity(MAX_PALETTE_SIZE);
            for pixel in chunk.chunks_exact(4) {
                local.insert(pack_color(pixel[0], pixel[1], pixel[2], pixel[3]), ());
                if local.len() > MAX_PALETTE_SIZE {
                    break;
                }
            }
            local.into_keys().collect::<Vec<_>>()
        })
        .collect();

    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Palette = Vec::with_capacity(MAX_PALETTE_SIZE);
    for packed in unique_colors {
        if color_to_index.contains_key(&packed) {
            continue;
        }
        if palette.len() >= MAX_PALETTE_SIZE {
            return None;
        }
        color_to_index.insert(packed, palette.len() as u8);
        palette.push(unpack_color(packed));
    }

    let indices = pixels
        .par_chunks_exact(4)
        .map(|p| {
            color_to_index
                .get(&pack_color(p[0], p[1], p[2], p[3]))
                .copied()
                .unwrap_or(0)
        })
        .collect();

    Some((palette, indices))
}

/// Encode an indexed PNG (color type 3) from palette and indices.
pub fn create_png_indexed(
    width: usize,
    height: usize,
    palette: &[(u8, u8, u8, u8)],
    indices: &[u8],
) -> Result<Vec<u8>> {
    check_len(indices.len(), width, height)?;
    if palette.is_empty() || palette.len() > MAX_PALETTE_SIZE {
        return Err(RenderError::Encode(format!(
            "palette has {} entries",
            palette.len()
        )));
    }

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 3));

    let plte: Vec<u8> = palette.iter().flat_map(|&(r, g, b, _)| [r, g, b]).collect();
    write_chunk(&mut png, b"PLTE", &plte);

    if palette.iter().any(|&(_, _, _, a)| a < 255) {
        let trns: Vec<u8> = palette.iter().map(|&(_, _, _, a)| a).collect();
        write_chunk(&mut png, b"tRNS", &trns);
    }

    let idat = deflate_scanlines(indices, width, height, 1)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Encode an RGBA PNG (color type 6).
pub fn create_png(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
    check_len(pixels.len() / 4, width, height)?;

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 6));

    let idat = deflate_scanlines(pixels, width, height, 4)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

fn check_len(actual: usize, width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyGrid { width, height });
    }
    let expected = width * height;
    if actual != expected {
        return Err(RenderError::BufferSize { expected, actual });
    }
    Ok(())
}

/// IHDR payload: 8-bit samples, no interlace.
fn ihdr(width: usize, height: usize, color_type: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&(width as u32).to_be_bytes());
    data.extend_from_slice(&(height as u32).to_be_bytes());
    data.push(8); // bit depth
    data.push(color_type);
    data.push(0); // compression method
    data.push(0); // filter method
    data.push(0); // interlace method
    data
}

fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Prefix each scanline with filter byte 0 and zlib-compress.
fn deflate_scanlines(
    samples: &[u8],
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
) -> Result<Vec<u8>> {
    let row_len = width * bytes_per_pixel;
    let mut raw = Vec::with_capacity(height * (1 + row_len));
    for row in samples.chunks_exact(row_len).take(height) {
        raw.push(0);
        raw.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&raw)?;
    Ok(encoder.finish()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(png: &[u8]) -> image::RgbaImage {
        image::load_from_memory_with_format(png, image::ImageFormat::Png)
            .unwrap()
            .to_rgba8()
    }

    #[test]
    fn test_extract_palette_simple() {
        let pixels = [
            255, 0, 0, 255, // red
            0, 255, 0, 255, // green
            0, 0, 255, 255, // blue
            255, 0, 0, 255, // red again
        ];

        let (palette, indices) = extract_palette_sequential(&pixels).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(indices, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_extract_palette_parallel_matches_colors() {
        let mut pixels = Vec::with_capacity(128 * 128 * 4);
        for y in 0..128u32 {
            for x in 0..128u32 {
                let (r, g, b, a) = PALETTE[((x / 16 + y / 16) % 6) as usize];
                pixels.extend_from_slice(&[r, g, b, a]);
            }
        }

        let (palette, indices) = extract_palette_parallel(&pixels).unwrap();
        assert_eq!(palette.len(), 6);
        assert_eq!(indices.len(), 128 * 128);
        for (i, &idx) in indices.iter().enumerate() {
            let (r, g, b, a) = palette[idx as usize];
            assert_eq!(&pixels[i * 4..i * 4 + 4], &[r, g, b, a]);
        }
    }

    #[test]
    fn test_too_many_colors_falls_back_to_rgba() {
        let mut pixels = Vec::with_capacity(300 * 4);
        for i in 0..300u32 {
            pixels.extend_from_slice(&[(i % 256) as u8, (i / 256) as u8, 7, 255]);
        }
        assert!(extract_palette_sequential(&pixels).is_none());

        let png = create_png_auto(&pixels, 300, 1).unwrap();
        let decoded = decode(&png);
        assert_eq!(decoded.get_pixel(299, 0).0, [43, 1, 7, 255]);
    }

    #[test]
    fn test_indexed_png_decodes_with_transparency() {
        let image = ClassifiedImage {
            width: 3,
            height: 2,
            indices: vec![0, 1, 2, 3, 4, 5],
        };
        let png = create_png_classified(&image).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);

        let decoded = decode(&png);
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(0, 0).0, [100, 150, 255, 255]);
        assert_eq!(decoded.get_pixel(1, 1).0, [0, 128, 0, 255]);
        assert_eq!(decoded.get_pixel(2, 1).0[3], 0);
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let result = create_png_indexed(4, 4, &PALETTE, &[0; 10]);
        assert!(matches!(
            result,
            Err(RenderError::BufferSize {
                expected: 16,
                actual: 10
            })
        ));
        assert!(matches!(
            create_png(&[], 0, 3),
            Err(RenderError::EmptyGrid { .. })
        ));
    }
}
