//! Per-pixel index formulas over normalized reflectance.
//!
//! Each function takes plain reflectance values. Optional inputs are passed
//! as `Option<f32>` so the fallback is visible at the call site rather than
//! hidden behind default arguments.

/// Division guard for the normalized-difference formulas.
pub const EPSILON: f32 = 1e-6;

/// Soil brightness correction factor used by SAVI.
pub const SAVI_L: f32 = 0.5;

/// Normalized difference of `a` against `b`.
#[inline]
fn normalized_difference(a: f32, b: f32) -> f32 {
    (a - b) / (a + b + EPSILON)
}

/// NDVI = (nir - red) / (nir + red + ε)
#[inline]
pub fn ndvi(red: f32, nir: f32) -> f32 {
    normalized_difference(nir, red)
}

/// NDWI = (nir - swir) / (nir + swir + ε), with red standing in for a
/// missing SWIR band.
#[inline]
pub fn ndwi(red: f32, nir: f32, swir: Option<f32>) -> f32 {
    normalized_difference(nir, swir.unwrap_or(red))
}

/// EVI = 2.5 (nir - red) / (nir + 6 red - 7.5 blue + 1), with blue taken as
/// zero when missing.
#[inline]
pub fn evi(red: f32, nir: f32, blue: Option<f32>) -> f32 {
    let blue = blue.unwrap_or(0.0);
    2.5 * (nir - red) / (nir + 6.0 * red - 7.5 * blue + 1.0)
}

/// SAVI = 1.5 (nir - red) / (nir + red + 0.5)
#[inline]
pub fn savi(red: f32, nir: f32) -> f32 {
    (1.0 + SAVI_L) * (nir - red) / (nir + red + SAVI_L)
}

/// GNDVI = (nir - green) / (nir + green + ε), with red standing in for a
/// missing green band.
#[inline]
pub fn gndvi(red: f32, nir: f32, green: Option<f32>) -> f32 {
    normalized_difference(nir, green.unwrap_or(red))
}

/// Clamp a raw index value into `[-1, 1]`.
///
/// NaN (NaN inputs, 0/0) is kept for the renderer's no-data slot. Infinities
/// from a zero denominator saturate to the nearest bound.
#[inline]
pub fn clamp_index(value: f32) -> f32 {
    if value.is_nan() {
        f32::NAN
    } else {
        value.clamp(-1.0, 1.0)
    }
}
