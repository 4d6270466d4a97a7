//! Fixed five-class classification of index values.
//!
//! Classes are closed on the left and open on the right, so every finite
//! value lands in exactly one class. NaN lands in none and takes the
//! reserved no-data palette slot.

use index_common::Grid;
use rayon::prelude::*;

/// One interval of the classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexClass {
    /// Lower edge as drawn on the legend. The first class also takes
    /// everything below it.
    pub lower: f64,
    /// Upper edge as drawn on the legend. The last class also takes
    /// everything above it.
    pub upper: f64,
    pub color: [u8; 3],
    pub label: &'static str,
}

impl IndexClass {
    /// Width of the interval inside the clamped `[-1, 1]` range.
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }
}

pub const CLASSES: [IndexClass; 5] = [
    IndexClass {
        lower: -1.0,
        upper: 0.0,
        color: [100, 150, 255],
        label: "water/low",
    },
    IndexClass {
        lower: 0.0,
        upper: 0.2,
        color: [200, 200, 200],
        label: "bare/sparse",
    },
    IndexClass {
        lower: 0.2,
        upper: 0.5,
        color: [255, 255, 0],
        label: "moderate",
    },
    IndexClass {
        lower: 0.5,
        upper: 0.8,
        color: [144, 238, 144],
        label: "healthy",
    },
    IndexClass {
        lower: 0.8,
        upper: 1.0,
        color: [0, 128, 0],
        label: "dense",
    },
];

/// Palette slot for NaN pixels.
pub const NO_DATA_INDEX: u8 = 5;

/// RGBA palette: the five class colors, then transparent no-data.
pub const PALETTE: [(u8, u8, u8, u8); 6] = [
    (100, 150, 255, 255),
    (200, 200, 200, 255),
    (255, 255, 0, 255),
    (144, 238, 144, 255),
    (0, 128, 0, 255),
    (0, 0, 0, 0),
];

/// Palette index for one value.
#[inline]
pub fn class_index(value: f32) -> u8 {
    if value.is_nan() {
        return NO_DATA_INDEX;
    }
    let value = value as f64;
    // Classes after the first start at their lower edge
    CLASSES[1..]
        .iter()
        .take_while(|class| value >= class.lower)
        .count() as u8
}

/// A classified grid: one palette index per pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedImage {
    pub width: usize,
    pub height: usize,
    pub indices: Vec<u8>,
}

impl ClassifiedImage {
    /// RGBA bytes, 4 per pixel.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut pixels = Vec::with_capacity(self.indices.len() * 4);
        for &idx in &self.indices {
            let (r, g, b, a) = PALETTE[idx as usize];
            pixels.extend_from_slice(&[r, g, b, a]);
        }
        pixels
    }

    /// Number of pixels in each palette slot.
    pub fn histogram(&self) -> [usize; PALETTE.len()] {
        let mut counts = [0usize; PALETTE.len()];
        for &idx in &self.indices {
            counts[idx as usize] += 1;
        }
        counts
    }
}

/// Classify every pixel of an index grid.
pub fn classify(grid: &Grid) -> ClassifiedImage {
    let indices = grid.data().par_iter().map(|&v| class_index(v)).collect();
    ClassifiedImage {
        width: grid.width(),
        height: grid.height(),
        indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_closed_left() {
        assert_eq!(class_index(0.0), 1);
        assert_eq!(class_index(0.2), 2);
        assert_eq!(class_index(0.5), 3);
        assert_eq!(class_index(0.8), 4);
    }

    #[test]
    fn test_just_below_boundaries() {
        assert_eq!(class_index(-f32::EPSILON), 0);
        assert_eq!(class_index(0.199_999), 1);
        assert_eq!(class_index(0.499_999), 2);
        assert_eq!(class_index(0.799_999), 3);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(class_index(-1.0), 0);
        assert_eq!(class_index(-5.0), 0);
        assert_eq!(class_index(1.0), 4);
        assert_eq!(class_index(7.0), 4);
        assert_eq!(class_index(f32::NAN), NO_DATA_INDEX);
    }

    #[test]
    fn test_palette_matches_classes() {
        for (i, class) in CLASSES.iter().enumerate() {
            let (r, g, b, a) = PALETTE[i];
            assert_eq!([r, g, b], class.color);
            assert_eq!(a, 255);
        }
        assert_eq!(PALETTE[NO_DATA_INDEX as usize].3, 0);
    }

    #[test]
    fn test_classify_grid() {
        let grid = Grid::new(3, 2, vec![-0.5, 0.1, 0.3, 0.6, 0.9, f32::NAN]).unwrap();
        let classified = classify(&grid);

        assert_eq!(classified.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(classified.histogram(), [1, 1, 1, 1, 1, 1]);

        let rgba = classified.to_rgba();
        assert_eq!(&rgba[0..4], &[100, 150, 255, 255]);
        assert_eq!(&rgba[20..24], &[0, 0, 0, 0]);
    }
}
